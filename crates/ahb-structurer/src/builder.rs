//! Document assembly
//!
//! Folds the classified row stream into the section hierarchy. The
//! accumulator below is the only mutable state of the whole pass; it is
//! threaded through a single forward sweep with no backtracking.

use ahb_types::{Row, Section};
use tracing::{debug, trace};

use crate::classify::{classify_row, RowClass};
use crate::config::LayoutConfig;

/// Accumulator for the single pass over all pages.
#[derive(Debug, Default)]
pub(crate) struct DocumentBuilder {
    sections: Vec<Section>,
    current: Option<Section>,
    /// Label text seen since the last appended row; becomes the title of
    /// the next section header.
    pending_title: Option<String>,
}

impl DocumentBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push_row(&mut self, row: Row, page: u32, config: &LayoutConfig) {
        let has_target = self
            .current
            .as_ref()
            .map(|section| !section.rows.is_empty())
            .unwrap_or(false);

        match classify_row(&row, has_target, config) {
            RowClass::TableHeader => trace!(page, "discarding table header row"),
            RowClass::SectionHeader { codes } => self.open_section(codes, page),
            RowClass::KommunikationVon { values } => {
                if let Some(section) = self.current.as_mut() {
                    // First occurrence wins; page-break repeats are ignored.
                    if section.kommunikation_von.is_empty() {
                        section.kommunikation_von = values;
                    }
                }
            }
            RowClass::StatusHeaders => {
                if let Some(section) = self.current.as_mut() {
                    if section.status_col1_header.is_empty() {
                        section.status_col1_header = row.status_col1.trim().to_string();
                    }
                    if section.status_col2_header.is_empty() {
                        section.status_col2_header = row.status_col2.trim().to_string();
                    }
                }
            }
            RowClass::Data => {
                if let Some(section) = self.current.as_mut() {
                    section.rows.push(row);
                    self.pending_title = None;
                } else {
                    // Data before the first section header (cover pages,
                    // legends) has nowhere to go.
                    trace!(page, "dropping data row outside any section");
                }
            }
            RowClass::Continuation => self.continue_last_row(row),
            RowClass::Label => {
                let text = row.beschreibung.trim().to_string();
                self.pending_title = Some(match self.pending_title.take() {
                    Some(prior) => format!("{prior} {text}"),
                    None => text.clone(),
                });
                if let Some(section) = self.current.as_mut() {
                    section.rows.push(Row::label(text));
                }
            }
            RowClass::Noise => trace!(page, "dropping unclassified row"),
        }
    }

    fn open_section(&mut self, codes: Vec<String>, page: u32) {
        if let Some(section) = self.current.as_ref() {
            if section.pruefidentifikator == codes {
                // Same header repeated after a page break.
                trace!(page, key = %section.key(), "discarding repeated section header");
                return;
            }
        }
        self.flush_current();
        debug!(page, key = %codes.join(","), "opening section");
        self.current = Some(Section {
            title: self.pending_title.take().unwrap_or_default(),
            pruefidentifikator: codes,
            page_start: page,
            ..Section::default()
        });
    }

    fn continue_last_row(&mut self, row: Row) {
        let Some(target) = self
            .current
            .as_mut()
            .and_then(|section| section.rows.last_mut())
        else {
            // Consistency violation: continuation with no prior row. Best
            // effort over aborting, so it is a no-op.
            trace!("dropping continuation without a prior row");
            return;
        };
        append_field(&mut target.beschreibung, &row.beschreibung);
        append_field(&mut target.status_col1, &row.status_col1);
        append_field(&mut target.status_col2, &row.status_col2);
        append_field(&mut target.bedingung, &row.bedingung);
    }

    fn flush_current(&mut self) {
        if let Some(section) = self.current.take() {
            self.sections.push(section);
        }
    }

    /// Closes the last open section; the input ends without a trailing
    /// header marking closure.
    pub(crate) fn finish(mut self) -> Vec<Section> {
        self.flush_current();
        self.sections
    }
}

fn append_field(target: &mut String, addition: &str) {
    let addition = addition.trim();
    if addition.is_empty() {
        return;
    }
    if !target.is_empty() {
        target.push(' ');
    }
    target.push_str(addition);
}
