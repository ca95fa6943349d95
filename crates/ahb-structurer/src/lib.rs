//! Reconstructs AHB table structure from positioned text fragments
//!
//! Input is a per-page bag of `{text, x, y}` fragments in no particular
//! order; output is an ordered [`StructuredDocument`] of sections and rows.
//! The pass is pure and single-sweep: geometry first (sorting, row
//! grouping, column banding), then an ordered classification chain folding
//! rows into sections. Malformed rows are dropped, never raised.

pub mod classify;
pub mod config;
pub mod patterns;
pub mod rows;

mod builder;

use ahb_types::{StructuredDocument, TextFragment};

use builder::DocumentBuilder;
pub use config::LayoutConfig;

/// Structuring pass entry point.
pub struct Structurer {
    config: LayoutConfig,
}

impl Structurer {
    pub fn new() -> Self {
        Self {
            config: LayoutConfig::default(),
        }
    }

    pub fn with_config(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Builds the section hierarchy for one document version.
    ///
    /// `pages` holds one fragment list per page, in page order. The same
    /// input always produces the same output.
    pub fn structure(&self, version: &str, pages: &[Vec<TextFragment>]) -> StructuredDocument {
        let mut builder = DocumentBuilder::new();
        for (index, fragments) in pages.iter().enumerate() {
            let page = index as u32 + 1;
            for row in rows::assemble_rows(fragments, &self.config) {
                builder.push_row(row, page, &self.config);
            }
        }

        let sections = builder.finish();
        tracing::debug!(
            version,
            pages = pages.len(),
            sections = sections.len(),
            "structured document"
        );
        StructuredDocument {
            version: version.to_string(),
            page_count: pages.len() as u32,
            sections,
        }
    }
}

impl Default for Structurer {
    fn default() -> Self {
        Self::new()
    }
}
