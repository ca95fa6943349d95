//! Row classification
//!
//! The classifier is a strict decision chain: table header, section header,
//! section metadata, data row, continuation, label. Each guard falls
//! through to the next; rows matching none are noise and get dropped.

use ahb_types::Row;

use crate::config::LayoutConfig;
use crate::patterns::{parse_pruefidentifikatoren, DATA_ELEMENT_RE, GROUP_CODE_RE};

/// What one visual row means for the document structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowClass {
    /// Repeated column header of the table layout; discarded.
    TableHeader,
    /// Opens a new section (or repeats the current one on a page break).
    SectionHeader { codes: Vec<String> },
    /// Communication-direction metadata for the current section.
    KommunikationVon { values: Vec<String> },
    /// Status-column header metadata for the current section.
    StatusHeaders,
    /// Ordinary data row; becomes the continuation target.
    Data,
    /// Wrapped cell text belonging to the previously appended row.
    Continuation,
    /// Sub-heading row; also the pending title for the next section.
    Label,
    /// Matches nothing; silently dropped.
    Noise,
}

/// Classifies one assembled row.
///
/// `has_continuation_target` tells whether the current section already has
/// a row that wrapped text could continue; without it, description-only
/// rows become labels instead.
pub fn classify_row(row: &Row, has_continuation_target: bool, config: &LayoutConfig) -> RowClass {
    if is_table_header(row, config) {
        return RowClass::TableHeader;
    }

    if row.beschreibung.contains(&config.section_marker) {
        let mut codes = Vec::new();
        if let Some(ids) = parse_pruefidentifikatoren(row.status_col1.trim()) {
            codes.extend(ids);
        }
        if let Some(ids) = parse_pruefidentifikatoren(row.status_col2.trim()) {
            codes.extend(ids);
        }
        // The marker word alone is not enough: ordinary rows mention it as
        // a field label. Only the 5-digit code shape makes a real header.
        if !codes.is_empty() {
            return RowClass::SectionHeader { codes };
        }
    }

    if row.beschreibung.contains(&config.kommunikation_marker) {
        let values = [&row.status_col1, &row.status_col2, &row.bedingung]
            .iter()
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(|v| v.to_string())
            .collect();
        return RowClass::KommunikationVon { values };
    }

    let structural = has_structural_content(row, config);

    if !structural && row.beschreibung.trim().is_empty() && is_status_header(row, config) {
        return RowClass::StatusHeaders;
    }

    if structural {
        return RowClass::Data;
    }

    let any_free_text = !row.beschreibung.trim().is_empty()
        || !row.status_col1.trim().is_empty()
        || !row.status_col2.trim().is_empty()
        || !row.bedingung.trim().is_empty();

    if any_free_text && has_continuation_target {
        return RowClass::Continuation;
    }

    if !row.beschreibung.trim().is_empty()
        && row.status_col1.trim().is_empty()
        && row.status_col2.trim().is_empty()
        && row.bedingung.trim().is_empty()
    {
        return RowClass::Label;
    }

    RowClass::Noise
}

/// Structural content marks a data row: a well-formed segment group, a
/// known segment tag or a four-digit data element.
pub fn has_structural_content(row: &Row, config: &LayoutConfig) -> bool {
    GROUP_CODE_RE.is_match(row.segment_group.trim())
        || config.is_known_segment(row.segment_code.trim())
        || DATA_ELEMENT_RE.is_match(row.data_element.trim())
}

fn is_table_header(row: &Row, config: &LayoutConfig) -> bool {
    let text = [
        &row.segment_group,
        &row.segment_code,
        &row.data_element,
        &row.beschreibung,
        &row.status_col1,
        &row.status_col2,
        &row.bedingung,
    ]
    .iter()
    .map(|s| s.as_str())
    .collect::<Vec<_>>()
    .join(" ");
    text.contains(&config.table_header_markers.0) && text.contains(&config.table_header_markers.1)
}

fn is_status_header(row: &Row, config: &LayoutConfig) -> bool {
    config.status_header_keywords.iter().any(|keyword| {
        row.status_col1.contains(keyword) || row.status_col2.contains(keyword)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> LayoutConfig {
        LayoutConfig::default()
    }

    fn data_row() -> Row {
        Row {
            segment_group: "SG2".into(),
            segment_code: "CTA".into(),
            data_element: "3139".into(),
            beschreibung: "Funktion des Ansprechpartners".into(),
            status_col1: "Muss".into(),
            ..Row::default()
        }
    }

    #[test]
    fn test_table_header_is_discarded_first() {
        let row = Row {
            beschreibung: "EDIFACT Struktur Beschreibung".into(),
            ..Row::default()
        };
        assert_eq!(classify_row(&row, true, &config()), RowClass::TableHeader);
    }

    #[test]
    fn test_section_header_needs_marker_and_code_shape() {
        let row = Row {
            beschreibung: "Prüfidentifikator".into(),
            status_col1: "11016".into(),
            status_col2: "11017".into(),
            ..Row::default()
        };
        assert_eq!(
            classify_row(&row, false, &config()),
            RowClass::SectionHeader {
                codes: vec!["11016".into(), "11017".into()]
            }
        );
    }

    #[test]
    fn test_marker_without_code_shape_is_not_a_header() {
        // A data row may mention the marker word as a field label.
        let row = Row {
            data_element: "7165".into(),
            beschreibung: "Prüfidentifikator".into(),
            status_col1: "Muss".into(),
            ..Row::default()
        };
        assert_eq!(classify_row(&row, true, &config()), RowClass::Data);
    }

    #[test]
    fn test_two_codes_in_one_status_field() {
        let row = Row {
            beschreibung: "Prüfidentifikator".into(),
            status_col1: "21025 21026".into(),
            ..Row::default()
        };
        assert_eq!(
            classify_row(&row, false, &config()),
            RowClass::SectionHeader {
                codes: vec!["21025".into(), "21026".into()]
            }
        );
    }

    #[test]
    fn test_kommunikation_row_collects_values() {
        let row = Row {
            beschreibung: "Kommunikation von".into(),
            status_col1: "NB an LF".into(),
            ..Row::default()
        };
        assert_eq!(
            classify_row(&row, true, &config()),
            RowClass::KommunikationVon {
                values: vec!["NB an LF".into()]
            }
        );
    }

    #[test]
    fn test_status_header_row() {
        let row = Row {
            status_col1: "Muss".into(),
            status_col2: "Soll".into(),
            ..Row::default()
        };
        assert_eq!(classify_row(&row, false, &config()), RowClass::StatusHeaders);
    }

    #[test]
    fn test_data_row_by_each_structural_field() {
        let by_group = Row {
            segment_group: "SG4".into(),
            ..Row::default()
        };
        let by_code = Row {
            segment_code: "DTM".into(),
            ..Row::default()
        };
        let by_element = Row {
            data_element: "2379".into(),
            ..Row::default()
        };
        assert_eq!(classify_row(&by_group, false, &config()), RowClass::Data);
        assert_eq!(classify_row(&by_code, false, &config()), RowClass::Data);
        assert_eq!(classify_row(&by_element, false, &config()), RowClass::Data);
    }

    #[test]
    fn test_unknown_segment_code_is_not_structural() {
        let row = Row {
            segment_code: "XYZ".into(),
            ..Row::default()
        };
        assert_eq!(classify_row(&row, false, &config()), RowClass::Noise);
    }

    #[test]
    fn test_wrapped_text_continues_prior_row() {
        let row = Row {
            beschreibung: "des Ansprechpartners".into(),
            ..Row::default()
        };
        assert_eq!(classify_row(&row, true, &config()), RowClass::Continuation);
    }

    #[test]
    fn test_description_only_without_target_is_label() {
        let row = Row {
            beschreibung: "Sendungsdaten".into(),
            ..Row::default()
        };
        assert_eq!(classify_row(&row, false, &config()), RowClass::Label);
    }

    #[test]
    fn test_condition_text_without_target_is_noise() {
        let row = Row {
            beschreibung: "Rest".into(),
            bedingung: "[28]".into(),
            ..Row::default()
        };
        assert_eq!(classify_row(&row, false, &config()), RowClass::Noise);
    }

    #[test]
    fn test_empty_row_is_noise() {
        assert_eq!(classify_row(&Row::default(), true, &config()), RowClass::Noise);
    }

    #[test]
    fn test_plain_data_row() {
        assert_eq!(classify_row(&data_row(), true, &config()), RowClass::Data);
    }
}
