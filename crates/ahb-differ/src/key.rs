//! Compound row keys
//!
//! Rows are matched across versions by semantic identity, not position.
//! The key is built from the normalized structural identifiers, with two
//! fallbacks: label rows key on their description, rows without any
//! structural content key on their position in the section.

use ahb_types::Row;
use lazy_static::lazy_static;
use regex::Regex;

use crate::normalize::normalize;

lazy_static! {
    /// Qualifier code embedded at the start of a description, e.g. "Z01"
    /// or "IC": caps, digits and underscores, at most ten characters.
    static ref QUALIFIER_RE: Regex = Regex::new(r"^[A-Z0-9_]{1,10}$").unwrap();
}

/// Builds the compound match key for one row.
///
/// `row_order` is the row's index within its section and only used for the
/// positional fallback, so every row is guaranteed some key.
pub fn row_key(row: &Row, row_order: usize) -> String {
    if row.is_label {
        return format!("LABEL:{}", normalize(&row.beschreibung));
    }

    let mut parts: Vec<String> = [&row.segment_group, &row.segment_code, &row.data_element]
        .iter()
        .map(|value| normalize(value))
        .filter(|value| !value.is_empty())
        .collect();

    if parts.is_empty() {
        return format!("POS:{row_order}");
    }

    // Rows sharing structural identifiers can differ by an embedded
    // qualifier code leading the description; fold it into the key.
    if !normalize(&row.data_element).is_empty() {
        if let Some(token) = normalize(&row.beschreibung).split_whitespace().next() {
            if QUALIFIER_RE.is_match(token) {
                parts.push(token.to_string());
            }
        }
    }

    parts.join("|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_structural_key() {
        let row = Row {
            segment_group: "SG2".into(),
            segment_code: "CTA".into(),
            data_element: "3139".into(),
            status_col1: "Muss".into(),
            ..Row::default()
        };
        assert_eq!(row_key(&row, 0), "SG2|CTA|3139");
    }

    #[test]
    fn test_empty_parts_are_skipped() {
        let row = Row {
            segment_code: "UNH".into(),
            ..Row::default()
        };
        assert_eq!(row_key(&row, 4), "UNH");
    }

    #[test]
    fn test_label_key() {
        let row = Row::label("Sendungsdaten");
        assert_eq!(row_key(&row, 7), "LABEL:Sendungsdaten");
    }

    #[test]
    fn test_positional_fallback() {
        let row = Row {
            beschreibung: "nur Text".into(),
            ..Row::default()
        };
        assert_eq!(row_key(&row, 3), "POS:3");
    }

    #[test]
    fn test_qualifier_token_disambiguates() {
        let row = Row {
            segment_code: "CAV".into(),
            data_element: "7111".into(),
            beschreibung: "Z01 Besondere Ausprägung".into(),
            ..Row::default()
        };
        assert_eq!(row_key(&row, 0), "CAV|7111|Z01");
    }

    #[test]
    fn test_lowercase_description_start_is_no_qualifier() {
        let row = Row {
            segment_code: "CAV".into(),
            data_element: "7111".into(),
            beschreibung: "Besondere Ausprägung".into(),
            ..Row::default()
        };
        assert_eq!(row_key(&row, 0), "CAV|7111");
    }

    #[test]
    fn test_qualifier_needs_a_data_element() {
        let row = Row {
            segment_code: "CAV".into(),
            beschreibung: "Z01 Besondere Ausprägung".into(),
            ..Row::default()
        };
        assert_eq!(row_key(&row, 0), "CAV");
    }

    #[test]
    fn test_overlong_token_is_no_qualifier() {
        let row = Row {
            segment_code: "CAV".into(),
            data_element: "7111".into(),
            beschreibung: "ABCDEFGHIJK folgt".into(),
            ..Row::default()
        };
        assert_eq!(row_key(&row, 0), "CAV|7111");
    }

    #[test]
    fn test_key_normalizes_identifier_whitespace() {
        let row = Row {
            segment_group: " SG2\u{00A0}".into(),
            segment_code: "CTA".into(),
            data_element: "3139".into(),
            ..Row::default()
        };
        assert_eq!(row_key(&row, 0), "SG2|CTA|3139");
    }

    #[test]
    fn test_label_key_is_normalized() {
        let row = Row::label("Sendungs\u{00AD}daten  ");
        assert_eq!(row_key(&row, 0), "LABEL:Sendungsdaten");
    }
}
