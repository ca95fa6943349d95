//! Lexical patterns for row classification

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Segment group identifiers: SG1, SG2, ... SG99.
    pub static ref GROUP_CODE_RE: Regex = Regex::new(r"^SG\d{1,2}$").unwrap();
    /// EDIFACT data element references are four digits.
    pub static ref DATA_ELEMENT_RE: Regex = Regex::new(r"^\d{4}$").unwrap();
    /// One Prüfidentifikator is exactly five digits.
    pub static ref PRUEF_ID_RE: Regex = Regex::new(r"^\d{5}$").unwrap();
}

/// Parses a status-column value as a Prüfidentifikator list.
///
/// Header cells carry one code or several space-separated codes; anything
/// else (including an empty cell) yields `None`. Ordinary data rows put
/// status values like "Muss" here, which correctly fail this shape test.
pub fn parse_pruefidentifikatoren(field: &str) -> Option<Vec<String>> {
    let tokens: Vec<&str> = field.split_whitespace().collect();
    if tokens.is_empty() || !tokens.iter().all(|t| PRUEF_ID_RE.is_match(t)) {
        return None;
    }
    Some(tokens.iter().map(|t| t.to_string()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_code_shape() {
        assert!(GROUP_CODE_RE.is_match("SG2"));
        assert!(GROUP_CODE_RE.is_match("SG12"));
        assert!(!GROUP_CODE_RE.is_match("SG"));
        assert!(!GROUP_CODE_RE.is_match("SG123"));
        assert!(!GROUP_CODE_RE.is_match("sg2"));
    }

    #[test]
    fn test_data_element_shape() {
        assert!(DATA_ELEMENT_RE.is_match("3139"));
        assert!(!DATA_ELEMENT_RE.is_match("313"));
        assert!(!DATA_ELEMENT_RE.is_match("31395"));
        assert!(!DATA_ELEMENT_RE.is_match("C056"));
    }

    #[test]
    fn test_parses_single_code() {
        assert_eq!(
            parse_pruefidentifikatoren("11016"),
            Some(vec!["11016".to_string()])
        );
    }

    #[test]
    fn test_parses_space_separated_codes() {
        assert_eq!(
            parse_pruefidentifikatoren("21025 21026"),
            Some(vec!["21025".to_string(), "21026".to_string()])
        );
    }

    #[test]
    fn test_rejects_status_values_and_noise() {
        assert_eq!(parse_pruefidentifikatoren(""), None);
        assert_eq!(parse_pruefidentifikatoren("Muss"), None);
        assert_eq!(parse_pruefidentifikatoren("11016 Muss"), None);
        assert_eq!(parse_pruefidentifikatoren("1101"), None);
    }
}
