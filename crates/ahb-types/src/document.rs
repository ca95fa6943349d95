//! Structured view of one AHB document

/// A positioned piece of text, as delivered by the page reader.
///
/// Coordinates are PDF-style: y grows upward, so larger y means closer to
/// the top of the page. Fragments arrive in no guaranteed order.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextFragment {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

impl TextFragment {
    pub fn new(text: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            text: text.into(),
            x,
            y,
        }
    }
}

/// One table entry within a section.
///
/// Ordinary rows carry the three structural identifiers plus four free-text
/// columns. Label rows (sub-headings) carry description text only and have
/// `is_label` set.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Row {
    pub segment_group: String,
    pub segment_code: String,
    pub data_element: String,
    pub beschreibung: String,
    pub status_col1: String,
    pub status_col2: String,
    pub bedingung: String,
    pub is_label: bool,
}

impl Row {
    /// A sub-heading row with description text only.
    pub fn label(beschreibung: impl Into<String>) -> Self {
        Self {
            beschreibung: beschreibung.into(),
            is_label: true,
            ..Self::default()
        }
    }
}

/// One logical table block, headed by a Prüfidentifikator row.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Section {
    pub title: String,
    /// The 5-digit codes this section covers, in header order. This is the
    /// section's durable cross-version identity.
    pub pruefidentifikator: Vec<String>,
    pub kommunikation_von: Vec<String>,
    pub status_col1_header: String,
    pub status_col2_header: String,
    pub page_start: u32,
    pub rows: Vec<Row>,
}

impl Section {
    /// Match key for cross-version comparison: the full comma-joined code
    /// sequence. Partial overlap of code sets never matches.
    pub fn key(&self) -> String {
        self.pruefidentifikator.join(",")
    }
}

/// The structurer's output for one document version. Built once, never
/// mutated.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StructuredDocument {
    pub version: String,
    pub page_count: u32,
    pub sections: Vec<Section>,
}
