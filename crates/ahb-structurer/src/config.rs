//! Layout configuration for the known AHB table family
//!
//! Everything the structurer knows about the page layout lives here:
//! column boundaries, the row-grouping tolerance, the header/footer
//! exclusion band, the segment vocabulary and the marker keywords. A
//! different table layout means a different `LayoutConfig`, never a
//! different algorithm.

/// The seven columns of an AHB table, in left-to-right page order.
///
/// The leftmost band ("EDIFACT Struktur") is split into three structural
/// sub-bands for segment group, segment code and data element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    SegmentGroup,
    SegmentCode,
    DataElement,
    Beschreibung,
    Status1,
    Status2,
    Bedingung,
}

#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Fragments with y at or above this are running-header noise.
    pub header_y: f64,
    /// Fragments with y at or below this are footer noise.
    pub footer_y: f64,
    /// Maximum y-distance between fragments of the same visual row.
    ///
    /// Layout-specific: too small splits one logical row into many, too
    /// large merges independent rows.
    pub row_y_tolerance: f64,

    // Right edges of the column bands, ascending. A fragment belongs to the
    // first band whose right edge lies beyond its x position; everything
    // past `x_status2_end` is Bedingung.
    pub x_segment_group_end: f64,
    pub x_segment_code_end: f64,
    pub x_data_element_end: f64,
    pub x_beschreibung_end: f64,
    pub x_status1_end: f64,
    pub x_status2_end: f64,

    /// Known EDIFACT segment tags; a value outside this vocabulary in the
    /// segment-code band does not count as structural content.
    pub segment_codes: Vec<String>,
    /// Marker word that opens a section header row.
    pub section_marker: String,
    /// Marker phrase of the communication-direction metadata row.
    pub kommunikation_marker: String,
    /// Word pair identifying the repeated table header row; a row
    /// containing both is discarded.
    pub table_header_markers: (String, String),
    /// Keywords that identify a status-column header row.
    pub status_header_keywords: Vec<String>,
}

impl LayoutConfig {
    pub fn column_for_x(&self, x: f64) -> Column {
        if x < self.x_segment_group_end {
            Column::SegmentGroup
        } else if x < self.x_segment_code_end {
            Column::SegmentCode
        } else if x < self.x_data_element_end {
            Column::DataElement
        } else if x < self.x_beschreibung_end {
            Column::Beschreibung
        } else if x < self.x_status1_end {
            Column::Status1
        } else if x < self.x_status2_end {
            Column::Status2
        } else {
            Column::Bedingung
        }
    }

    pub fn in_content_band(&self, y: f64) -> bool {
        y > self.footer_y && y < self.header_y
    }

    pub fn is_known_segment(&self, code: &str) -> bool {
        self.segment_codes.iter().any(|known| known == code)
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            header_y: 780.0,
            footer_y: 60.0,
            row_y_tolerance: 2.5,
            x_segment_group_end: 55.0,
            x_segment_code_end: 85.0,
            x_data_element_end: 115.0,
            x_beschreibung_end: 360.0,
            x_status1_end: 440.0,
            x_status2_end: 520.0,
            segment_codes: [
                "UNA", "UNB", "UNH", "BGM", "DTM", "IMD", "LOC", "MEA", "NAD", "PIA", "QTY",
                "RFF", "SEQ", "STS", "AGR", "CAV", "CCI", "COM", "CTA", "CUX", "FTX", "IDE",
                "LIN", "MOA", "PRI", "TAX", "UNS", "UNT", "UNZ",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            section_marker: "Prüfidentifikator".to_string(),
            kommunikation_marker: "Kommunikation von".to_string(),
            table_header_markers: ("EDIFACT".to_string(), "Struktur".to_string()),
            status_header_keywords: vec![
                "Muss".to_string(),
                "Soll".to_string(),
                "Kann".to_string(),
                "Status".to_string(),
            ],
        }
    }
}
