//! Visual row assembly
//!
//! Turns the unordered fragment bag of one page into top-to-bottom rows
//! with column-classified field texts. Purely geometric; classification of
//! what a row *means* happens in [`crate::classify`].

use std::cmp::Ordering;

use ahb_types::{Row, TextFragment};

use crate::config::{Column, LayoutConfig};

/// Assembles the page's fragments into visual rows.
///
/// Fragments outside the content band are dropped, the rest are read in
/// descending-y/ascending-x order and chained into rows wherever the
/// y-distance to the previous fragment stays within the configured
/// tolerance. Same-band fragments are concatenated in x-order, space-joined.
pub fn assemble_rows(fragments: &[TextFragment], config: &LayoutConfig) -> Vec<Row> {
    let mut visible: Vec<&TextFragment> = fragments
        .iter()
        .filter(|f| config.in_content_band(f.y) && !f.text.trim().is_empty())
        .collect();

    visible.sort_by(|a, b| {
        b.y.partial_cmp(&a.y)
            .unwrap_or(Ordering::Equal)
            .then(a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal))
    });

    let mut groups: Vec<Vec<&TextFragment>> = Vec::new();
    let mut prev_y = f64::INFINITY;
    for fragment in visible {
        let same_row = (prev_y - fragment.y).abs() <= config.row_y_tolerance;
        match groups.last_mut() {
            Some(group) if same_row => group.push(fragment),
            _ => groups.push(vec![fragment]),
        }
        prev_y = fragment.y;
    }

    groups
        .into_iter()
        .map(|group| row_from_group(group, config))
        .collect()
}

fn row_from_group(mut group: Vec<&TextFragment>, config: &LayoutConfig) -> Row {
    // Fragments of one row can differ slightly in y, which the global sort
    // ranks ahead of x; restore strict left-to-right order.
    group.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal));

    let mut row = Row::default();
    for fragment in group {
        let field = match config.column_for_x(fragment.x) {
            Column::SegmentGroup => &mut row.segment_group,
            Column::SegmentCode => &mut row.segment_code,
            Column::DataElement => &mut row.data_element,
            Column::Beschreibung => &mut row.beschreibung,
            Column::Status1 => &mut row.status_col1,
            Column::Status2 => &mut row.status_col2,
            Column::Bedingung => &mut row.bedingung,
        };
        if !field.is_empty() {
            field.push(' ');
        }
        field.push_str(fragment.text.trim());
    }
    row
}
