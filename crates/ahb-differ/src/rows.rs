//! Row matching within a matched section pair
//!
//! Rows are grouped by compound key on both sides (duplicates keep their
//! original order), then paired positionally per key: index 0 with index 0
//! and so on. The longer side's surplus becomes added/removed diffs.
//! Every input row lands in exactly one diff.

use std::collections::HashMap;

use ahb_types::{ChangeKind, FieldChange, Row, RowDiff};

use crate::key::row_key;
use crate::normalize::normalize;

/// Matches the rows of one section pair and reports per-key diffs, in key
/// first-appearance order (old document first).
pub fn match_rows<'a>(old_rows: &'a [Row], new_rows: &'a [Row]) -> Vec<RowDiff<'a>> {
    let mut key_order: Vec<String> = Vec::new();
    let mut old_by_key: HashMap<String, Vec<&'a Row>> = HashMap::new();
    for (order, row) in old_rows.iter().enumerate() {
        let key = row_key(row, order);
        if !old_by_key.contains_key(&key) {
            key_order.push(key.clone());
        }
        old_by_key.entry(key).or_default().push(row);
    }

    let mut new_by_key: HashMap<String, Vec<&'a Row>> = HashMap::new();
    for (order, row) in new_rows.iter().enumerate() {
        let key = row_key(row, order);
        if !old_by_key.contains_key(&key) && !new_by_key.contains_key(&key) {
            key_order.push(key.clone());
        }
        new_by_key.entry(key).or_default().push(row);
    }

    let mut diffs = Vec::new();
    for key in key_order {
        let olds = old_by_key.remove(&key).unwrap_or_default();
        let news = new_by_key.remove(&key).unwrap_or_default();
        let paired = olds.len().min(news.len());

        for index in 0..paired {
            let (old, new) = (olds[index], news[index]);
            let changes = field_changes(old, new);
            diffs.push(RowDiff {
                kind: if changes.is_empty() {
                    ChangeKind::Unchanged
                } else {
                    ChangeKind::Modified
                },
                key: key.clone(),
                old: Some(old),
                new: Some(new),
                changes,
            });
        }
        for &old in &olds[paired..] {
            diffs.push(RowDiff {
                kind: ChangeKind::Removed,
                key: key.clone(),
                old: Some(old),
                new: None,
                changes: vec![],
            });
        }
        for &new in &news[paired..] {
            diffs.push(RowDiff {
                kind: ChangeKind::Added,
                key: key.clone(),
                old: None,
                new: Some(new),
                changes: vec![],
            });
        }
    }
    diffs
}

/// Compares the four free-text fields plus the two structural
/// identifiers. The identifiers also feed the key, but a changed value in
/// an identical-index pair still means a change within that matched slot.
fn field_changes(old: &Row, new: &Row) -> Vec<FieldChange> {
    let pairs: [(&'static str, &str, &str); 6] = [
        ("beschreibung", &old.beschreibung, &new.beschreibung),
        ("status_col1", &old.status_col1, &new.status_col1),
        ("status_col2", &old.status_col2, &new.status_col2),
        ("bedingung", &old.bedingung, &new.bedingung),
        ("segment_group", &old.segment_group, &new.segment_group),
        ("segment_code", &old.segment_code, &new.segment_code),
    ];

    let mut changes = Vec::new();
    for (field, old_value, new_value) in pairs {
        if normalize(old_value) != normalize(new_value) {
            changes.push(FieldChange {
                field,
                old: old_value.trim().to_string(),
                new: new_value.trim().to_string(),
            });
        }
    }
    changes
}
