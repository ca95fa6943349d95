//! Structural comparison of two structured AHB documents
//!
//! Sections match by their full comma-joined Prüfidentifikator key, rows
//! by compound semantic keys with positional sub-matching. All equality
//! tests run through [`normalize::normalize`]. The pass is pure: the
//! result borrows both inputs and holds no copies.

pub mod key;
pub mod normalize;
pub mod rows;

use std::collections::HashMap;

use ahb_types::{
    ChangeKind, ComparisonResult, DiffSummary, FieldChange, Section, SectionDiff,
    StructuredDocument,
};
use tracing::debug;

use normalize::normalize;
pub use rows::match_rows;

/// Compares two structured documents, old against new.
///
/// Section diffs come back ordered modified, added, removed, unchanged;
/// within one kind the order follows key first-appearance (old document
/// first) and carries no further meaning.
pub fn compare_documents<'a>(
    old: &'a StructuredDocument,
    new: &'a StructuredDocument,
) -> ComparisonResult<'a> {
    let (old_keys, old_by_key) = index_sections(&old.sections);
    let (new_keys, new_by_key) = index_sections(&new.sections);

    let mut key_order = old_keys;
    for key in new_keys {
        if !old_by_key.contains_key(&key) {
            key_order.push(key);
        }
    }

    let mut section_diffs = Vec::new();
    for section_key in key_order {
        let diff = match (
            old_by_key.get(&section_key),
            new_by_key.get(&section_key),
        ) {
            (Some(old_section), None) => SectionDiff {
                kind: ChangeKind::Removed,
                key: section_key,
                old: Some(*old_section),
                new: None,
                meta_changes: vec![],
                row_diffs: vec![],
            },
            (None, Some(new_section)) => SectionDiff {
                kind: ChangeKind::Added,
                key: section_key,
                old: None,
                new: Some(*new_section),
                meta_changes: vec![],
                row_diffs: vec![],
            },
            (Some(old_section), Some(new_section)) => {
                let row_diffs = match_rows(&old_section.rows, &new_section.rows);
                let meta_changes = meta_changes(old_section, new_section);
                let changed = !meta_changes.is_empty()
                    || row_diffs.iter().any(|d| d.kind != ChangeKind::Unchanged);
                SectionDiff {
                    kind: if changed {
                        ChangeKind::Modified
                    } else {
                        ChangeKind::Unchanged
                    },
                    key: section_key,
                    old: Some(*old_section),
                    new: Some(*new_section),
                    meta_changes,
                    row_diffs,
                }
            }
            (None, None) => unreachable!("key collected from one of the maps"),
        };
        section_diffs.push(diff);
    }

    // Stable sort keeps first-appearance order within each kind.
    section_diffs.sort_by_key(|diff| kind_priority(diff.kind));

    let summary = summarize(&section_diffs);
    debug!(
        old = %old.version,
        new = %new.version,
        modified = summary.modified,
        added = summary.added,
        removed = summary.removed,
        unchanged = summary.unchanged,
        "compared documents"
    );

    ComparisonResult {
        old_version: old.version.clone(),
        new_version: new.version.clone(),
        summary,
        section_diffs,
    }
}

/// First section per key wins; later duplicates within one document are
/// ignored.
fn index_sections(sections: &[Section]) -> (Vec<String>, HashMap<String, &Section>) {
    let mut order = Vec::new();
    let mut by_key: HashMap<String, &Section> = HashMap::new();
    for section in sections {
        let key = section.key();
        if !by_key.contains_key(&key) {
            order.push(key.clone());
            by_key.insert(key, section);
        }
    }
    (order, by_key)
}

fn meta_changes(old: &Section, new: &Section) -> Vec<FieldChange> {
    let fields: [(&'static str, String, String); 4] = [
        ("title", old.title.clone(), new.title.clone()),
        (
            "kommunikation_von",
            old.kommunikation_von.join(", "),
            new.kommunikation_von.join(", "),
        ),
        (
            "status_col1_header",
            old.status_col1_header.clone(),
            new.status_col1_header.clone(),
        ),
        (
            "status_col2_header",
            old.status_col2_header.clone(),
            new.status_col2_header.clone(),
        ),
    ];

    fields
        .into_iter()
        .filter(|(_, old_value, new_value)| normalize(old_value) != normalize(new_value))
        .map(|(field, old_value, new_value)| FieldChange {
            field,
            old: old_value.trim().to_string(),
            new: new_value.trim().to_string(),
        })
        .collect()
}

fn kind_priority(kind: ChangeKind) -> u8 {
    match kind {
        ChangeKind::Modified => 0,
        ChangeKind::Added => 1,
        ChangeKind::Removed => 2,
        ChangeKind::Unchanged => 3,
    }
}

fn summarize(section_diffs: &[SectionDiff<'_>]) -> DiffSummary {
    let mut summary = DiffSummary::default();
    for diff in section_diffs {
        match diff.kind {
            ChangeKind::Added => summary.added += 1,
            ChangeKind::Removed => summary.removed += 1,
            ChangeKind::Modified => summary.modified += 1,
            ChangeKind::Unchanged => summary.unchanged += 1,
        }
        for row_diff in &diff.row_diffs {
            match row_diff.kind {
                ChangeKind::Added => summary.rows_added += 1,
                ChangeKind::Removed => summary.rows_removed += 1,
                ChangeKind::Modified => summary.rows_modified += 1,
                ChangeKind::Unchanged => summary.rows_unchanged += 1,
            }
        }
    }
    summary
}
