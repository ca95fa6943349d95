//! Comparison result model
//!
//! Diff values borrow the two input documents instead of copying them, so a
//! `ComparisonResult` is only valid while both `StructuredDocument`s are
//! alive. Everything here serializes for downstream consumers (persistence,
//! report rendering) but is never deserialized by this workspace.

use crate::document::{Row, Section};

/// How a matched entity changed between the two versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Added,
    Removed,
    Modified,
    Unchanged,
}

/// A single field-level change on a matched row or section.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FieldChange {
    pub field: &'static str,
    pub old: String,
    pub new: String,
}

/// Result of matching one compound row key across the two versions.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RowDiff<'a> {
    pub kind: ChangeKind,
    pub key: String,
    pub old: Option<&'a Row>,
    pub new: Option<&'a Row>,
    /// Field-level changes; non-empty only for `Modified`.
    pub changes: Vec<FieldChange>,
}

/// Result of matching one Prüfidentifikator key across the two versions.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SectionDiff<'a> {
    pub kind: ChangeKind,
    pub key: String,
    pub old: Option<&'a Section>,
    pub new: Option<&'a Section>,
    /// Changes to section metadata (title, communication direction, status
    /// column headers); non-empty only for `Modified`.
    pub meta_changes: Vec<FieldChange>,
    /// Row-level diffs; populated only for matched (modified/unchanged)
    /// sections.
    pub row_diffs: Vec<RowDiff<'a>>,
}

/// Aggregate counts over one comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct DiffSummary {
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
    pub unchanged: usize,
    pub rows_added: usize,
    pub rows_removed: usize,
    pub rows_modified: usize,
    pub rows_unchanged: usize,
}

/// The differ's output: summary plus ordered section diffs
/// (modified first, then added, removed, unchanged).
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ComparisonResult<'a> {
    pub old_version: String,
    pub new_version: String,
    pub summary: DiffSummary,
    pub section_diffs: Vec<SectionDiff<'a>>,
}
