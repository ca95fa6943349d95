//! Shared data model for AHB table structuring and comparison
//!
//! The structurer produces a [`StructuredDocument`] from positioned text
//! fragments; the differ consumes two of them and produces a
//! [`ComparisonResult`] whose diffs borrow the inputs read-only.

pub mod diff;
pub mod document;

pub use diff::{ChangeKind, ComparisonResult, DiffSummary, FieldChange, RowDiff, SectionDiff};
pub use document::{Row, Section, StructuredDocument, TextFragment};
