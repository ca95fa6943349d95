//! Page reader collaborator for the AHB structurer
//!
//! Supplies the per-page `{text, x, y}` fragment sequences the structurer
//! consumes. The two core passes never depend on this crate; swap in any
//! other reader that produces the same fragments.

pub mod error;
pub mod reader;

pub use error::PdfReadError;
pub use reader::extract_pages;
