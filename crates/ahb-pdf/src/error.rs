use thiserror::Error;

#[derive(Error, Debug)]
pub enum PdfReadError {
    #[error("Failed to parse PDF: {0}")]
    Parse(String),

    #[error("Failed to read page content: {0}")]
    Content(String),
}
