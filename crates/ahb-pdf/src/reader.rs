//! Positioned text extraction from PDF content streams
//!
//! Walks the text-positioning operators of each page and emits one
//! fragment per shown run, carrying the current line position. Best
//! effort for the simple, unrotated text the AHB layout family uses:
//! only the translation part of `Tm` is honored and glyph advances are
//! not modeled, so consecutive shows without repositioning merge into
//! one fragment.

use std::collections::BTreeMap;

use ahb_types::TextFragment;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object};
use tracing::trace;

use crate::error::PdfReadError;

/// Extracts per-page positioned text fragments from PDF bytes.
///
/// Fragment order is whatever the content stream yields; the structurer
/// owns the ordering.
pub fn extract_pages(bytes: &[u8]) -> Result<Vec<Vec<TextFragment>>, PdfReadError> {
    let document = Document::load_mem(bytes).map_err(|e| PdfReadError::Parse(e.to_string()))?;

    let mut pages = Vec::new();
    for (number, page_id) in document.get_pages() {
        let encodings: BTreeMap<Vec<u8>, &str> = document
            .get_page_fonts(page_id)
            .into_iter()
            .map(|(name, font)| (name, font.get_font_encoding()))
            .collect();

        let data = document
            .get_page_content(page_id)
            .map_err(|e| PdfReadError::Content(e.to_string()))?;
        let content = Content::decode(&data).map_err(|e| PdfReadError::Content(e.to_string()))?;

        let fragments = fragments_from_operations(&content.operations, &encodings);
        trace!(page = number, fragments = fragments.len(), "extracted page");
        pages.push(fragments);
    }
    Ok(pages)
}

struct TextCursor<'a> {
    line_x: f64,
    line_y: f64,
    leading: f64,
    encoding: Option<&'a str>,
    /// Text shown since the last positioning operator.
    pending: Option<TextFragment>,
    fragments: Vec<TextFragment>,
}

impl<'a> TextCursor<'a> {
    fn new() -> Self {
        Self {
            line_x: 0.0,
            line_y: 0.0,
            leading: 0.0,
            encoding: None,
            pending: None,
            fragments: Vec::new(),
        }
    }

    fn flush(&mut self) {
        if let Some(fragment) = self.pending.take() {
            if !fragment.text.trim().is_empty() {
                self.fragments.push(fragment);
            }
        }
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.flush();
        self.line_x = x;
        self.line_y = y;
    }

    fn show(&mut self, text: String) {
        match self.pending.as_mut() {
            Some(fragment) => fragment.text.push_str(&text),
            None => self.pending = Some(TextFragment::new(text, self.line_x, self.line_y)),
        }
    }
}

fn fragments_from_operations(
    operations: &[Operation],
    encodings: &BTreeMap<Vec<u8>, &str>,
) -> Vec<TextFragment> {
    let mut cursor = TextCursor::new();

    for operation in operations {
        let operands = &operation.operands;
        match operation.operator.as_str() {
            "BT" => cursor.move_to(0.0, 0.0),
            "ET" => cursor.flush(),
            "Tf" => {
                if let Some(Ok(name)) = operands.first().map(Object::as_name) {
                    cursor.encoding = encodings.get(name).copied();
                }
            }
            "TL" => {
                if let Some(leading) = operands.first().and_then(number) {
                    cursor.leading = leading;
                }
            }
            "Td" | "TD" => {
                if let (Some(tx), Some(ty)) = (
                    operands.first().and_then(number),
                    operands.get(1).and_then(number),
                ) {
                    if operation.operator == "TD" {
                        cursor.leading = -ty;
                    }
                    let (x, y) = (cursor.line_x + tx, cursor.line_y + ty);
                    cursor.move_to(x, y);
                }
            }
            "Tm" => {
                // Only the translation part; rotated text is out of scope.
                if let (Some(x), Some(y)) = (
                    operands.get(4).and_then(number),
                    operands.get(5).and_then(number),
                ) {
                    cursor.move_to(x, y);
                }
            }
            "T*" => {
                let (x, y) = (cursor.line_x, cursor.line_y - cursor.leading);
                cursor.move_to(x, y);
            }
            "Tj" => {
                if let Some(Object::String(bytes, _)) = operands.first() {
                    let text = Document::decode_text(cursor.encoding, bytes);
                    cursor.show(text);
                }
            }
            "'" | "\"" => {
                let (x, y) = (cursor.line_x, cursor.line_y - cursor.leading);
                cursor.move_to(x, y);
                if let Some(Object::String(bytes, _)) = operands.last() {
                    let text = Document::decode_text(cursor.encoding, bytes);
                    cursor.show(text);
                }
            }
            "TJ" => {
                if let Some(Object::Array(elements)) = operands.first() {
                    let mut text = String::new();
                    for element in elements {
                        if let Object::String(bytes, _) = element {
                            text.push_str(&Document::decode_text(cursor.encoding, bytes));
                        }
                    }
                    cursor.show(text);
                }
            }
            _ => {}
        }
    }

    cursor.flush();
    cursor.fragments
}

fn number(object: &Object) -> Option<f64> {
    match object {
        Object::Integer(value) => Some(*value as f64),
        Object::Real(value) => Some(f64::from(*value)),
        _ => None,
    }
}
