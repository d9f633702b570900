//! PDF text extraction.
//!
//! Thin wrapper over `pdf-extract` so the rest of the crate deals in one
//! error type and never touches the PDF parser directly.

use thiserror::Error;

#[derive(Debug, Error)]
#[error("failed to extract text: {0}")]
pub struct ExtractError(#[from] pdf_extract::OutputError);

/// Pulls the plain text out of an in-memory PDF.
pub fn pdf_to_text(data: &[u8]) -> Result<String, ExtractError> {
    Ok(pdf_extract::extract_text_from_mem(data)?)
}
