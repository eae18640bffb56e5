//! PDF-to-text extraction for uploaded resumes.

use crate::errors::AppError;

/// Extracts the full text of a PDF held in memory.
///
/// Extraction quality depends on the PDF (scanned documents yield little or
/// nothing); any structural failure maps to `AppError::Pdf` and surfaces as a
/// 422 to the client.
pub fn extract_text(bytes: &[u8]) -> Result<String, AppError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| AppError::Pdf(e.to_string()))
}
