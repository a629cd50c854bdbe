//! Document text extraction boundary.
//!
//! The engine only needs "bytes in, text out"; the PDF implementation lives
//! here because PDF is the one upload format currently accepted upstream.

use std::path::Path;

use crate::errors::EngineError;

/// Turns an uploaded document into plain text. Unreadable or corrupt input
/// is an `EngineError::Extraction`, propagated without retry.
pub trait TextExtractor: Send + Sync {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, EngineError>;
}

/// PDF text extraction backed by `pdf-extract`.
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    /// Convenience for callers that keep uploads on disk.
    pub fn extract_file(&self, path: &Path) -> Result<String, EngineError> {
        let bytes = std::fs::read(path)
            .map_err(|e| EngineError::Extraction(format!("cannot read {}: {e}", path.display())))?;
        self.extract_text(&bytes)
    }
}

impl TextExtractor for PdfTextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, EngineError> {
        pdf_extract::extract_text_from_mem(bytes)
            .map(|text| text.trim().to_string())
            .map_err(|e| EngineError::Extraction(format!("PDF read error: {e}")))
    }
}
