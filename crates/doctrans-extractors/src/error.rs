//! Extraction error types.

use thiserror::Error;

/// Errors that can occur during text extraction.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// File type is not handled by any registered extractor.
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),

    /// Extraction ran but produced no text after trimming.
    #[error("No text found in document")]
    NoTextFound,

    /// PDF-specific parse error.
    #[cfg(feature = "pdf")]
    #[error("PDF extraction error: {0}")]
    Pdf(String),

    /// DOCX-specific parse error.
    #[cfg(feature = "docx")]
    #[error("DOCX extraction error: {0}")]
    Docx(String),

    /// Task join error from spawn_blocking.
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

/// Result type for extraction operations.
pub type ExtractResult<T> = Result<T, ExtractError>;
