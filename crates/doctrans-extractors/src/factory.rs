//! Factory for creating extractors.

use std::sync::Arc;

use crate::error::{ExtractError, ExtractResult};
use crate::{Extractor, TextExtractor};

#[cfg(feature = "pdf")]
use crate::PdfExtractor;

#[cfg(feature = "docx")]
use crate::DocxExtractor;

/// Factory for creating extraction strategies.
pub struct ExtractorFactory;

impl ExtractorFactory {
    /// Create a plain text extractor.
    pub fn text() -> Arc<dyn Extractor> {
        Arc::new(TextExtractor::new())
    }

    /// Create a PDF extractor.
    #[cfg(feature = "pdf")]
    pub fn pdf() -> Arc<dyn Extractor> {
        Arc::new(PdfExtractor::new())
    }

    /// Create a DOCX extractor.
    #[cfg(feature = "docx")]
    pub fn docx() -> Arc<dyn Extractor> {
        Arc::new(DocxExtractor::new())
    }

    /// Create an extractor for a given file-type token.
    pub fn for_file_type(file_type: &str) -> ExtractResult<Arc<dyn Extractor>> {
        match file_type {
            "txt" | "text/plain" => Ok(Self::text()),

            #[cfg(feature = "pdf")]
            "pdf" | "application/pdf" => Ok(Self::pdf()),

            #[cfg(feature = "docx")]
            "docx" | "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                Ok(Self::docx())
            }

            _ => Err(ExtractError::UnsupportedType(file_type.to_string())),
        }
    }

    /// Get all available extractors.
    pub fn all() -> Vec<Arc<dyn Extractor>> {
        let mut extractors: Vec<Arc<dyn Extractor>> = vec![Self::text()];

        #[cfg(feature = "pdf")]
        extractors.push(Self::pdf());

        #[cfg(feature = "docx")]
        extractors.push(Self::docx());

        extractors
    }
}
