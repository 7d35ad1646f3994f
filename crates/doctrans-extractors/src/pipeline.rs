//! Extraction pipeline routing content to the matching strategy.

use std::sync::Arc;

use crate::error::{ExtractError, ExtractResult};
use crate::types::ExtractedContent;
use crate::Extractor;

/// Pipeline that dispatches on a normalized file-type token.
///
/// Routing is a registration lookup: adding a format means registering
/// another [`Extractor`], not rewriting the dispatcher. The pipeline also
/// enforces the shared post-condition: the concatenated text is trimmed,
/// and an all-whitespace result is an error, never an empty success.
pub struct ExtractionPipeline {
    extractors: Vec<Arc<dyn Extractor>>,
}

impl ExtractionPipeline {
    /// Create a new empty pipeline.
    pub fn new() -> Self {
        Self {
            extractors: Vec::new(),
        }
    }

    /// Create a pipeline with all available extractors registered.
    pub fn with_defaults() -> Self {
        Self {
            extractors: crate::ExtractorFactory::all(),
        }
    }

    /// Register an extractor.
    pub fn add_extractor(mut self, extractor: Arc<dyn Extractor>) -> Self {
        self.extractors.push(extractor);
        self
    }

    /// Extract trimmed text using the extractor matching `file_type`.
    ///
    /// `file_type` must already be lower-cased by the caller. Returns
    /// [`ExtractError::UnsupportedType`] echoing the token when nothing
    /// matches, and [`ExtractError::NoTextFound`] when the strategy
    /// succeeds but yields only whitespace.
    pub async fn extract(&self, content: &[u8], file_type: &str) -> ExtractResult<ExtractedContent> {
        for extractor in &self.extractors {
            if extractor.supports(file_type) {
                let mut extracted = extractor.extract(content).await?;
                extracted.text = extracted.text.trim().to_string();
                if extracted.text.is_empty() {
                    return Err(ExtractError::NoTextFound);
                }
                return Ok(extracted);
            }
        }

        Err(ExtractError::UnsupportedType(file_type.to_string()))
    }

    /// Check if the pipeline can handle a given file-type token.
    pub fn supports(&self, file_type: &str) -> bool {
        self.extractors.iter().any(|e| e.supports(file_type))
    }

    /// List all supported file-type tokens.
    pub fn supported_types(&self) -> Vec<&str> {
        self.extractors
            .iter()
            .flat_map(|e| e.supported_types().iter().copied())
            .collect()
    }

    /// Get the number of registered extractors.
    pub fn len(&self) -> usize {
        self.extractors.len()
    }

    /// Check if the pipeline has no registered extractors.
    pub fn is_empty(&self) -> bool {
        self.extractors.is_empty()
    }
}

impl Default for ExtractionPipeline {
    fn default() -> Self {
        Self::with_defaults()
    }
}
