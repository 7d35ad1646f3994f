//! PDF text extraction using lopdf.

use crate::error::{ExtractError, ExtractResult};
use crate::types::{ExtractedContent, FileKind};
use crate::Extractor;
use async_trait::async_trait;
use lopdf::Document;

/// PDF text extractor using the lopdf library.
///
/// Walks pages in document order and appends a newline after every page's
/// text, preserving page boundaries for downstream consumers. Parsing is
/// synchronous CPU work, so it runs under `spawn_blocking`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractor;

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract text synchronously (called within spawn_blocking).
    fn extract_sync(content: Vec<u8>) -> Result<String, ExtractError> {
        let doc = Document::load_mem(&content)
            .map_err(|e| ExtractError::Pdf(format!("Failed to parse PDF: {}", e)))?;

        let mut text = String::new();
        // get_pages is keyed by 1-based page number, iterated in order.
        for page_number in doc.get_pages().keys() {
            let page_text = doc
                .extract_text(&[*page_number])
                .map_err(|e| ExtractError::Pdf(format!("Failed to extract page {}: {}", page_number, e)))?;
            text.push_str(&page_text);
            text.push('\n');
        }

        Ok(text)
    }
}

#[async_trait]
impl Extractor for PdfExtractor {
    async fn extract(&self, content: &[u8]) -> ExtractResult<ExtractedContent> {
        let content = content.to_vec();
        let text = tokio::task::spawn_blocking(move || Self::extract_sync(content)).await??;

        Ok(ExtractedContent::new(text, FileKind::Pdf))
    }

    fn supported_types(&self) -> &[&str] {
        &["pdf", "application/pdf"]
    }

    fn name(&self) -> &str {
        "lopdf"
    }
}
