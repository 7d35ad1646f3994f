//! Plain text extraction.

use crate::error::ExtractResult;
use crate::types::{ExtractedContent, FileKind};
use crate::Extractor;
use async_trait::async_trait;

/// Plain text extractor.
///
/// Decodes bytes as UTF-8 leniently: invalid sequences are dropped rather
/// than rejected, so a slightly malformed text file still yields its
/// readable content.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextExtractor;

impl TextExtractor {
    /// Create a new plain text extractor.
    pub fn new() -> Self {
        Self
    }

    fn decode_lossy_dropping(content: &[u8]) -> String {
        String::from_utf8_lossy(content)
            .chars()
            .filter(|c| *c != char::REPLACEMENT_CHARACTER)
            .collect()
    }
}

#[async_trait]
impl Extractor for TextExtractor {
    async fn extract(&self, content: &[u8]) -> ExtractResult<ExtractedContent> {
        let text = Self::decode_lossy_dropping(content);
        Ok(ExtractedContent::new(text, FileKind::Text))
    }

    fn supported_types(&self) -> &[&str] {
        &["txt", "text/plain"]
    }

    fn name(&self) -> &str {
        "plain-text"
    }
}
