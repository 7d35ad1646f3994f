//! Core types for text extraction.

use serde::{Deserialize, Serialize};

/// Recognized document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// Plain text content.
    Text,
    /// PDF document.
    Pdf,
    /// Microsoft Word document.
    Docx,
}

impl FileKind {
    /// Short token for this format.
    pub fn token(&self) -> &'static str {
        match self {
            FileKind::Text => "txt",
            FileKind::Pdf => "pdf",
            FileKind::Docx => "docx",
        }
    }
}

/// Extracted content produced by a single extraction strategy.
///
/// `text` is the raw concatenated unit text, before the pipeline's trim and
/// empty-output check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedContent {
    /// Concatenated unit text (pages, paragraphs, or whole content).
    pub text: String,

    /// Format the text was extracted from.
    pub kind: FileKind,
}

impl ExtractedContent {
    /// Create new extracted content.
    pub fn new(text: String, kind: FileKind) -> Self {
        Self { text, kind }
    }

    /// Check whether the extraction produced meaningful content.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Character count of the text (not byte length).
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_empty_on_whitespace() {
        let content = ExtractedContent::new("  \n\t ".to_string(), FileKind::Text);
        assert!(content.is_empty());
    }

    #[test]
    fn test_char_len_counts_chars_not_bytes() {
        let content = ExtractedContent::new("héllo".to_string(), FileKind::Text);
        assert_eq!(content.char_len(), 5);
        assert!(content.text.len() > 5);
    }
}
