//! DOCX text extraction using docx-rs.

use crate::error::{ExtractError, ExtractResult};
use crate::types::{ExtractedContent, FileKind};
use crate::Extractor;
use async_trait::async_trait;
use docx_rs::{DocumentChild, ParagraphChild, RunChild};

/// DOCX text extractor using the docx-rs library.
///
/// Walks paragraphs in document order and appends a newline after every
/// paragraph, empty paragraphs included, so blank lines in the source
/// document survive as blank lines in the output. Wraps the synchronous
/// docx-rs parse in `spawn_blocking`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxExtractor;

impl DocxExtractor {
    /// Create a new DOCX extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract text synchronously (called within spawn_blocking).
    fn extract_sync(content: Vec<u8>) -> Result<String, ExtractError> {
        let docx = docx_rs::read_docx(&content)
            .map_err(|e| ExtractError::Docx(format!("Failed to parse DOCX: {}", e)))?;

        let mut text = String::new();
        for child in docx.document.children {
            if let DocumentChild::Paragraph(p) = child {
                text.push_str(&Self::paragraph_text(&p));
                text.push('\n');
            }
        }

        Ok(text)
    }

    /// Extract the visible text of a paragraph, including hyperlink runs.
    fn paragraph_text(p: &docx_rs::Paragraph) -> String {
        let mut text = String::new();

        for child in &p.children {
            match child {
                ParagraphChild::Run(r) => Self::push_run_text(r, &mut text),
                ParagraphChild::Hyperlink(h) => {
                    for link_child in &h.children {
                        if let ParagraphChild::Run(r) = link_child {
                            Self::push_run_text(r, &mut text);
                        }
                    }
                }
                _ => {}
            }
        }

        text
    }

    fn push_run_text(r: &docx_rs::Run, text: &mut String) {
        for run_child in &r.children {
            match run_child {
                RunChild::Text(t) => text.push_str(&t.text),
                RunChild::Tab(_) => text.push('\t'),
                RunChild::Break(_) => text.push('\n'),
                _ => {}
            }
        }
    }
}

#[async_trait]
impl Extractor for DocxExtractor {
    async fn extract(&self, content: &[u8]) -> ExtractResult<ExtractedContent> {
        let content = content.to_vec();
        let text = tokio::task::spawn_blocking(move || Self::extract_sync(content)).await??;

        Ok(ExtractedContent::new(text, FileKind::Docx))
    }

    fn supported_types(&self) -> &[&str] {
        &[
            "docx",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        ]
    }

    fn name(&self) -> &str {
        "docx-rs"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Docx, Paragraph, Run};
    use std::io::Cursor;

    /// Build a DOCX with one paragraph per input string, in memory.
    fn make_docx(paragraphs: &[&str]) -> Vec<u8> {
        let mut docx = Docx::new();
        for p in paragraphs {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*p)));
        }
        let mut cursor = Cursor::new(Vec::new());
        docx.build().pack(&mut cursor).expect("pack docx");
        cursor.into_inner()
    }

    #[tokio::test]
    async fn test_paragraphs_joined_by_newlines() {
        let extractor = DocxExtractor::new();
        let bytes = make_docx(&["First paragraph", "Second paragraph"]);
        let content = extractor.extract(&bytes).await.unwrap();
        assert_eq!(content.kind, FileKind::Docx);
        assert_eq!(content.text, "First paragraph\nSecond paragraph\n");
    }

    #[tokio::test]
    async fn test_empty_paragraph_becomes_blank_line() {
        let extractor = DocxExtractor::new();
        let bytes = make_docx(&["above", "", "below"]);
        let content = extractor.extract(&bytes).await.unwrap();
        assert_eq!(content.text, "above\n\nbelow\n");
    }

    #[tokio::test]
    async fn test_malformed_docx_is_a_parse_error() {
        let extractor = DocxExtractor::new();
        let result = extractor.extract(b"definitely not a zip archive").await;
        assert!(matches!(result, Err(ExtractError::Docx(_))));
    }

    #[test]
    fn test_supported_tokens() {
        let extractor = DocxExtractor::new();
        assert!(extractor.supports("docx"));
        assert!(extractor
            .supports("application/vnd.openxmlformats-officedocument.wordprocessingml.document"));
        assert!(!extractor.supports("txt"));
    }
}
