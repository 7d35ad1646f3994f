//! doctrans-extractors - Text extraction strategies for the doctrans service.
//!
//! Provides extractors for plain text, PDF, and DOCX content behind a
//! unified trait, routed by a declared file-type token.
//!
//! # Features
//!
//! - `pdf` (default) - PDF text extraction via lopdf
//! - `docx` (default) - DOCX text extraction via docx-rs
//!
//! # Example
//!
//! ```ignore
//! use doctrans_extractors::ExtractionPipeline;
//!
//! let pipeline = ExtractionPipeline::with_defaults();
//! let content = pipeline.extract(&bytes, "application/pdf").await?;
//! println!("{}", content.text);
//! ```

mod error;
mod factory;
mod pipeline;
mod text;
mod types;

#[cfg(feature = "pdf")]
mod pdf;

#[cfg(feature = "docx")]
mod docx;

pub use error::{ExtractError, ExtractResult};
pub use factory::ExtractorFactory;
pub use pipeline::ExtractionPipeline;
pub use text::TextExtractor;
pub use types::{ExtractedContent, FileKind};

#[cfg(feature = "pdf")]
pub use pdf::PdfExtractor;

#[cfg(feature = "docx")]
pub use docx::DocxExtractor;

use async_trait::async_trait;

/// Core Extractor trait - all extraction strategies implement this.
///
/// Each extractor turns raw file bytes into the concatenated unit text for
/// its format (whole content for plain text, one unit per page for PDF, one
/// unit per paragraph for DOCX). Trimming and empty-output rejection happen
/// in the [`ExtractionPipeline`], not here.
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Extract text content from bytes.
    async fn extract(&self, content: &[u8]) -> ExtractResult<ExtractedContent>;

    /// File-type tokens this extractor handles, short forms and MIME forms.
    fn supported_types(&self) -> &[&str];

    /// Check if this extractor handles the given (normalized) token.
    fn supports(&self, file_type: &str) -> bool {
        self.supported_types().contains(&file_type)
    }

    /// Human-readable name for this extractor.
    fn name(&self) -> &str;
}
