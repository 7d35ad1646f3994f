//! Extraction endpoint handler.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use doctrans_extractors::ExtractionPipeline;

use crate::error::HandlerError;
use crate::event::{ApiResponse, HttpEvent};

/// Request body for text extraction.
#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    /// Base64-encoded file content.
    #[serde(default)]
    pub file_content: String,

    /// Declared file type, short token or MIME form, case-insensitive.
    #[serde(default)]
    pub file_type: String,
}

/// Handle an extraction invocation.
///
/// POST body: `{"file_content": "<base64>", "file_type": "<token>"}`.
/// Success body: `{"extracted_text", "text_length", "file_type"}`.
pub async fn handle(event: &HttpEvent, pipeline: &ExtractionPipeline) -> ApiResponse {
    if let Some(short_circuit) = event.method_guard() {
        return short_circuit;
    }

    match run(event, pipeline).await {
        Ok(body) => ApiResponse::json(200, &body),
        Err(err) => err.api_response(),
    }
}

async fn run(event: &HttpEvent, pipeline: &ExtractionPipeline) -> Result<Value, HandlerError> {
    let request: ExtractRequest =
        serde_json::from_str(&event.body).map_err(|_| HandlerError::InvalidPayload)?;

    if request.file_content.is_empty() {
        return Err(HandlerError::MissingField("File content is required"));
    }

    let file_type = request.file_type.to_lowercase();

    // Decode failures intentionally take the generic 500 path, not a
    // precise 400 (legacy behavior, kept).
    let file_bytes = BASE64
        .decode(request.file_content.as_bytes())
        .map_err(|e| HandlerError::Unhandled(e.to_string()))?;

    debug!(file_type = %file_type, bytes = file_bytes.len(), "Dispatching extraction");

    let extracted = pipeline.extract(&file_bytes, &file_type).await?;

    Ok(json!({
        "extracted_text": extracted.text,
        "text_length": extracted.char_len(),
        "file_type": file_type,
    }))
}
