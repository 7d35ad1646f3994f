//! Translation endpoint handler.

use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use doctrans_llm::Translator;

use crate::error::HandlerError;
use crate::event::{ApiResponse, HttpEvent};

/// Request body for translation.
#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    /// Text to translate.
    #[serde(default)]
    pub text: String,

    /// Declared source language; echoed back, never sent to the provider.
    #[serde(default = "default_source_lang")]
    pub source_lang: String,

    /// Target language for the translation instruction.
    #[serde(default = "default_target_lang")]
    pub target_lang: String,
}

fn default_source_lang() -> String {
    "auto".to_string()
}

fn default_target_lang() -> String {
    "English".to_string()
}

/// Handle a translation invocation.
///
/// POST body: `{"text", "source_lang" = "auto", "target_lang" = "English"}`.
/// Success body echoes the languages and adds character counts of the
/// original and translated strings.
pub async fn handle(event: &HttpEvent, translator: Option<&dyn Translator>) -> ApiResponse {
    if let Some(short_circuit) = event.method_guard() {
        return short_circuit;
    }

    match run(event, translator).await {
        Ok(body) => ApiResponse::json(200, &body),
        Err(err) => err.api_response(),
    }
}

async fn run(
    event: &HttpEvent,
    translator: Option<&dyn Translator>,
) -> Result<Value, HandlerError> {
    let request: TranslateRequest =
        serde_json::from_str(&event.body).map_err(|_| HandlerError::InvalidPayload)?;

    // Field validation runs before the credential check so a missing key
    // can never mask a missing-field 400.
    if request.text.is_empty() {
        return Err(HandlerError::MissingField("Text is required"));
    }

    let translator = translator.ok_or(HandlerError::MissingCredential)?;

    debug!(
        model = %translator.model_name(),
        target_lang = %request.target_lang,
        chars = request.text.chars().count(),
        "Relaying translation request"
    );

    let translated_text = translator
        .translate(&request.text, &request.target_lang)
        .await?;

    Ok(json!({
        "translated_text": translated_text,
        "source_lang": request.source_lang,
        "target_lang": request.target_lang,
        "original_length": request.text.chars().count(),
        "translated_length": translated_text.chars().count(),
    }))
}
