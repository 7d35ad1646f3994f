//! Handler error taxonomy and status mapping.

use axum::http::StatusCode;
use thiserror::Error;

use doctrans_extractors::ExtractError;
use doctrans_llm::TranslateError;

use crate::event::ApiResponse;

/// Closed failure taxonomy for both endpoints.
///
/// Validation failures map to precise 400s; `Unhandled` is the catch-all
/// 500 that surfaces the underlying message verbatim. Malformed base64 and
/// parser-internal failures deliberately route to `Unhandled` rather than a
/// 400 - legacy behavior kept as-is.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// Request body is not valid JSON.
    #[error("Invalid JSON")]
    InvalidPayload,

    /// A required field is absent or empty.
    #[error("{0}")]
    MissingField(&'static str),

    /// Declared file type is outside the recognized set.
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    /// Extraction succeeded but produced only whitespace.
    #[error("No text found in document")]
    NoTextFound,

    /// Translation requested without a configured provider credential.
    #[error("OpenAI API key not configured")]
    MissingCredential,

    /// Anything else: base64 decode, parser internals, provider errors.
    #[error("{0}")]
    Unhandled(String),
}

impl HandlerError {
    /// HTTP status for this failure.
    pub fn status(&self) -> StatusCode {
        match self {
            HandlerError::InvalidPayload
            | HandlerError::MissingField(_)
            | HandlerError::UnsupportedFileType(_)
            | HandlerError::NoTextFound => StatusCode::BAD_REQUEST,
            HandlerError::MissingCredential | HandlerError::Unhandled(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Encode as a response envelope.
    pub fn api_response(&self) -> ApiResponse {
        ApiResponse::error(self.status().as_u16(), self.to_string())
    }
}

impl From<ExtractError> for HandlerError {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::UnsupportedType(file_type) => HandlerError::UnsupportedFileType(file_type),
            ExtractError::NoTextFound => HandlerError::NoTextFound,
            other => HandlerError::Unhandled(other.to_string()),
        }
    }
}

impl From<TranslateError> for HandlerError {
    fn from(err: TranslateError) -> Self {
        HandlerError::Unhandled(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_400() {
        assert_eq!(HandlerError::InvalidPayload.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            HandlerError::MissingField("Text is required").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            HandlerError::UnsupportedFileType("csv".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(HandlerError::NoTextFound.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_credential_and_catch_all_are_500() {
        assert_eq!(
            HandlerError::MissingCredential.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            HandlerError::Unhandled("boom".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_unsupported_type_echoes_value() {
        let err: HandlerError = ExtractError::UnsupportedType("csv".into()).into();
        assert_eq!(err.to_string(), "Unsupported file type: csv");
    }

    #[test]
    fn test_response_body_has_single_error_key() {
        let resp = HandlerError::MissingCredential.api_response();
        assert_eq!(resp.status_code, 500);
        let value: serde_json::Value = serde_json::from_str(&resp.body).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object["error"], "OpenAI API key not configured");
    }
}
