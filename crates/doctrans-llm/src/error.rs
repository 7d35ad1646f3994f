//! Translation error types.

use thiserror::Error;

/// Errors that can occur in the translation relay.
#[derive(Error, Debug)]
pub enum TranslateError {
    /// Relay misconfiguration (bad key material, client construction).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Provider returned an error.
    #[error("OpenAI API error: {0}")]
    Api(String),

    /// Provider answered with no choices.
    #[error("No response choices returned")]
    EmptyResponse,
}

/// Result type for translation operations.
pub type TranslateResult<T> = Result<T, TranslateError>;
