//! Translator configuration.

use std::time::Duration;

use secrecy::SecretString;

/// Default completion model.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default sampling temperature; low for deterministic-leaning output.
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

/// Default per-request timeout for the provider call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Configuration for a translation provider.
///
/// The API key is resolved once at startup and injected here; the relay
/// never reads the environment per call.
#[derive(Debug, Clone)]
pub struct TranslatorConfig {
    /// Provider API key.
    pub api_key: SecretString,

    /// Completion model to call.
    pub model: String,

    /// Sampling temperature.
    pub temperature: f32,

    /// Request timeout on the underlying HTTP client.
    pub timeout: Duration,
}

impl TranslatorConfig {
    /// Create a configuration with default model, temperature, and timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the completion model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
