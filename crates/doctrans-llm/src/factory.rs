//! Factory for creating translators.

use std::sync::Arc;

use crate::config::TranslatorConfig;
use crate::error::TranslateResult;
use crate::openai::OpenAiTranslator;
use crate::Translator;

/// Environment variable holding the provider API key.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Environment variable overriding the completion model.
pub const MODEL_VAR: &str = "OPENAI_MODEL";

/// Factory for creating translation providers.
pub struct TranslatorFactory;

impl TranslatorFactory {
    /// Create a translator from the given configuration.
    pub fn create(config: TranslatorConfig) -> TranslateResult<Arc<dyn Translator>> {
        let translator = OpenAiTranslator::new(config)?;
        Ok(Arc::new(translator))
    }

    /// Resolve the provider credential from the environment, once.
    ///
    /// Returns `Ok(None)` when no key is configured; the caller decides
    /// whether a missing relay is fatal (for this service it is not - the
    /// extraction endpoint works without one).
    pub fn from_env() -> TranslateResult<Option<Arc<dyn Translator>>> {
        let api_key = match std::env::var(API_KEY_VAR) {
            Ok(key) if !key.is_empty() => key,
            _ => return Ok(None),
        };

        let mut config = TranslatorConfig::new(api_key);
        if let Ok(model) = std::env::var(MODEL_VAR) {
            if !model.is_empty() {
                config = config.with_model(model);
            }
        }

        Self::create(config).map(Some)
    }
}
