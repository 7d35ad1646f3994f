//! doctrans-llm - Translation relay over LLM completion providers.
//!
//! This crate wraps a chat-completion provider behind a small [`Translator`]
//! trait so the HTTP layer can hold a `dyn Translator` and tests can
//! substitute a stub.
//!
//! # Example
//!
//! ```ignore
//! use doctrans_llm::{TranslatorConfig, TranslatorFactory};
//!
//! let translator = TranslatorFactory::create(TranslatorConfig::new(api_key))?;
//! let english = translator.translate("Hola", "English").await?;
//! ```

mod config;
mod error;
mod factory;
mod openai;

pub use config::TranslatorConfig;
pub use error::{TranslateError, TranslateResult};
pub use factory::TranslatorFactory;
pub use openai::OpenAiTranslator;

use async_trait::async_trait;

/// Translation provider boundary.
///
/// Implementations build the translation instruction around `target_lang`
/// and return the provider's first answer verbatim. The source language is
/// never part of the call; providers detect it themselves.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` into `target_lang`.
    async fn translate(&self, text: &str, target_lang: &str) -> TranslateResult<String>;

    /// Model identifier used for the completion call.
    fn model_name(&self) -> &str;
}
