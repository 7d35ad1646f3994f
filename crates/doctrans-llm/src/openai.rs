//! OpenAI translation provider.

use async_trait::async_trait;
use secrecy::ExposeSecret;
use tracing::debug;

use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
        ChatCompletionRequestSystemMessageContent, ChatCompletionRequestUserMessage,
        ChatCompletionRequestUserMessageContent, CreateChatCompletionRequest,
    },
    Client,
};

use crate::config::TranslatorConfig;
use crate::error::{TranslateError, TranslateResult};
use crate::Translator;

/// Translation relay backed by the OpenAI chat-completion API.
pub struct OpenAiTranslator {
    client: Client<OpenAIConfig>,
    config: TranslatorConfig,
}

impl OpenAiTranslator {
    /// Create a new OpenAI translator.
    ///
    /// The HTTP client is built once here with the configured request
    /// timeout; no retry policy is attached.
    pub fn new(config: TranslatorConfig) -> TranslateResult<Self> {
        let openai_config = OpenAIConfig::new().with_api_key(config.api_key.expose_secret().as_str());

        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TranslateError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        // Zero elapsed-time budget: a transient provider failure propagates
        // immediately instead of being retried.
        let backoff = backoff::ExponentialBackoffBuilder::new()
            .with_max_elapsed_time(Some(std::time::Duration::ZERO))
            .build();

        let client = Client::build(http_client, openai_config, backoff);

        Ok(Self { client, config })
    }

    fn build_messages(&self, text: &str, target_lang: &str) -> Vec<ChatCompletionRequestMessage> {
        let system = format!(
            "You are a professional translator. Translate text to {} accurately while preserving the original meaning and tone.",
            target_lang
        );
        let prompt = format!(
            "Translate the following text to {}. Only return the translation, nothing else:\n\n{}",
            target_lang, text
        );

        vec![
            ChatCompletionRequestMessage::System(ChatCompletionRequestSystemMessage {
                content: ChatCompletionRequestSystemMessageContent::Text(system),
                name: None,
            }),
            ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage {
                content: ChatCompletionRequestUserMessageContent::Text(prompt),
                name: None,
            }),
        ]
    }
}

#[async_trait]
impl Translator for OpenAiTranslator {
    async fn translate(&self, text: &str, target_lang: &str) -> TranslateResult<String> {
        let mut request = CreateChatCompletionRequest {
            model: self.config.model.clone(),
            messages: self.build_messages(text, target_lang),
            ..Default::default()
        };
        request.temperature = Some(self.config.temperature);

        debug!(model = %self.config.model, target_lang, "Sending translation request");

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| TranslateError::Api(e.to_string()))?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or(TranslateError::EmptyResponse)?;

        choice.message.content.ok_or(TranslateError::EmptyResponse)
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_carries_target_language_and_text() {
        let translator = OpenAiTranslator::new(TranslatorConfig::new("sk-test")).unwrap();
        let messages = translator.build_messages("Hola mundo", "German");

        match &messages[0] {
            ChatCompletionRequestMessage::System(m) => match &m.content {
                ChatCompletionRequestSystemMessageContent::Text(t) => {
                    assert!(t.contains("Translate text to German"));
                }
                other => panic!("unexpected system content: {:?}", other),
            },
            other => panic!("expected system message, got {:?}", other),
        }

        match &messages[1] {
            ChatCompletionRequestMessage::User(m) => match &m.content {
                ChatCompletionRequestUserMessageContent::Text(t) => {
                    assert!(t.contains("to German"));
                    assert!(t.ends_with("Hola mundo"));
                }
                other => panic!("unexpected user content: {:?}", other),
            },
            other => panic!("expected user message, got {:?}", other),
        }
    }

    #[test]
    fn test_model_name_reflects_config() {
        let translator =
            OpenAiTranslator::new(TranslatorConfig::new("sk-test").with_model("gpt-4o")).unwrap();
        assert_eq!(translator.model_name(), "gpt-4o");
    }
}
