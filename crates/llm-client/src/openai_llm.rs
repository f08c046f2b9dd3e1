//! LlmClient on async-openai chat completions.

use std::sync::Arc;

use anyhow::Result;
use async_openai::{config::OpenAIConfig, types::CreateChatCompletionRequestArgs, Client};
use async_trait::async_trait;
use prompt::ChatMessage;
use tracing::{debug, info, instrument};

use super::config::{LlmConfig, DEFAULT_CHAT_MODEL};
use super::{chat_message_to_openai, LlmClient};

/// Masks an API key for logging: first 7 chars + "***" + last 4 chars.
/// Keys of length <= 11 are fully masked.
pub fn mask_token(token: &str) -> String {
    let len = token.len();
    if len <= 11 || !token.is_char_boundary(7) || !token.is_char_boundary(len - 4) {
        return "***".to_string();
    }
    format!("{}***{}", &token[..7], &token[len - 4..])
}

/// OpenAI chat client. Holds the API key only for masked logging.
#[derive(Clone)]
pub struct OpenAILlmClient {
    client: Arc<Client<OpenAIConfig>>,
    model: String,
    api_key_for_logging: String,
}

impl OpenAILlmClient {
    pub fn new(api_key: String) -> Self {
        let config = OpenAIConfig::new().with_api_key(api_key.clone());
        Self::with_openai_config(config, api_key)
    }

    /// Builds a client for a custom base URL (proxies or compatible endpoints).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key.clone())
            .with_api_base(base_url);
        Self::with_openai_config(config, api_key)
    }

    pub fn from_config(config: &dyn LlmConfig) -> Self {
        Self::with_base_url(config.api_key().to_string(), config.base_url().to_string())
            .with_model(config.model().to_string())
    }

    fn with_openai_config(config: OpenAIConfig, api_key: String) -> Self {
        Self {
            client: Arc::new(Client::with_config(config)),
            model: DEFAULT_CHAT_MODEL.to_string(),
            api_key_for_logging: api_key,
        }
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl LlmClient for OpenAILlmClient {
    /// Sends one chat completion request and returns the first choice's content.
    ///
    /// Logs the masked API key and token usage. Errors if the request fails or
    /// the response has no choices.
    #[instrument(skip(self, messages), fields(model = %self.model, message_count = messages.len()))]
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String> {
        info!(
            model = %self.model,
            message_count = messages.len(),
            api_key = %mask_token(&self.api_key_for_logging),
            "step: OpenAI chat_completion request"
        );

        let openai_messages = messages
            .iter()
            .map(chat_message_to_openai)
            .collect::<Result<Vec<_>>>()?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(self.model.clone())
            .messages(openai_messages)
            .build()?;

        if let Ok(json) = serde_json::to_string(&request) {
            debug!(request_json = %json, "OpenAI chat_completion request JSON");
        }

        let response = self.client.chat().create(request).await?;

        if let Some(ref u) = response.usage {
            info!(
                prompt_tokens = u.prompt_tokens,
                completion_tokens = u.completion_tokens,
                total_tokens = u.total_tokens,
                "OpenAI chat_completion usage"
            );
        }

        match response.choices.into_iter().next() {
            Some(choice) => Ok(choice.message.content.unwrap_or_default()),
            None => anyhow::bail!("No response from OpenAI"),
        }
    }
}
