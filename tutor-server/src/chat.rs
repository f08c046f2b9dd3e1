//! Chat service: one request of the AI tutor chat.
//!
//! Selects the system instruction for the persona, asks the memory engine for
//! history (unless history is disabled), calls the model and records the reply.
//! External interactions: VectorStore (via ContextEngine), EmbeddingService,
//! LlmClient, PreferenceSource.

use std::fmt;
use std::sync::Arc;

use llm_client::LlmClient;
use memory::{history_to_messages, ContextEngine};
use memory_core::now_secs;
use memory_strategies::truncate_for_log;
use prompt::{assemble, system_message_for, ChatMessage, Persona};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::error::ChatError;
use crate::preferences::PreferenceSource;

/// Client-supplied user id; the web client sends either a string or a number.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum UserId {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Text(s) => f.write_str(s),
            UserId::Number(n) => write!(f, "{}", n),
        }
    }
}

fn default_bot_type() -> String {
    "Tutor".to_string()
}

fn default_history_enabled() -> bool {
    true
}

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default = "default_bot_type")]
    pub bot_type: String,
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default = "default_history_enabled")]
    pub history_enabled: bool,
}

impl ChatRequest {
    pub fn new(prompt: impl Into<String>, user_id: Option<&str>) -> Self {
        Self {
            bot_type: default_bot_type(),
            prompt: prompt.into(),
            user_id: user_id.map(|u| UserId::Text(u.to_string())),
            history_enabled: true,
        }
    }
}

pub struct ChatService {
    engine: Arc<ContextEngine>,
    llm: Arc<dyn LlmClient>,
    preferences: Arc<dyn PreferenceSource>,
}

impl ChatService {
    pub fn new(
        engine: Arc<ContextEngine>,
        llm: Arc<dyn LlmClient>,
        preferences: Arc<dyn PreferenceSource>,
    ) -> Self {
        Self {
            engine,
            llm,
            preferences,
        }
    }

    pub fn engine(&self) -> &Arc<ContextEngine> {
        &self.engine
    }

    /// Handles one chat request and returns the model's reply.
    ///
    /// With history disabled only the system instruction and the prompt are
    /// sent; the history store is neither read nor written.
    #[instrument(skip(self, request), fields(bot_type = %request.bot_type, history_enabled = request.history_enabled))]
    pub async fn handle(&self, request: ChatRequest) -> Result<String, ChatError> {
        let prompt = request.prompt.as_str();
        if prompt.trim().is_empty() {
            return Err(ChatError::InvalidRequest("prompt must not be empty".to_string()));
        }
        let user_id = request.user_id.as_ref().map(UserId::to_string);
        if request.history_enabled && user_id.is_none() {
            return Err(ChatError::InvalidRequest(
                "userId is required when history is enabled".to_string(),
            ));
        }

        let persona = Persona::from_label(&request.bot_type);
        let system_message = self.system_message(&persona, user_id.as_deref()).await?;

        let Some(user_id) = user_id.filter(|_| request.history_enabled) else {
            info!("History is disabled, skipping context");
            let messages = assemble(&system_message, Vec::new(), prompt);
            return self.complete(messages).await;
        };

        let prepared = self.engine.prepare(&user_id, prompt, now_secs()).await?;
        let messages = assemble(
            &system_message,
            history_to_messages(&prepared.history),
            prompt,
        );
        let reply = self.complete(messages).await?;

        self.engine
            .record_reply(&prepared, &reply, now_secs())
            .await?;
        Ok(reply)
    }

    async fn system_message(
        &self,
        persona: &Persona,
        user_id: Option<&str>,
    ) -> Result<String, ChatError> {
        if !persona.needs_preferences() {
            return Ok(system_message_for(persona, None));
        }
        let preferences = match user_id {
            Some(user_id) => self
                .preferences
                .learning_preferences(user_id)
                .await
                .map_err(ChatError::Preferences)?,
            None => None,
        };
        Ok(system_message_for(persona, preferences.as_ref()))
    }

    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, ChatError> {
        info!(message_count = messages.len(), "step: final message stack");
        for m in &messages {
            debug!(
                role = m.role.as_str(),
                content = %truncate_for_log(&m.content, 80),
                "message"
            );
        }
        self.llm.complete(messages).await.map_err(|e| {
            warn!(error = %e, "Language model request failed");
            ChatError::Provider(e)
        })
    }
}
