//! Per-turn orchestration of the memory engine.
//!
//! Order of one chat turn: sweep → embed prompt → write user turn → retrieve
//! context → (caller runs the model) → embed reply → write assistant turn.
//! The user turn is written before retrieval, so recency listing and semantic
//! recall both drop it explicitly (by content and by id).

use std::sync::Arc;

use embedding::EmbeddingService;
use memory_core::{HistoryResult, Role, Turn, VectorStore};
use memory_strategies::{
    is_vague, last_exchange, truncate_for_log, HistoryMerger, RecentWindowStrategy,
    RetentionSweeper, SemanticRecallStrategy,
};
use prompt::ChatMessage;
use tracing::{debug, info, instrument, warn};

use crate::config::MemoryConfig;
use crate::error::EngineError;
use crate::message_store::MessageStore;

/// Smallest gap between a prompt and its reply; ids are millisecond timestamps.
const MIN_REPLY_GAP_SECS: f64 = 0.001;

/// Result of [`ContextEngine::prepare`].
#[derive(Debug, Clone)]
pub struct PreparedContext {
    /// The stored user turn for the prompt.
    pub user_turn: Turn,
    /// Whether the prompt was classified as vague.
    pub vague: bool,
    /// History to inject, oldest-relevant first.
    pub history: HistoryResult,
}

/// Memory engine for chat turns. Cheap to share behind an `Arc`.
pub struct ContextEngine {
    messages: MessageStore,
    embedder: Arc<dyn EmbeddingService>,
    recent_window: RecentWindowStrategy,
    semantic_recall: SemanticRecallStrategy,
    merger: HistoryMerger,
    sweeper: RetentionSweeper,
}

impl ContextEngine {
    /// Creates an engine with the default [`MemoryConfig`].
    pub fn new(store: Arc<dyn VectorStore>, embedder: Arc<dyn EmbeddingService>) -> Self {
        Self::with_config(store, embedder, &MemoryConfig::default())
    }

    pub fn with_config(
        store: Arc<dyn VectorStore>,
        embedder: Arc<dyn EmbeddingService>,
        config: &MemoryConfig,
    ) -> Self {
        Self {
            messages: MessageStore::new(store),
            embedder,
            recent_window: config.recent_window(),
            semantic_recall: config.semantic_recall(),
            merger: config.merger(),
            sweeper: config.sweeper(),
        }
    }

    pub fn store(&self) -> &Arc<dyn VectorStore> {
        self.messages.store()
    }

    /// Runs one retention sweep. Failures are logged, never returned.
    pub async fn sweep(&self, now: f64) {
        self.sweeper.sweep(self.store().as_ref(), now).await;
    }

    /// Records the prompt and selects the history to send with it.
    ///
    /// Vague prompts take the last adjacent (user, assistant) exchange from the
    /// recency window and skip semantic recall. Other prompts merge relevant
    /// recent turns with semantic recall.
    ///
    /// # Errors
    ///
    /// [`EngineError::Embedding`] when the prompt cannot be embedded (nothing is
    /// written), [`EngineError::Store`] when writing or reading fails.
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    pub async fn prepare(
        &self,
        user_id: &str,
        prompt: &str,
        now: f64,
    ) -> Result<PreparedContext, EngineError> {
        self.sweep(now).await;

        let embedding = self.embedder.embed(prompt).await.map_err(|e| {
            warn!(error = %e, "Prompt embedding failed");
            EngineError::Embedding(e)
        })?;
        info!(dimension = embedding.len(), "step: prompt embedded");

        let user_turn = Turn::new(user_id, Role::User, prompt, embedding, now);
        self.messages
            .write(&user_turn)
            .await
            .map_err(EngineError::store("write user turn"))?;
        info!(id = user_turn.id, "step: user turn stored");

        let store = self.store().as_ref();
        let window = self
            .recent_window
            .recent_window(store, user_id, now, prompt)
            .await
            .map_err(EngineError::store("recency listing"))?;

        let vague = is_vague(prompt);
        let history = if vague {
            HistoryResult::Paired(last_exchange(&window))
        } else {
            let recalled = self
                .semantic_recall
                .recall(store, user_id, &user_turn.embedding, Some(user_turn.id))
                .await
                .map_err(EngineError::store("semantic search"))?;
            self.merger.merge(&recalled, &window, &user_turn.embedding)
        };

        info!(
            vague,
            window = window.len(),
            history = history.turns().len(),
            "step: context selected"
        );
        for turn in history.turns() {
            debug!(
                role = turn.role.as_str(),
                content = %truncate_for_log(&turn.content, 80),
                "history entry"
            );
        }

        Ok(PreparedContext {
            user_turn,
            vague,
            history,
        })
    }

    /// Embeds and stores the model's reply to `prepared`.
    ///
    /// The reply's timestamp is at least one millisecond after the prompt's so
    /// the two records never share an id.
    #[instrument(skip(self, prepared, reply), fields(user_id = %prepared.user_turn.user_id))]
    pub async fn record_reply(
        &self,
        prepared: &PreparedContext,
        reply: &str,
        now: f64,
    ) -> Result<Turn, EngineError> {
        let embedding = self.embedder.embed(reply).await.map_err(|e| {
            warn!(error = %e, "Reply embedding failed");
            EngineError::Embedding(e)
        })?;

        let timestamp = now.max(prepared.user_turn.timestamp + MIN_REPLY_GAP_SECS);
        let turn = Turn::new(
            prepared.user_turn.user_id.clone(),
            Role::Assistant,
            reply,
            embedding,
            timestamp,
        );
        self.messages
            .write(&turn)
            .await
            .map_err(EngineError::store("write assistant turn"))?;
        info!(id = turn.id, "step: assistant turn stored");
        Ok(turn)
    }
}

/// Converts selected history into chat messages, preserving order.
pub fn history_to_messages(history: &HistoryResult) -> Vec<ChatMessage> {
    history
        .turns()
        .iter()
        .map(|turn| match turn.role {
            Role::User => ChatMessage::user(turn.content.clone()),
            Role::Assistant => ChatMessage::assistant(turn.content.clone()),
        })
        .collect()
}
