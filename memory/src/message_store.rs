//! Message store adapter: persists turns in the vector store.
//!
//! The payload schema itself lives in `memory_core::codec`; this adapter is the
//! single write path so every turn is stored the same way.

use std::sync::Arc;

use memory_core::{encode_turn, Turn, VectorStore};
use memory_strategies::truncate_for_log;
use tracing::debug;

#[derive(Clone)]
pub struct MessageStore {
    store: Arc<dyn VectorStore>,
}

impl MessageStore {
    pub fn new(store: Arc<dyn VectorStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn VectorStore> {
        &self.store
    }

    /// Writes `turn` with its embedding. A turn with the same id is replaced.
    pub async fn write(&self, turn: &Turn) -> Result<(), anyhow::Error> {
        debug!(
            id = turn.id,
            user_id = %turn.user_id,
            role = turn.role.as_str(),
            content = %truncate_for_log(&turn.content, 80),
            "Writing turn"
        );
        self.store.upsert(encode_turn(turn)).await
    }
}
