//! Chat request errors.

use memory::EngineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    /// Rejected before any provider or store call.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Embedding or language-model provider failure.
    #[error("provider request failed: {0}")]
    Provider(#[source] anyhow::Error),

    #[error("history store failed: {0}")]
    Store(#[source] EngineError),

    #[error("loading learning preferences failed: {0}")]
    Preferences(#[source] anyhow::Error),
}

impl From<EngineError> for ChatError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::Embedding(source) => ChatError::Provider(source),
            store @ EngineError::Store { .. } => ChatError::Store(store),
        }
    }
}
