//! Errors of the memory engine.

use thiserror::Error;

/// Failure of one chat turn's memory step. Sweep failures never surface here.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("embedding failed: {0}")]
    Embedding(#[source] anyhow::Error),

    #[error("vector store {step} failed: {source}")]
    Store {
        step: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl EngineError {
    pub(crate) fn store(step: &'static str) -> impl FnOnce(anyhow::Error) -> Self {
        move |source| EngineError::Store { step, source }
    }
}
