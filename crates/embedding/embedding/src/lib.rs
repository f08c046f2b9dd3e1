//! # Text Embeddings
//!
//! This crate defines the embedding service interface used to turn prompts and
//! replies into vectors for the history store.

use async_trait::async_trait;

mod config;
pub use config::{EmbeddingConfig, EnvEmbeddingConfig, DEFAULT_EMBEDDING_MODEL};

/// Service for generating text embeddings.
///
/// Every vector produced by one service instance has the same dimension.
#[async_trait]
pub trait EmbeddingService: Send + Sync {
    /// Generates an embedding vector for a single text string.
    async fn embed(&self, text: &str) -> Result<Vec<f32>, anyhow::Error>;
}
