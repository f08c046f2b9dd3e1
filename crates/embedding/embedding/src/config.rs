//! Embedding configuration: trait and env-based implementation.

use anyhow::Result;
use std::env;

/// Model used when EMBEDDING_MODEL is not set.
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-ada-002";

/// Embedding service configuration interface.
pub trait EmbeddingConfig: Send + Sync {
    /// API key for the OpenAI-compatible embedding endpoint (OPENAI_API_KEY).
    fn api_key(&self) -> &str;
    /// Optional base URL for an OpenAI-compatible endpoint (OPENAI_BASE_URL).
    fn base_url(&self) -> Option<&str>;
    fn model(&self) -> &str;
}

/// Embedding config loaded from environment variables.
#[derive(Debug, Clone)]
pub struct EnvEmbeddingConfig {
    pub api_key: String,
    pub base_url: Option<String>,
    pub model: String,
}

impl EmbeddingConfig for EnvEmbeddingConfig {
    fn api_key(&self) -> &str {
        &self.api_key
    }
    fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref().filter(|s| !s.is_empty())
    }
    fn model(&self) -> &str {
        &self.model
    }
}

impl EnvEmbeddingConfig {
    /// Load from environment variables.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("OPENAI_API_KEY").unwrap_or_default();
        let base_url = env::var("OPENAI_BASE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty());
        let model = env::var("EMBEDDING_MODEL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_EMBEDDING_MODEL.to_string());
        Ok(Self {
            api_key,
            base_url,
            model,
        })
    }

    /// Validate config: an API key is required.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            anyhow::bail!("OPENAI_API_KEY must be set for embeddings");
        }
        Ok(())
    }
}
