//! Server configuration loaded from environment variables.

use anyhow::{Context, Result};
use embedding::{EnvEmbeddingConfig, DEFAULT_EMBEDDING_MODEL};
use llm_client::{EnvLlmConfig, DEFAULT_BASE_URL, DEFAULT_CHAT_MODEL};
use memory::MemoryConfig;
use memory_strategies::RecencyScope;
use std::env;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_LOG_FILE: &str = "logs/tutor-server.log";
pub const DEFAULT_COLLECTION: &str = "chat_history";
pub const DEFAULT_EMBEDDING_DIM: u64 = 1536;

/// Tutor server configuration. Load `.env` before calling [`ServerConfig::load`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub log_file: String,
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub chat_model: String,
    pub embedding_model: String,
    /// `memory` (default) or `qdrant`.
    pub vector_store_type: String,
    pub qdrant_host: Option<String>,
    pub qdrant_api_key: Option<String>,
    pub qdrant_collection: String,
    pub embedding_dim: u64,
    pub recency_scope: RecencyScope,
    /// JSON file mapping user ids to learning preferences.
    pub preferences_file: Option<String>,
}

fn var_or(key: &str, default: &str) -> String {
    non_empty_var(key).unwrap_or_else(|| default.to_string())
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.trim().is_empty())
}

/// Parses RECENCY_SCOPE: `user` / `per_user` or `global`.
pub fn parse_recency_scope(value: &str) -> Result<RecencyScope> {
    match value.trim().to_ascii_lowercase().as_str() {
        "user" | "per_user" | "per-user" => Ok(RecencyScope::PerUser),
        "global" => Ok(RecencyScope::Global),
        other => anyhow::bail!("RECENCY_SCOPE must be `user` or `global`, got `{}`", other),
    }
}

impl ServerConfig {
    /// Loads configuration from the environment. OPENAI_API_KEY is required.
    pub fn load() -> Result<Self> {
        let openai_api_key =
            non_empty_var("OPENAI_API_KEY").context("OPENAI_API_KEY not set")?;
        let embedding_dim = match non_empty_var("EMBEDDING_DIM") {
            Some(v) => v
                .trim()
                .parse()
                .with_context(|| format!("EMBEDDING_DIM is not a number: {}", v))?,
            None => DEFAULT_EMBEDDING_DIM,
        };
        let recency_scope = match non_empty_var("RECENCY_SCOPE") {
            Some(v) => parse_recency_scope(&v)?,
            None => RecencyScope::default(),
        };

        Ok(Self {
            bind_addr: var_or("BIND_ADDR", DEFAULT_BIND_ADDR),
            log_file: var_or("LOG_FILE", DEFAULT_LOG_FILE),
            openai_api_key,
            openai_base_url: var_or("OPENAI_BASE_URL", DEFAULT_BASE_URL),
            chat_model: var_or("CHAT_MODEL", DEFAULT_CHAT_MODEL),
            embedding_model: var_or("EMBEDDING_MODEL", DEFAULT_EMBEDDING_MODEL),
            vector_store_type: var_or("VECTOR_STORE_TYPE", "memory").to_ascii_lowercase(),
            qdrant_host: non_empty_var("QDRANT_HOST"),
            qdrant_api_key: non_empty_var("QDRANT_API_KEY"),
            qdrant_collection: var_or("QDRANT_COLLECTION", DEFAULT_COLLECTION),
            embedding_dim,
            recency_scope,
            preferences_file: non_empty_var("PREFERENCES_FILE"),
        })
    }

    pub fn memory_config(&self) -> MemoryConfig {
        MemoryConfig::default().with_recency_scope(self.recency_scope)
    }

    pub fn llm_config(&self) -> EnvLlmConfig {
        EnvLlmConfig {
            openai_api_key: self.openai_api_key.clone(),
            openai_base_url: self.openai_base_url.clone(),
            chat_model: self.chat_model.clone(),
        }
    }

    pub fn embedding_config(&self) -> EnvEmbeddingConfig {
        EnvEmbeddingConfig {
            api_key: self.openai_api_key.clone(),
            base_url: Some(self.openai_base_url.clone()),
            model: self.embedding_model.clone(),
        }
    }
}
