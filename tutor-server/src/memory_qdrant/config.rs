//! Qdrant connection settings.

use crate::config::{ServerConfig, DEFAULT_COLLECTION, DEFAULT_EMBEDDING_DIM};

#[derive(Debug, Clone)]
pub struct QdrantConfig {
    /// gRPC URL, e.g. `http://localhost:6334`.
    pub url: String,
    pub api_key: Option<String>,
    pub collection: String,
    /// Vector size used when the collection has to be created.
    pub embedding_dim: u64,
}

impl Default for QdrantConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:6334".to_string(),
            api_key: None,
            collection: DEFAULT_COLLECTION.to_string(),
            embedding_dim: DEFAULT_EMBEDDING_DIM,
        }
    }
}

impl QdrantConfig {
    pub fn from_server_config(config: &ServerConfig) -> Self {
        let defaults = Self::default();
        Self {
            url: config.qdrant_host.clone().unwrap_or(defaults.url),
            api_key: config.qdrant_api_key.clone(),
            collection: config.qdrant_collection.clone(),
            embedding_dim: config.embedding_dim,
        }
    }
}
