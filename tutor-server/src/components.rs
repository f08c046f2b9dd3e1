//! Component factory: builds the vector store and the application state from config.

use std::sync::Arc;

use anyhow::Result;
use embedding::EmbeddingService;
use llm_client::{LlmClient, OpenAILlmClient};
use memory::ContextEngine;
use memory_core::VectorStore;
use memory_inmemory::InMemoryVectorStore;
use openai_embedding::OpenAIEmbedding;
use tracing::{info, instrument};

use crate::chat::ChatService;
use crate::config::ServerConfig;
use crate::http::AppState;
use crate::preferences::{PreferenceSource, StaticPreferences};

/// Creates the vector store named by `VECTOR_STORE_TYPE`.
#[instrument(skip(config), fields(store_type = %config.vector_store_type))]
pub async fn create_vector_store(config: &ServerConfig) -> Result<Arc<dyn VectorStore>> {
    match config.vector_store_type.as_str() {
        "memory" => {
            info!("Using in-memory vector store");
            Ok(Arc::new(InMemoryVectorStore::new()))
        }
        "qdrant" => create_qdrant_store(config).await,
        other => anyhow::bail!("Unknown VECTOR_STORE_TYPE `{}` (expected memory or qdrant)", other),
    }
}

#[cfg(feature = "qdrant")]
async fn create_qdrant_store(config: &ServerConfig) -> Result<Arc<dyn VectorStore>> {
    use crate::memory_qdrant::{QdrantConfig, QdrantVectorStore};

    let qdrant_config = QdrantConfig::from_server_config(config);
    info!(url = %qdrant_config.url, collection = %qdrant_config.collection, "Using Qdrant vector store");
    let store = QdrantVectorStore::connect(&qdrant_config)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to initialize Qdrant store: {}", e))?;
    Ok(Arc::new(store))
}

#[cfg(not(feature = "qdrant"))]
async fn create_qdrant_store(_config: &ServerConfig) -> Result<Arc<dyn VectorStore>> {
    anyhow::bail!("VECTOR_STORE_TYPE=qdrant requires building with the `qdrant` feature")
}

/// Loads preferences from PREFERENCES_FILE, or starts with none.
pub fn load_preferences(config: &ServerConfig) -> Result<Arc<dyn PreferenceSource>> {
    let prefs = match &config.preferences_file {
        Some(path) => StaticPreferences::from_json_file(path)?,
        None => StaticPreferences::new(),
    };
    Ok(Arc::new(prefs))
}

/// Wires store, embedder, model client and preferences into [`AppState`].
pub fn build_app_state(
    config: &ServerConfig,
    store: Arc<dyn VectorStore>,
    embedder: Arc<dyn EmbeddingService>,
    llm: Arc<dyn LlmClient>,
    preferences: Arc<dyn PreferenceSource>,
) -> AppState {
    let engine = Arc::new(ContextEngine::with_config(
        store.clone(),
        embedder,
        &config.memory_config(),
    ));
    AppState {
        chat: Arc::new(ChatService::new(engine, llm, preferences)),
        store,
    }
}

/// Builds [`AppState`] with the OpenAI-backed embedder and model client.
#[instrument(skip(config))]
pub async fn build_default_app_state(config: &ServerConfig) -> Result<AppState> {
    let store = create_vector_store(config).await?;
    let embedder: Arc<dyn EmbeddingService> =
        Arc::new(OpenAIEmbedding::from_config(&config.embedding_config()));
    let llm: Arc<dyn LlmClient> = Arc::new(OpenAILlmClient::from_config(&config.llm_config()));
    info!(
        chat_model = %config.chat_model,
        embedding_model = %config.embedding_model,
        "step: components built"
    );
    let preferences = load_preferences(config)?;
    Ok(build_app_state(config, store, embedder, llm, preferences))
}
