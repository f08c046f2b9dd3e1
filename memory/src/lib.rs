//! # Memory Crate
//!
//! Conversational memory for the tutor chat. For every prompt the
//! [`ContextEngine`] decides which prior turns are sent to the language model,
//! balancing recency, semantic relevance and an ambiguity heuristic, and it
//! records both sides of the exchange.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use memory::{history_to_messages, ContextEngine};
//! use memory_core::{now_secs, VectorStore};
//! use embedding::EmbeddingService;
//!
//! async fn turn(
//!     store: Arc<dyn VectorStore>,
//!     embedder: Arc<dyn EmbeddingService>,
//! ) -> Result<(), memory::EngineError> {
//!     let engine = ContextEngine::new(store, embedder);
//!     let prepared = engine.prepare("user123", "What is recursion?", now_secs()).await?;
//!     let history = history_to_messages(&prepared.history);
//!     // ... call the model with `history` ...
//!     engine.record_reply(&prepared, "Recursion is ...", now_secs()).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Engine tunables ([`MemoryConfig`])
//! - [`message_store`] - Turn persistence ([`MessageStore`])
//! - [`engine`] - Per-turn orchestration ([`ContextEngine`])
//! - [`error`] - [`EngineError`]
//!
//! ## External Interactions
//!
//! - **Vector store**: any `memory_core::VectorStore` (in-memory, Qdrant)
//! - **Embedding services**: the `embedding` crate trait
//! - **Prompt assembly**: history converts to `prompt::ChatMessage`

pub mod config;
pub mod engine;
pub mod error;
pub mod message_store;

pub use config::MemoryConfig;
pub use engine::{history_to_messages, ContextEngine, PreparedContext};
pub use error::EngineError;
pub use message_store::MessageStore;
