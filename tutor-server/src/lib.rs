//! # Tutor server
//!
//! HTTP backend of the AI tutor chat. Wires the memory engine, the embedding
//! provider, the language model client and the learning preferences behind
//! `POST /api/chat` and `GET /ping`. Loads config from env and serves.

pub mod chat;
pub mod cli;
pub mod components;
pub mod config;
pub mod error;
pub mod http;
pub mod logger;
#[cfg(feature = "qdrant")]
pub mod memory_qdrant;
pub mod preferences;
pub mod runner;

pub use chat::{ChatRequest, ChatService, UserId};
pub use cli::{Cli, Commands};
pub use components::{build_app_state, build_default_app_state, create_vector_store, load_preferences};
pub use config::{parse_recency_scope, ServerConfig};
pub use error::ChatError;
pub use http::{router, serve, AppState, ChatResponse, OPAQUE_ERROR};
pub use logger::init_tracing;
pub use preferences::{PreferenceSource, StaticPreferences};
pub use runner::{run_server, run_sweep};
