//! Qdrant-backed VectorStore (enabled with the `qdrant` feature).

mod config;
mod convert;
mod store;

pub use config::QdrantConfig;
pub use store::QdrantVectorStore;
