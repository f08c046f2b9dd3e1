//! # Vector Storage
//!
//! This module defines the vector store interface used for chat history.
//!
//! The `VectorStore` trait is implemented by storage backends (in-memory, Qdrant).
//! Implementations must be safe to share across concurrent requests.

use async_trait::async_trait;

use crate::record::{RecordFilter, ScoredRecord, VectorRecord};

/// Trait for persisting and querying vector records.
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Inserts the record, replacing any record with the same id.
    async fn upsert(&self, record: VectorRecord) -> Result<(), anyhow::Error>;

    /// Similarity search. Returns at most `limit` records scoring at or above
    /// `score_threshold`, best first, restricted by `filter` when given.
    /// Returned records carry their vectors.
    async fn search(
        &self,
        query: &[f32],
        limit: usize,
        score_threshold: f32,
        filter: Option<&RecordFilter>,
    ) -> Result<Vec<ScoredRecord>, anyhow::Error>;

    /// Bulk listing of up to `limit` records, optionally filtered. Callers must not
    /// rely on the order of the returned records.
    async fn scroll(
        &self,
        limit: usize,
        filter: Option<&RecordFilter>,
    ) -> Result<Vec<VectorRecord>, anyhow::Error>;

    /// Deletes every record matching `filter`.
    async fn delete(&self, filter: &RecordFilter) -> Result<(), anyhow::Error>;
}
