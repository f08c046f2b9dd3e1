//! # In-Memory Vector Store
//!
//! This crate provides an in-memory implementation of the `VectorStore` trait from `memory-core`.
//!
//! ## InMemoryVectorStore
//!
//! Simple in-memory storage for development and tests.
//!
//! **Advantages**:
//! - No external service to run
//! - Deterministic, so engine scenarios can be tested end to end
//!
//! **Limitations**:
//! - Data is lost on restart
//! - Search is a linear scan
//!
//! ## Example
//!
//! ```rust
//! use memory_core::{encode_turn, Role, Turn, VectorStore};
//! use memory_inmemory::InMemoryVectorStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), anyhow::Error> {
//!     let store = InMemoryVectorStore::new();
//!     let turn = Turn::new("user123", Role::User, "Hello world", vec![1.0, 0.0], 1.0);
//!     store.upsert(encode_turn(&turn)).await?;
//!     assert_eq!(store.len().await, 1);
//!     Ok(())
//! }
//! ```
//!
//! ## Thread Safety
//!
//! The store uses `Arc<RwLock<>>` so clones share the same records.

use async_trait::async_trait;
use memory_core::{
    cosine_similarity, RecordFilter, ScoredRecord, VectorRecord, VectorStore,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// In-memory vector store keyed by record id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryVectorStore {
    records: Arc<RwLock<BTreeMap<u64, VectorRecord>>>,
}

impl InMemoryVectorStore {
    /// Creates a new empty in-memory vector store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of records in the store.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Returns true if the store is empty.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Removes all records.
    pub async fn clear(&self) {
        self.records.write().await.clear();
    }

    /// Returns a copy of the record with `id`, if present.
    pub async fn get(&self, id: u64) -> Option<VectorRecord> {
        self.records.read().await.get(&id).cloned()
    }
}

#[async_trait]
impl VectorStore for InMemoryVectorStore {
    async fn upsert(&self, record: VectorRecord) -> Result<(), anyhow::Error> {
        debug!(
            id = record.id,
            dimension = record.vector.len(),
            "Writing record to in-memory vector store"
        );
        self.records.write().await.insert(record.id, record);
        Ok(())
    }

    async fn search(
        &self,
        query: &[f32],
        limit: usize,
        score_threshold: f32,
        filter: Option<&RecordFilter>,
    ) -> Result<Vec<ScoredRecord>, anyhow::Error> {
        let records = self.records.read().await;

        let mut hits: Vec<ScoredRecord> = records
            .values()
            .filter(|r| filter.map(|f| f.check(&r.payload)).unwrap_or(true))
            .map(|r| ScoredRecord {
                score: cosine_similarity(query, &r.vector),
                record: r.clone(),
            })
            .filter(|hit| hit.score >= score_threshold)
            .collect();

        hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        hits.truncate(limit);

        info!(
            dimension = query.len(),
            limit,
            score_threshold,
            count = hits.len(),
            "In-memory vector store search returned"
        );
        Ok(hits)
    }

    /// Lists records newest id first, which for timestamp-derived ids is newest first.
    async fn scroll(
        &self,
        limit: usize,
        filter: Option<&RecordFilter>,
    ) -> Result<Vec<VectorRecord>, anyhow::Error> {
        let records = self.records.read().await;
        let results: Vec<VectorRecord> = records
            .values()
            .rev()
            .filter(|r| filter.map(|f| f.check(&r.payload)).unwrap_or(true))
            .take(limit)
            .cloned()
            .collect();

        debug!(limit, count = results.len(), "In-memory vector store scroll returned");
        Ok(results)
    }

    async fn delete(&self, filter: &RecordFilter) -> Result<(), anyhow::Error> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|_, r| !filter.check(&r.payload));
        info!(
            deleted = before - records.len(),
            remaining = records.len(),
            "In-memory vector store delete done"
        );
        Ok(())
    }
}
