//! Shared test utilities for memory integration tests.
//!
//! Provides a lookup-table embedder, an embedder that always fails, and a
//! store wrapper counting calls per operation.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use embedding::EmbeddingService;
use memory_core::{RecordFilter, ScoredRecord, VectorRecord, VectorStore};
use memory_inmemory::InMemoryVectorStore;

pub const NOW: f64 = 1_700_000_000.0;

/// Unit vector at cosine `cos` from `[1, 0]`.
pub fn at_cosine(cos: f32) -> Vec<f32> {
    vec![cos, (1.0 - cos * cos).sqrt()]
}

/// Embedder returning fixed vectors per text; unknown texts map to `[0, 1]`.
#[derive(Default)]
pub struct LookupEmbedder {
    table: HashMap<String, Vec<f32>>,
}

impl LookupEmbedder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, text: &str, vector: Vec<f32>) -> Self {
        self.table.insert(text.to_string(), vector);
        self
    }
}

#[async_trait]
impl EmbeddingService for LookupEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, anyhow::Error> {
        Ok(self.table.get(text).cloned().unwrap_or_else(|| vec![0.0, 1.0]))
    }
}

pub struct FailingEmbedder;

#[async_trait]
impl EmbeddingService for FailingEmbedder {
    async fn embed(&self, _text: &str) -> Result<Vec<f32>, anyhow::Error> {
        anyhow::bail!("embedding provider unavailable")
    }
}

/// Wraps an InMemoryVectorStore and counts calls. Optionally fails writes.
#[derive(Default)]
pub struct CountingStore {
    pub inner: InMemoryVectorStore,
    pub upserts: AtomicUsize,
    pub searches: AtomicUsize,
    pub scrolls: AtomicUsize,
    pub deletes: AtomicUsize,
    pub fail_upsert: bool,
}

impl CountingStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing_writes() -> Arc<Self> {
        Arc::new(Self {
            fail_upsert: true,
            ..Default::default()
        })
    }

    pub fn searches(&self) -> usize {
        self.searches.load(Ordering::SeqCst)
    }

    pub fn upserts(&self) -> usize {
        self.upserts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VectorStore for CountingStore {
    async fn upsert(&self, record: VectorRecord) -> Result<(), anyhow::Error> {
        self.upserts.fetch_add(1, Ordering::SeqCst);
        if self.fail_upsert {
            anyhow::bail!("store unreachable");
        }
        self.inner.upsert(record).await
    }

    async fn search(
        &self,
        query: &[f32],
        limit: usize,
        score_threshold: f32,
        filter: Option<&RecordFilter>,
    ) -> Result<Vec<ScoredRecord>, anyhow::Error> {
        self.searches.fetch_add(1, Ordering::SeqCst);
        self.inner.search(query, limit, score_threshold, filter).await
    }

    async fn scroll(
        &self,
        limit: usize,
        filter: Option<&RecordFilter>,
    ) -> Result<Vec<VectorRecord>, anyhow::Error> {
        self.scrolls.fetch_add(1, Ordering::SeqCst);
        self.inner.scroll(limit, filter).await
    }

    async fn delete(&self, filter: &RecordFilter) -> Result<(), anyhow::Error> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        self.inner.delete(filter).await
    }
}
