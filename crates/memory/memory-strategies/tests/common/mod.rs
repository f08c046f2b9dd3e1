//! Shared test utilities for memory-strategies integration tests.
//!
//! Provides turn/record builders, a seeded InMemoryVectorStore and FailingStore
//! (every call errors) used by strategy test files under tests/.

#![allow(dead_code)]

use async_trait::async_trait;
use memory_core::{
    encode_turn, Payload, RecordFilter, Role, ScoredRecord, Turn, VectorRecord, VectorStore,
};
use memory_inmemory::InMemoryVectorStore;

pub const NOW: f64 = 1_700_000_000.0;

pub fn turn(user_id: &str, role: Role, content: &str, embedding: Vec<f32>, timestamp: f64) -> Turn {
    Turn::new(user_id, role, content, embedding, timestamp)
}

pub fn user(content: &str, timestamp: f64) -> Turn {
    turn("alice", Role::User, content, vec![1.0, 0.0], timestamp)
}

pub fn assistant(content: &str, timestamp: f64) -> Turn {
    turn("alice", Role::Assistant, content, vec![1.0, 0.0], timestamp)
}

/// Unit vector at cosine `cos` from `[1, 0]`.
pub fn at_cosine(cos: f32) -> Vec<f32> {
    vec![cos, (1.0 - cos * cos).sqrt()]
}

pub async fn seeded_store(turns: &[Turn]) -> InMemoryVectorStore {
    let store = InMemoryVectorStore::new();
    for t in turns {
        store.upsert(encode_turn(t)).await.unwrap();
    }
    store
}

/// Record with an arbitrary payload, for malformed-payload tests.
pub fn raw_record(id: u64, payload: serde_json::Value) -> VectorRecord {
    let payload: Payload = match payload {
        serde_json::Value::Object(map) => map,
        _ => panic!("expected object"),
    };
    VectorRecord {
        id,
        vector: vec![1.0, 0.0],
        payload,
    }
}

/// Store whose every operation fails.
pub struct FailingStore;

#[async_trait]
impl VectorStore for FailingStore {
    async fn upsert(&self, _record: VectorRecord) -> Result<(), anyhow::Error> {
        anyhow::bail!("store unreachable")
    }

    async fn search(
        &self,
        _query: &[f32],
        _limit: usize,
        _score_threshold: f32,
        _filter: Option<&RecordFilter>,
    ) -> Result<Vec<ScoredRecord>, anyhow::Error> {
        anyhow::bail!("store unreachable")
    }

    async fn scroll(
        &self,
        _limit: usize,
        _filter: Option<&RecordFilter>,
    ) -> Result<Vec<VectorRecord>, anyhow::Error> {
        anyhow::bail!("store unreachable")
    }

    async fn delete(&self, _filter: &RecordFilter) -> Result<(), anyhow::Error> {
        anyhow::bail!("store unreachable")
    }
}
