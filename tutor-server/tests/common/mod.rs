//! Shared test utilities for tutor-server integration tests.
//!
//! Provides a scripted language model that records the messages it receives,
//! a lookup-table embedder and a store wrapper counting calls.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use embedding::EmbeddingService;
use llm_client::LlmClient;
use memory::ContextEngine;
use memory_core::{RecordFilter, ScoredRecord, VectorRecord, VectorStore};
use memory_inmemory::InMemoryVectorStore;
use prompt::ChatMessage;
use tutor_server::{AppState, ChatService, PreferenceSource, StaticPreferences};

pub const REPLY: &str = "Recursion is when a function calls itself.";

/// Language model returning a fixed reply (or failing) and recording each call.
pub struct MockLlm {
    reply: Option<String>,
    calls: Mutex<Vec<Vec<ChatMessage>>>,
}

impl MockLlm {
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(reply.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<Vec<ChatMessage>> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_call(&self) -> Vec<ChatMessage> {
        self.calls().pop().expect("model was not called")
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, anyhow::Error> {
        self.calls.lock().unwrap().push(messages);
        match &self.reply {
            Some(reply) => Ok(reply.clone()),
            None => anyhow::bail!("model provider unavailable"),
        }
    }
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

/// Wraps an InMemoryVectorStore and counts every call. Optionally fails all calls.
#[derive(Default)]
pub struct CountingStore {
    pub inner: InMemoryVectorStore,
    calls: AtomicUsize,
    pub fail: bool,
}

impl CountingStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn unreachable() -> Arc<Self> {
        Arc::new(Self {
            fail: true,
            ..Default::default()
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn enter(&self) -> Result<(), anyhow::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            anyhow::bail!("connection refused");
        }
        Ok(())
    }
}

#[async_trait]
impl VectorStore for CountingStore {
    async fn upsert(&self, record: VectorRecord) -> Result<(), anyhow::Error> {
        self.enter()?;
        self.inner.upsert(record).await
    }

    async fn search(
        &self,
        query: &[f32],
        limit: usize,
        score_threshold: f32,
        filter: Option<&RecordFilter>,
    ) -> Result<Vec<ScoredRecord>, anyhow::Error> {
        self.enter()?;
        self.inner.search(query, limit, score_threshold, filter).await
    }

    async fn scroll(
        &self,
        limit: usize,
        filter: Option<&RecordFilter>,
    ) -> Result<Vec<VectorRecord>, anyhow::Error> {
        self.enter()?;
        self.inner.scroll(limit, filter).await
    }

    async fn delete(&self, filter: &RecordFilter) -> Result<(), anyhow::Error> {
        self.enter()?;
        self.inner.delete(filter).await
    }
}

pub fn chat_service(
    store: Arc<dyn VectorStore>,
    llm: Arc<dyn LlmClient>,
    preferences: StaticPreferences,
) -> ChatService {
    let engine = Arc::new(ContextEngine::new(store, Arc::new(LookupEmbedder::new())));
    let preferences: Arc<dyn PreferenceSource> = Arc::new(preferences);
    ChatService::new(engine, llm, preferences)
}

pub fn app_state(store: Arc<dyn VectorStore>, llm: Arc<dyn LlmClient>) -> AppState {
    AppState {
        chat: Arc::new(chat_service(store.clone(), llm, StaticPreferences::new())),
        store,
    }
}
