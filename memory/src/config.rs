//! Engine tunables. Defaults reproduce the production retrieval behavior.

use std::time::Duration;

use memory_strategies::{
    HistoryMerger, RecencyScope, RecentWindowStrategy, RetentionSweeper, SemanticRecallStrategy,
    DEFAULT_MAX_AGE, DEFAULT_MAX_ENTRIES, DEFAULT_MAX_HISTORY, DEFAULT_MAX_RECENT,
    DEFAULT_RECALL_LIMIT, DEFAULT_RECALL_THRESHOLD, DEFAULT_RELEVANCE_THRESHOLD, DEFAULT_RETENTION,
    DEFAULT_SCAN_LIMIT,
};

/// Configuration of the [`crate::ContextEngine`].
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryConfig {
    /// Records listed from the store when building the recency window.
    pub scan_limit: usize,
    /// Newest entries of the sorted listing that are considered.
    pub max_entries: usize,
    /// Maximum age of a recency-window turn.
    pub max_age: Duration,
    pub recency_scope: RecencyScope,
    pub recall_limit: usize,
    pub recall_threshold: f32,
    /// Minimum similarity for a recent turn to survive the merge.
    pub relevance_threshold: f32,
    pub max_recent: usize,
    pub max_history: usize,
    /// Turns older than this are deleted before each chat turn.
    pub retention: Duration,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            scan_limit: DEFAULT_SCAN_LIMIT,
            max_entries: DEFAULT_MAX_ENTRIES,
            max_age: DEFAULT_MAX_AGE,
            recency_scope: RecencyScope::default(),
            recall_limit: DEFAULT_RECALL_LIMIT,
            recall_threshold: DEFAULT_RECALL_THRESHOLD,
            relevance_threshold: DEFAULT_RELEVANCE_THRESHOLD,
            max_recent: DEFAULT_MAX_RECENT,
            max_history: DEFAULT_MAX_HISTORY,
            retention: DEFAULT_RETENTION,
        }
    }
}

impl MemoryConfig {
    pub fn with_recency_scope(mut self, scope: RecencyScope) -> Self {
        self.recency_scope = scope;
        self
    }

    pub(crate) fn recent_window(&self) -> RecentWindowStrategy {
        RecentWindowStrategy::new(self.scan_limit, self.max_age, self.max_entries)
            .with_scope(self.recency_scope)
    }

    pub(crate) fn semantic_recall(&self) -> SemanticRecallStrategy {
        SemanticRecallStrategy::new(self.recall_limit, self.recall_threshold)
    }

    pub(crate) fn merger(&self) -> HistoryMerger {
        HistoryMerger::new(self.relevance_threshold, self.max_recent, self.max_history)
    }

    /// Retention sweeper for standalone sweeps.
    pub fn sweeper(&self) -> RetentionSweeper {
        RetentionSweeper::new(self.retention)
    }
}
