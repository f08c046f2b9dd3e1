//! History merge.
//!
//! Recency is trusted only for turns that are still on topic: recent turns are
//! filtered by similarity to the prompt, the newest few are kept, and the
//! remaining budget is filled from semantic recall.

use std::collections::HashSet;

use memory_core::{cosine_similarity, HistoryResult, Role, Turn};
use tracing::debug;

/// Default minimum similarity for a recent turn to count as relevant.
pub const DEFAULT_RELEVANCE_THRESHOLD: f32 = 0.75;
/// Default number of relevant recent turns kept.
pub const DEFAULT_MAX_RECENT: usize = 3;
/// Default maximum length of the merged history.
pub const DEFAULT_MAX_HISTORY: usize = 6;

/// Combines the recency window and semantic recall into one bounded history.
#[derive(Debug, Clone)]
pub struct HistoryMerger {
    relevance_threshold: f32,
    max_recent: usize,
    max_history: usize,
}

impl Default for HistoryMerger {
    fn default() -> Self {
        Self::new(
            DEFAULT_RELEVANCE_THRESHOLD,
            DEFAULT_MAX_RECENT,
            DEFAULT_MAX_HISTORY,
        )
    }
}

impl HistoryMerger {
    pub fn new(relevance_threshold: f32, max_recent: usize, max_history: usize) -> Self {
        Self {
            relevance_threshold,
            max_recent,
            max_history,
        }
    }

    /// Merges `recent` (oldest first) and `semantic` (best first).
    ///
    /// The output holds the newest `max_recent` recent turns whose carried
    /// embedding is at least `relevance_threshold` similar to `prompt_embedding`,
    /// followed by semantic turns in their given order. No two entries share
    /// (role, content) and the length never exceeds `max_history`.
    pub fn merge(
        &self,
        semantic: &[Turn],
        recent: &[Turn],
        prompt_embedding: &[f32],
    ) -> HistoryResult {
        let relevant: Vec<&Turn> = recent
            .iter()
            .filter(|t| {
                cosine_similarity(prompt_embedding, &t.embedding) >= self.relevance_threshold
            })
            .collect();
        let start = relevant.len().saturating_sub(self.max_recent);

        let mut seen: HashSet<(Role, &str)> = HashSet::new();
        let mut turns: Vec<Turn> = Vec::new();

        for &turn in &relevant[start..] {
            if turns.len() >= self.max_history {
                break;
            }
            if seen.insert(turn.dedup_key()) {
                turns.push(turn.clone());
            }
        }
        let recent_count = turns.len();

        for turn in semantic {
            if turns.len() >= self.max_history {
                break;
            }
            if seen.insert(turn.dedup_key()) {
                turns.push(turn.clone());
            }
        }

        debug!(
            recent_window = recent.len(),
            relevant_recent = relevant.len(),
            semantic = semantic.len(),
            recent_count,
            merged = turns.len(),
            "HistoryMerger: merged history"
        );
        HistoryResult::Merged {
            recent_count,
            turns,
        }
    }
}
