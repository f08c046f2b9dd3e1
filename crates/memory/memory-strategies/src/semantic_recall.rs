//! Semantic recall strategy.
//!
//! Uses the prompt embedding to find similar turns of the same user.
//! External interactions: VectorStore::search with a user filter and score threshold.

use memory_core::{decode_scored, RecordFilter, Turn, VectorStore};
use tracing::debug;

/// Default number of turns returned.
pub const DEFAULT_RECALL_LIMIT: usize = 5;
/// Default minimum similarity score.
pub const DEFAULT_RECALL_THRESHOLD: f32 = 0.75;

/// Strategy for retrieving semantically similar history.
///
/// Returns fewer than `limit` turns when not enough of them clear the
/// threshold; results are never padded with weaker matches.
#[derive(Debug, Clone)]
pub struct SemanticRecallStrategy {
    limit: usize,
    score_threshold: f32,
}

impl Default for SemanticRecallStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_RECALL_LIMIT, DEFAULT_RECALL_THRESHOLD)
    }
}

impl SemanticRecallStrategy {
    /// Creates a new SemanticRecallStrategy.
    ///
    /// # Arguments
    ///
    /// * `limit` - Maximum number of turns to return.
    /// * `score_threshold` - Minimum similarity score (inclusive).
    pub fn new(limit: usize, score_threshold: f32) -> Self {
        Self {
            limit,
            score_threshold,
        }
    }

    /// Returns `user_id`'s turns most similar to `prompt_embedding`, best first.
    ///
    /// `exclude_id` is the record of the prompt currently being processed; it is
    /// dropped so the prompt never recalls itself. One extra hit is requested to
    /// keep the result size unaffected.
    pub async fn recall(
        &self,
        store: &dyn VectorStore,
        user_id: &str,
        prompt_embedding: &[f32],
        exclude_id: Option<u64>,
    ) -> Result<Vec<Turn>, anyhow::Error> {
        let fetch = self.limit + usize::from(exclude_id.is_some());
        let filter = RecordFilter::for_user(user_id);
        let hits = store
            .search(prompt_embedding, fetch, self.score_threshold, Some(&filter))
            .await?;

        let turns: Vec<Turn> = decode_scored(hits)
            .into_iter()
            .filter(|(score, turn)| {
                *score >= self.score_threshold
                    && turn.user_id == user_id
                    && Some(turn.id) != exclude_id
            })
            .map(|(_, turn)| turn)
            .take(self.limit)
            .collect();

        debug!(
            user_id,
            limit = self.limit,
            score_threshold = self.score_threshold,
            count = turns.len(),
            "SemanticRecallStrategy: semantic recall returned turns"
        );
        Ok(turns)
    }
}
