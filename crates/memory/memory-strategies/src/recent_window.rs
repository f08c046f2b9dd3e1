//! Recency window strategy.
//!
//! Lists the newest stored turns and sieves them by age, count and self-match.
//! External interactions: VectorStore::scroll.

use std::time::Duration;

use memory_core::{decode_turns, RecordFilter, Turn, VectorStore};
use tracing::debug;

/// Default number of records listed from the store before sieving.
pub const DEFAULT_SCAN_LIMIT: usize = 20;
/// Default maximum age of a turn in the window.
pub const DEFAULT_MAX_AGE: Duration = Duration::from_secs(10 * 60);
/// Default number of newest entries kept from the sorted listing.
pub const DEFAULT_MAX_ENTRIES: usize = 15;

/// Which records the initial listing covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecencyScope {
    /// List only the requesting user's records.
    #[default]
    PerUser,
    /// List records of every user, then drop other users' turns. A chatty user
    /// can push everyone else out of the scan limit.
    Global,
}

/// Strategy for building the recency window of a conversation.
#[derive(Debug, Clone)]
pub struct RecentWindowStrategy {
    scan_limit: usize,
    max_age: Duration,
    max_entries: usize,
    scope: RecencyScope,
}

impl Default for RecentWindowStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_SCAN_LIMIT, DEFAULT_MAX_AGE, DEFAULT_MAX_ENTRIES)
    }
}

impl RecentWindowStrategy {
    /// Creates a new RecentWindowStrategy.
    ///
    /// # Arguments
    ///
    /// * `scan_limit` - Records listed from the store.
    /// * `max_age` - Turns older than `now - max_age` are dropped.
    /// * `max_entries` - Newest entries of the sorted listing that are considered.
    pub fn new(scan_limit: usize, max_age: Duration, max_entries: usize) -> Self {
        Self {
            scan_limit,
            max_age,
            max_entries,
            scope: RecencyScope::default(),
        }
    }

    pub fn with_scope(mut self, scope: RecencyScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn scope(&self) -> RecencyScope {
        self.scope
    }

    /// Builds the recency window for `user_id`, oldest first.
    ///
    /// 1. Lists up to `scan_limit` records (scoped per [`RecencyScope`]).
    /// 2. Decodes them, dropping malformed payloads, and sorts by timestamp.
    /// 3. Keeps the newest `max_entries`.
    /// 4. Keeps turns of `user_id` written at or after `now - max_age` whose
    ///    content differs from `exclude_content`.
    ///
    /// An empty window is a normal outcome.
    pub async fn recent_window(
        &self,
        store: &dyn VectorStore,
        user_id: &str,
        now: f64,
        exclude_content: &str,
    ) -> Result<Vec<Turn>, anyhow::Error> {
        let filter = match self.scope {
            RecencyScope::PerUser => Some(RecordFilter::for_user(user_id)),
            RecencyScope::Global => None,
        };
        let records = store.scroll(self.scan_limit, filter.as_ref()).await?;
        let listed = records.len();

        let mut turns = decode_turns(records);
        turns.sort_by(|a, b| {
            a.timestamp
                .partial_cmp(&b.timestamp)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        let start = turns.len().saturating_sub(self.max_entries);
        turns.drain(..start);

        let cutoff = now - self.max_age.as_secs_f64();
        let window: Vec<Turn> = turns
            .into_iter()
            .filter(|t| t.timestamp >= cutoff)
            .filter(|t| t.content != exclude_content)
            .filter(|t| t.user_id == user_id)
            .collect();

        debug!(
            user_id,
            scope = ?self.scope,
            listed,
            window = window.len(),
            "RecentWindowStrategy: built recency window"
        );
        Ok(window)
    }
}
