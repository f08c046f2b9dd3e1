//! Retention sweeper.
//!
//! Deletes turns older than the retention horizon. Runs as a pre-step of each
//! chat turn; a failed sweep is logged and never aborts the turn.

use std::time::Duration;

use memory_core::{RecordFilter, VectorStore};
use tracing::{info, warn};

/// Default retention horizon: 30 days.
pub const DEFAULT_RETENTION: Duration = Duration::from_secs(30 * 24 * 60 * 60);

/// Best-effort deletion of expired turns.
#[derive(Debug, Clone)]
pub struct RetentionSweeper {
    horizon: Duration,
}

impl Default for RetentionSweeper {
    fn default() -> Self {
        Self::new(DEFAULT_RETENTION)
    }
}

impl RetentionSweeper {
    pub fn new(horizon: Duration) -> Self {
        Self { horizon }
    }

    /// Timestamp below which turns are expired.
    pub fn cutoff(&self, now: f64) -> f64 {
        now - self.horizon.as_secs_f64()
    }

    /// Deletes every turn with `timestamp < now - horizon`. Idempotent.
    pub async fn sweep(&self, store: &dyn VectorStore, now: f64) {
        let cutoff = self.cutoff(now);
        match store.delete(&RecordFilter::older_than(cutoff)).await {
            Ok(()) => info!(cutoff, "step: retention sweep done"),
            Err(e) => warn!(error = %e, cutoff, "Retention sweep failed, continuing"),
        }
    }
}
