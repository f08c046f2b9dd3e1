//! # Context Strategies
//!
//! This crate decides which stored turns are injected as history for a new prompt.
//!
//! Available pieces:
//! - [`is_vague`]: flags prompts that refer back to unspecified earlier context
//! - [`RecentWindowStrategy`]: newest turns within a time cutoff
//! - [`SemanticRecallStrategy`]: top-K similar turns of the same user
//! - [`HistoryMerger`]: relevance-filtered recency first, then semantic fill-in
//! - [`last_exchange`]: the adjacent (user, assistant) pair used for vague prompts
//! - [`RetentionSweeper`]: best-effort deletion of expired turns
//!
//! ## Logging
//!
//! Strategies emit `tracing` debug logs so that retrieval can be inspected in
//! production: listing scope, counts before and after each sieve, and which
//! path the history took.
//!
//! ## External Interactions
//!
//! - **memory-core**: VectorStore, Turn, RecordFilter, HistoryResult

mod ambiguity;
mod merge;
mod pairing;
mod recent_window;
mod retention;
mod semantic_recall;
mod utils;

pub use ambiguity::{is_vague, VAGUE_CUES};
pub use memory_core::cosine_similarity;
pub use merge::{
    HistoryMerger, DEFAULT_MAX_HISTORY, DEFAULT_MAX_RECENT,
    DEFAULT_RELEVANCE_THRESHOLD,
};
pub use pairing::last_exchange;
pub use recent_window::{
    RecencyScope, RecentWindowStrategy, DEFAULT_MAX_AGE, DEFAULT_MAX_ENTRIES, DEFAULT_SCAN_LIMIT,
};
pub use retention::{RetentionSweeper, DEFAULT_RETENTION};
pub use semantic_recall::{SemanticRecallStrategy, DEFAULT_RECALL_LIMIT, DEFAULT_RECALL_THRESHOLD};
pub use utils::truncate_for_log;
