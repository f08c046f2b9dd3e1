//! # Memory Core
//!
//! Core types and traits for chat turn storage and context retrieval.
//! Used by the `memory` crate and the `memory-strategies` crate.
//!
//! ## Modules
//!
//! - [`types`] - Turn, Role, StoredRole
//! - [`record`] - VectorRecord, payload fields, RecordFilter
//! - [`codec`] - Turn <-> VectorRecord payload schema
//! - [`store`] - VectorStore trait
//! - [`history`] - HistoryResult (return type of context retrieval)
//! - [`similarity`] - cosine similarity used for scoring and merge relevance

pub mod codec;
pub mod history;
pub mod record;
pub mod similarity;
pub mod store;
pub mod types;

pub use codec::*;
pub use history::*;
pub use record::*;
pub use similarity::cosine_similarity;
pub use store::*;
pub use types::*;
