//! # History Result
//!
//! Result of context retrieval for one chat turn. Consumed by the chat service
//! when assembling the language-model request.

use crate::types::Turn;

/// Conversation history selected for the current prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryResult {
    /// The prompt was vague: the last adjacent (user, assistant) exchange, or
    /// nothing when the recency window holds no such pair.
    Paired(Vec<Turn>),
    /// Relevant recent turns first, then semantic fill-in.
    Merged {
        /// How many leading entries of `turns` came from the recency window.
        recent_count: usize,
        turns: Vec<Turn>,
    },
}

impl HistoryResult {
    pub fn turns(&self) -> &[Turn] {
        match self {
            HistoryResult::Paired(turns) => turns,
            HistoryResult::Merged { turns, .. } => turns,
        }
    }

    pub fn into_turns(self) -> Vec<Turn> {
        match self {
            HistoryResult::Paired(turns) => turns,
            HistoryResult::Merged { turns, .. } => turns,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.turns().is_empty()
    }

    pub fn is_paired(&self) -> bool {
        matches!(self, HistoryResult::Paired(_))
    }
}
