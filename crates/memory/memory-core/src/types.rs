//! # Core Types
//!
//! This module defines the core types for chat turn storage.
//!
//! ## Role
//!
//! Role of a turn as it is used in a language-model request.
//!
//! - `User`: Message sent by the student
//! - `Assistant`: Reply produced by the tutor model
//!
//! ## StoredRole
//!
//! Role label as found in a stored payload. Legacy records may carry `"ai"`;
//! every stored label is normalized to a [`Role`] when a record is decoded.
//!
//! ## Turn
//!
//! A single message in a user's conversation, together with the embedding
//! computed when it was written.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Role of a turn in a conversation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Label written into the payload for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// Role label read back from the store, before normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoredRole {
    User,
    Assistant,
    /// Older clients tagged model replies as `"ai"`.
    LegacyAi,
}

impl StoredRole {
    /// Parses a payload label. Unknown labels return `None`.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "user" => Some(StoredRole::User),
            "assistant" => Some(StoredRole::Assistant),
            "ai" => Some(StoredRole::LegacyAi),
            _ => None,
        }
    }

    /// Maps the stored label onto the role sent to the language model.
    pub fn normalize(self) -> Role {
        match self {
            StoredRole::User => Role::User,
            StoredRole::Assistant | StoredRole::LegacyAi => Role::Assistant,
        }
    }
}

/// One message in a user's conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    /// Millisecond timestamp; see [`turn_id`].
    pub id: u64,
    pub user_id: String,
    pub role: Role,
    pub content: String,
    /// Seconds since epoch, assigned at write time.
    pub timestamp: f64,
    /// Embedding of `content`, computed once when the turn was written.
    pub embedding: Vec<f32>,
}

impl Turn {
    /// Creates a turn whose id is derived from `timestamp`.
    pub fn new(
        user_id: impl Into<String>,
        role: Role,
        content: impl Into<String>,
        embedding: Vec<f32>,
        timestamp: f64,
    ) -> Self {
        Self {
            id: turn_id(timestamp),
            user_id: user_id.into(),
            role,
            content: content.into(),
            timestamp,
            embedding,
        }
    }

    /// Key used to deduplicate history entries.
    pub fn dedup_key(&self) -> (Role, &str) {
        (self.role, self.content.as_str())
    }
}

/// Derives a record id from a timestamp in seconds (millisecond resolution).
pub fn turn_id(timestamp: f64) -> u64 {
    (timestamp * 1000.0).round().max(0.0) as u64
}

/// Current wall-clock time in seconds since epoch, with millisecond precision.
pub fn now_secs() -> f64 {
    Utc::now().timestamp_millis() as f64 / 1000.0
}
