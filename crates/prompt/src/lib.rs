//! # Prompt
//!
//! Builds the message list sent to the language model for one chat turn.
//!
//! ## Layout
//!
//! - **System**: persona instruction, or one generated from the user's
//!   learning preferences ([`system_message_for`])
//! - **History**: prior turns selected by the memory engine, oldest first
//! - **User**: the new prompt, always last
//!
//! ## External interactions
//!
//! - **AI models**: output is sent to OpenAI-compatible chat completion APIs.

mod persona;
mod preferences;

pub use persona::{system_message_for, Persona, DEFAULT_SYSTEM_MESSAGE};
pub use preferences::{
    GuidanceStyle, LearningPreferences, ResponseLength, ValueFocus, NO_PREFERENCES_MESSAGE,
};

/// Role of a message, one-to-one with OpenAI Chat Completions API `role` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    /// System instruction (API `role: "system"`).
    System,
    /// User message (API `role: "user"`).
    User,
    /// Assistant message (API `role: "assistant"`).
    Assistant,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::System => "system",
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

/// A single chat message, one-to-one with one element of OpenAI `messages` array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// Assembles `[system, ...history, user(prompt)]`.
///
/// History is passed through in the given order; the new prompt is always the
/// last message.
pub fn assemble<H>(system_message: &str, history: H, prompt: &str) -> Vec<ChatMessage>
where
    H: IntoIterator<Item = ChatMessage>,
{
    let mut messages = vec![ChatMessage::system(system_message)];
    messages.extend(history);
    messages.push(ChatMessage::user(prompt));
    messages
}
