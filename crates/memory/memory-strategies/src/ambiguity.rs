//! Vague prompt detection.
//!
//! A prompt is vague when it leans on earlier context ("why?", "explain more").
//! Matching is plain substring containment on the lower-cased, trimmed prompt,
//! so "furthermore" matches "more".

/// Cue phrases that mark a prompt as referring back to the previous exchange.
pub const VAGUE_CUES: &[&str] = &[
    "elaborate",
    "why",
    "what do you mean",
    "explain",
    "more",
    "clarify",
    "continue",
    "shorten",
    "summarize",
    "detail",
    "example",
    "again",
    "another",
];

/// Returns true if the prompt contains any of [`VAGUE_CUES`].
pub fn is_vague(prompt: &str) -> bool {
    let lowered = prompt.trim().to_lowercase();
    VAGUE_CUES.iter().any(|cue| lowered.contains(cue))
}
