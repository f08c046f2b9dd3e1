//! Last-exchange pairing for vague prompts.

use memory_core::{Role, Turn};
use tracing::debug;

use super::utils::{truncate_for_log, MAX_LOG_CONTENT_LEN};

/// Finds the newest adjacent (user, assistant) pair in `window` (oldest first).
///
/// Returns exactly two turns, user then assistant, or an empty vector when the
/// window holds no such pair. Only directly consecutive turns form a pair.
pub fn last_exchange(window: &[Turn]) -> Vec<Turn> {
    for i in (1..window.len()).rev() {
        let (user, assistant) = (&window[i - 1], &window[i]);
        if user.role == Role::User && assistant.role == Role::Assistant {
            debug!(
                user = %truncate_for_log(&user.content, MAX_LOG_CONTENT_LEN),
                assistant = %truncate_for_log(&assistant.content, MAX_LOG_CONTENT_LEN),
                "Using conversation pairing for vague prompt"
            );
            return vec![user.clone(), assistant.clone()];
        }
    }

    debug!(window = window.len(), "No adjacent user/assistant pair in recency window");
    Vec::new()
}
