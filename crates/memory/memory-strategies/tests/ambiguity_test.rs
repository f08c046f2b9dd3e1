//! Unit tests for is_vague.
//!
//! Covers every cue word, case/whitespace handling, the substring quirk, and
//! prompts without any cue.

use memory_strategies::{is_vague, VAGUE_CUES};

#[test]
fn test_every_cue_word_is_vague() {
    for cue in VAGUE_CUES {
        assert!(is_vague(cue), "cue {:?} should be vague", cue);
        assert!(is_vague(&format!("could you {} please", cue)));
    }
}

#[test]
fn test_prompts_containing_why_are_vague() {
    for prompt in ["why?", "Why is the sky blue", "  WHY  ", "but why would it recurse", "anywhy"] {
        assert!(is_vague(prompt), "{:?} should be vague", prompt);
    }
}

#[test]
fn test_case_and_whitespace_are_ignored() {
    assert!(is_vague("   Explain It   "));
    assert!(is_vague("WHAT DO YOU MEAN"));
}

#[test]
fn test_substring_inside_longer_word_matches() {
    assert!(is_vague("furthermore, recursion"));
    assert!(is_vague("counterexamples of sorting"));
}

#[test]
fn test_prompts_without_cues_are_not_vague() {
    for prompt in [
        "What is recursion?",
        "Define a binary tree",
        "How do I sort a list in Python",
        "",
        "   ",
    ] {
        assert!(!is_vague(prompt), "{:?} should not be vague", prompt);
    }
}
