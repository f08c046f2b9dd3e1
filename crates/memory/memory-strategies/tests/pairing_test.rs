//! Unit tests for last_exchange.

mod common;

use common::{assistant, user, NOW};
use memory_core::Role;
use memory_strategies::last_exchange;

#[test]
fn test_pairs_last_user_assistant_exchange() {
    let window = vec![
        user("What is a stack?", NOW - 90.0),
        assistant("A LIFO structure.", NOW - 80.0),
        user("Explain recursion", NOW - 30.0),
        assistant("Recursion is a function calling itself.", NOW - 20.0),
    ];

    let pair = last_exchange(&window);

    assert_eq!(pair.len(), 2);
    assert_eq!(pair[0].role, Role::User);
    assert_eq!(pair[0].content, "Explain recursion");
    assert_eq!(pair[1].role, Role::Assistant);
    assert_eq!(pair[1].content, "Recursion is a function calling itself.");
}

#[test]
fn test_trailing_unanswered_user_turn_is_skipped() {
    let window = vec![
        user("Explain recursion", NOW - 30.0),
        assistant("Recursion is a function calling itself.", NOW - 20.0),
        user("Unanswered", NOW - 10.0),
    ];

    let pair = last_exchange(&window);
    assert_eq!(pair[0].content, "Explain recursion");
}

#[test]
fn test_no_pair_returns_empty() {
    assert!(last_exchange(&[]).is_empty());
    assert!(last_exchange(&[user("alone", NOW)]).is_empty());
    assert!(last_exchange(&[user("a", NOW - 2.0), user("b", NOW - 1.0)]).is_empty());
    assert!(last_exchange(&[assistant("reply", NOW - 2.0), user("q", NOW - 1.0)]).is_empty());
}

#[test]
fn test_non_adjacent_turns_do_not_pair() {
    let window = vec![
        user("question", NOW - 30.0),
        user("follow-up", NOW - 20.0),
        assistant("answer", NOW - 10.0),
    ];

    let pair = last_exchange(&window);
    assert_eq!(pair[0].content, "follow-up");
    assert_eq!(pair[1].content, "answer");

    let window = vec![
        assistant("old answer", NOW - 30.0),
        assistant("another answer", NOW - 20.0),
    ];
    assert!(last_exchange(&window).is_empty());
}
