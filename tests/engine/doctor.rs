//! Integration tests for the built-in DOCTOR script
//!
//! Each case pins the template choice so the exact reply can be checked.

use std::sync::Arc;

use eliza_engine::{Responder, Script, SequenceSelector};

/// Answers `input` using template `choice` of whichever rule matches.
fn answer(input: &str, choice: usize) -> String {
    let compiled = Arc::new(Script::doctor().compile().unwrap());
    let mut responder = Responder::with_selector(compiled, SequenceSelector::new([choice]));
    responder.respond(input)
}

// =============================================================================
// Reflection In Replies
// =============================================================================

#[test]
fn i_am() {
    assert_eq!(answer("I am sad", 0), "Did you come to me because you are sad?");
}

#[test]
fn i_m_contraction() {
    assert_eq!(answer("I'm tired", 0), "How does being tired make you feel?");
}

#[test]
fn my_reflects_object() {
    assert_eq!(
        answer("My mother hates me", 0),
        "I see, your mother hates you."
    );
}

#[test]
fn why_dont_you() {
    assert_eq!(
        answer("Why don't you like me?", 0),
        "Do you really think I don't like you?"
    );
}

#[test]
fn are_you() {
    assert_eq!(
        answer("Are you a robot?", 0),
        "Why does it matter whether I am a robot?"
    );
}

#[test]
fn you_are() {
    assert_eq!(answer("You are annoying", 0), "Why do you think I am annoying?");
}

// =============================================================================
// Punctuation Cleanup
// =============================================================================

#[test]
fn doubled_question_mark_collapses() {
    assert_eq!(answer("I need help?", 0), "Why do you need help?");
    assert_eq!(answer("I think it is fine?", 0), "Do you doubt it is fine?");
}

#[test]
fn question_period_collapses() {
    assert_eq!(answer("Is it real?", 3), "It could well be that real.");
}

// =============================================================================
// Fallbacks
// =============================================================================

#[test]
fn question_fallback() {
    assert_eq!(answer("do cats dream?", 0), "Why do you ask that?");
}

#[test]
fn catch_all_echo() {
    assert_eq!(answer("The weather is nice", 6), "the weather is nice.");
}

#[test]
fn catch_all_answers_empty_input() {
    assert_eq!(answer("", 0), "Please tell me more.");
}

#[test]
fn quit_rule() {
    assert_eq!(answer("quit", 1), "Good-bye.");
}

#[test]
fn keyword_rules_match_inside_sentences() {
    assert_eq!(
        answer("lately my computer crashed", 1),
        "Does it seem strange to talk to a computer?"
    );
}

#[test]
fn matching_is_not_word_aware() {
    // `Yes` is found inside "yesterday"
    assert_eq!(answer("yesterday was awful", 0), "You seem quite sure.");
}
