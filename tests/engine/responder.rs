//! Integration tests for the responder
//!
//! Tests substitution, unresolved markers, precedence, and seeded replay.

use std::sync::Arc;

use eliza_engine::{
    CompiledScript, Reflections, Responder, RuleSpec, Script, SequenceSelector,
};

fn doctor() -> Arc<CompiledScript> {
    Arc::new(Script::doctor().compile().unwrap())
}

fn custom(rules: Vec<RuleSpec>) -> Arc<CompiledScript> {
    Arc::new(
        Script::new(rules, Script::doctor().reflections)
            .compile()
            .unwrap(),
    )
}

// =============================================================================
// Substitution
// =============================================================================

#[test]
fn need_help_is_one_of_the_need_responses() {
    let expected = [
        "Why do you need help?",
        "Would it really help you to get help?",
        "Are you sure you need help?",
    ];
    for seed in 0..25 {
        let mut responder = Responder::seeded(doctor(), seed);
        let text = responder.respond("I need help");
        assert!(expected.contains(&text.as_str()), "seed {seed}: {text:?}");
    }
}

#[test]
fn need_help_exact() {
    let script = custom(vec![RuleSpec::new("I need (.*)", ["Why do you need %1?"])]);
    let mut responder = Responder::with_selector(script, SequenceSelector::default());
    assert_eq!(responder.respond("I need help"), "Why do you need help?");
}

#[test]
fn unresolved_marker_left_literally() {
    let script = custom(vec![RuleSpec::new(
        "I need (.*)",
        ["You need %1, not %9."],
    )]);
    let mut responder = Responder::with_selector(script, SequenceSelector::default());
    assert_eq!(responder.respond("I need rest"), "You need rest, not %9.");
}

#[test]
fn unresolved_marker_stops_later_markers() {
    let script = custom(vec![RuleSpec::new("(.*) and (.*)", ["%9 %1 %2"])]);
    let mut responder = Responder::with_selector(script, SequenceSelector::default());
    assert_eq!(responder.respond("this and that"), "%9 %1 %2");
}

// =============================================================================
// Precedence
// =============================================================================

#[test]
fn earlier_rule_wins() {
    let script = custom(vec![
        RuleSpec::new("I am (.*)", ["A %1"]),
        RuleSpec::new("(.*) sorry (.*)", ["B"]),
        RuleSpec::new("(.*)", ["C"]),
    ]);
    let mut responder = Responder::with_selector(script, SequenceSelector::default());
    assert_eq!(responder.respond("I am sorry about it"), "A sorry about it");
    assert_eq!(responder.respond("so sorry for that"), "B");
    assert_eq!(responder.respond("nothing special"), "C");
}

#[test]
fn doctor_precedence_only_uses_earlier_rule_set() {
    let compiled = doctor();
    // matches `I am (.*)` as well as `(.*) sorry (.*)` and `(.*) friend (.*)`
    let input = "I am sorry about my friend here";
    let first = compiled.rules().find_match(input).unwrap();
    assert_eq!(first.rule.pattern(), "I am (.*)");

    let allowed = [
        "Did you come to me because you are sorry about your friend here?",
        "How long have you been sorry about your friend here?",
        "How do you feel about being sorry about your friend here?",
    ];
    for seed in 0..25 {
        let mut responder = Responder::seeded(Arc::clone(&compiled), seed);
        let text = responder.respond(input);
        assert!(allowed.contains(&text.as_str()), "seed {seed}: {text:?}");
    }
}

// =============================================================================
// No Match
// =============================================================================

#[test]
fn without_catch_all_unmatched_input_is_empty() {
    let script = Arc::new(
        Script::new(vec![RuleSpec::new("^hello$", ["Hi."])], Reflections::new())
            .compile()
            .unwrap(),
    );
    assert!(!script.rules().has_catch_all());
    let mut responder = Responder::seeded(script, 1);
    assert_eq!(responder.respond("goodbye"), "");
    assert_eq!(responder.respond("HELLO"), "Hi.");
}

// =============================================================================
// Determinism
// =============================================================================

const SCRIPTED_INPUTS: [&str; 3] = ["I need help", "Hello", "quit"];

#[test]
fn golden_transcript_with_scripted_choices() {
    let mut responder = Responder::with_selector(doctor(), SequenceSelector::new([0, 1, 2]));
    let transcript: Vec<String> = SCRIPTED_INPUTS
        .iter()
        .map(|input| responder.respond(input))
        .collect();

    assert_eq!(
        transcript,
        vec![
            "Why do you need help?",
            "Hi there... how are you today?",
            "Thank you, that will be $150. Have a good day!",
        ]
    );
}

#[test]
fn golden_transcript_with_seed_42() {
    let mut responder = Responder::seeded(doctor(), 42);
    let transcript: Vec<String> = SCRIPTED_INPUTS
        .iter()
        .map(|input| responder.respond(input))
        .collect();

    assert_eq!(
        transcript,
        vec![
            "Are you sure you need help?",
            "Hi there... how are you today?",
            "Thank you for talking with me.",
        ]
    );
}

#[test]
fn seeded_transcript_replays_exactly() {
    let run = |seed: u64| -> Vec<String> {
        let mut responder = Responder::seeded(doctor(), seed);
        SCRIPTED_INPUTS
            .iter()
            .map(|input| responder.respond(input))
            .collect()
    };

    for seed in [0, 1, 42, u64::MAX] {
        assert_eq!(run(seed), run(seed));
    }
}

#[test]
fn seeded_transcript_stays_within_rule_sets() {
    let hello = [
        "Hello... I'm glad you could drop by today.",
        "Hi there... how are you today?",
        "Hello, how are you feeling today?",
    ];
    let quit = [
        "Thank you for talking with me.",
        "Good-bye.",
        "Thank you, that will be $150. Have a good day!",
    ];

    let mut responder = Responder::seeded(doctor(), 42);
    let _ = responder.respond("I need help");
    assert!(hello.contains(&responder.respond("Hello").as_str()));
    assert!(quit.contains(&responder.respond("quit").as_str()));
}

#[test]
fn responders_share_one_compiled_script() {
    let compiled = doctor();
    let mut a = Responder::with_selector(Arc::clone(&compiled), SequenceSelector::new([0]));
    let mut b = Responder::with_selector(Arc::clone(&compiled), SequenceSelector::new([1]));

    assert_eq!(a.respond("I need sleep"), "Why do you need sleep?");
    assert_eq!(b.respond("I need sleep"), "Would it really help you to get sleep?");
    assert_eq!(Arc::strong_count(&compiled), 3);
}
