//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use eliza_foundation::{Error, ErrorContext, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_invalid_pattern() {
    let err = Error::invalid_pattern(4, "(oops", "unclosed group");
    assert!(matches!(err.kind, ErrorKind::InvalidPattern { index: 4, .. }));
    assert!(err.context.is_none());
}

#[test]
fn error_empty_responses() {
    let err = Error::empty_responses(2, "Yes");
    assert!(matches!(err.kind, ErrorKind::EmptyResponses { index: 2, .. }));
}

#[test]
fn error_script_format() {
    let err = Error::script_format("missing field `rules`");
    assert!(matches!(err.kind, ErrorKind::ScriptFormat(_)));
}

#[test]
fn error_io() {
    let err = Error::io("permission denied");
    assert!(matches!(err.kind, ErrorKind::Io(_)));
}

// =============================================================================
// Error Display
// =============================================================================

#[test]
fn error_display_invalid_pattern() {
    let msg = Error::invalid_pattern(0, "[z-a]", "invalid range").to_string();
    assert_eq!(msg, "invalid pattern in rule 0 `[z-a]`: invalid range");
}

#[test]
fn error_display_empty_responses() {
    let msg = Error::empty_responses(9, "Hello(.*)").to_string();
    assert_eq!(msg, "rule 9 `Hello(.*)` has no responses");
}

#[test]
fn error_display_io() {
    assert_eq!(Error::io("disk on fire").to_string(), "i/o error: disk on fire");
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_source_only() {
    let err = Error::io("not found").with_context(ErrorContext::new().with_source("a.json"));
    assert_eq!(err.to_string(), "i/o error: not found (at a.json)");
}

#[test]
fn context_rule_only() {
    let err = Error::empty_responses(1, "x").with_context(ErrorContext::new().with_rule(1));
    assert_eq!(err.to_string(), "rule 1 `x` has no responses (at rule 1)");
}

#[test]
fn context_replaces_previous() {
    let err = Error::io("x")
        .with_context(ErrorContext::new().with_source("first.json"))
        .with_context(ErrorContext::new().with_source("second.json"));
    assert_eq!(
        err.context.and_then(|c| c.source).as_deref(),
        Some("second.json")
    );
}

#[test]
fn error_is_std_error() {
    fn takes_error(_: &dyn std::error::Error) {}
    takes_error(&Error::io("x"));
}
