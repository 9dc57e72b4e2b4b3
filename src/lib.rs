//! ELIZA - Pattern-matching conversational responder
//!
//! This crate re-exports all layers of the system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: eliza_runtime    — REPL, line editing, CLI, session config
//! Layer 1: eliza_engine     — Reflection, rule table, templates, responder, scripts
//! Layer 0: eliza_foundation — Error types
//! ```

pub use eliza_engine as engine;
pub use eliza_foundation as foundation;
pub use eliza_runtime as runtime;
