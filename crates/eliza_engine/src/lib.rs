//! Rule table, reflection, and responder for the ELIZA chatbot.
//!
//! This crate provides:
//! - [`Reflections`] - Pronoun/verb reflection ("I am" → "you are")
//! - [`RuleTable`] - Ordered, compiled (pattern, responses) rules
//! - [`Responder`] - First-match dispatch, template substitution, punctuation cleanup
//! - [`Selector`] - Injectable source of template choices
//! - [`Script`] - Serializable rule set, including the built-in DOCTOR script
//!
//! # Pipeline
//!
//! ```text
//! "I need a holiday"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ RULE TABLE      │  → rule 0 `I need (.*)`, groups ["I need a holiday", "a holiday"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ SELECTOR        │  → "Why do you need %1?"
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ TEMPLATE        │  → "Why do you need a holiday?"
//! └─────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod reflection;
pub mod responder;
pub mod rule;
pub mod script;
pub mod selector;
pub mod template;


pub use reflection::{Reflections, translate};
pub use responder::{Responder, Response};
pub use rule::{Rule, RuleMatch, RuleSpec, RuleTable};
pub use script::{CompiledScript, Script};
pub use selector::{RandomSelector, Selector, SequenceSelector};
pub use template::{fix_punctuation, substitute};
