//! REPL and CLI for the ELIZA chatbot.
//!
//! This crate provides:
//! - [`Repl`] - Interactive conversation loop
//! - [`SessionConfig`] - Script, seed, and prompt settings for a session
//! - [`LineEditor`] - Line editing abstraction (rustyline by default)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod repl;

pub use config::SessionConfig;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::{Repl, Reply, strip_terminal_punctuation};
