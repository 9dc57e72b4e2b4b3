//! Error types shared by the ELIZA responder crates.
//!
//! This crate provides:
//! - [`Error`] - Error with a categorized [`ErrorKind`] and optional context
//! - [`ErrorContext`] - Where a script error occurred (file, rule index)
//! - [`Result`] - Convenience alias

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;

pub use error::{Error, ErrorContext, ErrorKind};

/// Result type alias using the ELIZA [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
