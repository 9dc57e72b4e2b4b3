//! Error types for the ELIZA responder.
//!
//! Every error here is a construction-time error: a script that does not
//! compile, cannot be read, or is malformed. Responding to input never fails.

use std::fmt;

use thiserror::Error;

/// The main error type for script loading and compilation.
#[derive(Debug, Error)]
#[error("{kind}{}", context_suffix(.context.as_ref()))]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an invalid pattern error for the rule at `index`.
    #[must_use]
    pub fn invalid_pattern(
        index: usize,
        pattern: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::InvalidPattern {
            index,
            pattern: pattern.into(),
            message: message.into(),
        })
    }

    /// Creates an error for a rule that has no response templates.
    #[must_use]
    pub fn empty_responses(index: usize, pattern: impl Into<String>) -> Self {
        Self::new(ErrorKind::EmptyResponses {
            index,
            pattern: pattern.into(),
        })
    }

    /// Creates a malformed script error.
    #[must_use]
    pub fn script_format(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ScriptFormat(message.into()))
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }
}

fn context_suffix(context: Option<&ErrorContext>) -> String {
    context.map(|c| format!(" ({c})")).unwrap_or_default()
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A rule pattern is not a valid regular expression.
    #[error("invalid pattern in rule {index} `{pattern}`: {message}")]
    InvalidPattern {
        /// Position of the rule in the table (0-indexed).
        index: usize,
        /// The pattern source.
        pattern: String,
        /// Message from the regex compiler.
        message: String,
    },

    /// A rule has nothing to say.
    #[error("rule {index} `{pattern}` has no responses")]
    EmptyResponses {
        /// Position of the rule in the table (0-indexed).
        index: usize,
        /// The pattern source.
        pattern: String,
    },

    /// A script file could not be decoded.
    #[error("malformed script: {0}")]
    ScriptFormat(String),

    /// Reading a file or the terminal failed.
    #[error("i/o error: {0}")]
    Io(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Script file the error came from.
    pub source: Option<String>,
    /// Rule index within the script.
    pub rule: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the rule index.
    #[must_use]
    pub fn with_rule(mut self, rule: usize) -> Self {
        self.rule = Some(rule);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.source, self.rule) {
            (Some(source), Some(rule)) => write!(f, "at {source}, rule {rule}"),
            (Some(source), None) => write!(f, "at {source}"),
            (None, Some(rule)) => write!(f, "at rule {rule}"),
            (None, None) => Ok(()),
        }
    }
}
