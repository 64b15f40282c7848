//! Error handling and diagnostics for the lexer
//!
//! Token classification itself never fails: an unrecognised token is the
//! regular `Unknown` category. The errors here come from building transition
//! tables, from configuration, and from the input shell.

use thiserror::Error;

pub mod diagnostic;

pub use diagnostic::Diagnostic;

use crate::lexer::{CharClass, State};

/// Result type alias for lexer operations
pub type LexResult<T> = Result<T, LexError>;

/// Main error type for the lexer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A transition table is missing the row for a state
    #[error("no transitions defined for state {state}")]
    IncompleteTable { state: State },

    /// A transition table defines the same state twice
    #[error("transitions for state {state} defined more than once")]
    DuplicateRow { state: State },

    /// The Error state leaves itself on some character class
    #[error("error state must be absorbing, but {class} leads to {target}")]
    ErrorNotAbsorbing { class: CharClass, target: State },

    /// An input line is longer than the configured limit
    #[error("line is {length} characters long, limit is {limit}")]
    LineTooLong { length: usize, limit: usize },

    /// A variant name that doesn't name any table
    #[error("unknown variant '{name}', expected 'baseline', 'integer' or 'float'")]
    UnknownVariant { name: String },

    /// Bad command line usage
    #[error("{message}")]
    Usage { message: String },

    /// Reading input failed
    #[error("{message}")]
    Io { message: String },
}

impl LexError {
    /// Create a new usage error
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    /// Create a new I/O error with context
    pub fn io(context: impl Into<String>, err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{}: {}", context.into(), err),
        }
    }

    /// Get the error kind as a string
    pub fn kind(&self) -> &str {
        match self {
            Self::IncompleteTable { .. }
            | Self::DuplicateRow { .. }
            | Self::ErrorNotAbsorbing { .. } => "Table Error",
            Self::LineTooLong { .. } => "Input Error",
            Self::UnknownVariant { .. } | Self::Usage { .. } => "Usage Error",
            Self::Io { .. } => "I/O Error",
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Column (1-based) where the error starts in the offending line, if any
    pub fn column(&self) -> Option<usize> {
        match self {
            Self::LineTooLong { limit, .. } => Some(limit + 1),
            _ => None,
        }
    }
}
