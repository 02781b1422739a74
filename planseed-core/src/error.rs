//! Error types for planseed

use thiserror::Error;

/// Result type alias for planseed operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for planseed operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error (unreadable plan file, unwritable output)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

/// Kind of a line-level parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Bracketed priority tag present but not an integer in 1..=3
    InvalidPriority,
    /// Task without an open Feature, or Subtask without an open Task
    MissingAncestor,
    /// Heading keyword present with no title text
    EmptyTitle,
}

impl std::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPriority => write!(f, "invalid priority"),
            Self::MissingAncestor => write!(f, "missing ancestor"),
            Self::EmptyTitle => write!(f, "empty title"),
        }
    }
}

/// A parse error tied to one plan line.
///
/// Line-level errors are collected across the whole pass rather than aborting
/// it; the parser keeps emitting items for lines that parse cleanly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {kind}: {detail}")]
pub struct ParseError {
    /// 1-based line number in the plan file
    pub line: usize,
    /// Error kind
    pub kind: ParseErrorKind,
    /// Human-readable detail
    pub detail: String,
}

impl ParseError {
    pub fn new(line: usize, kind: ParseErrorKind, detail: impl Into<String>) -> Self {
        Self {
            line,
            kind,
            detail: detail.into(),
        }
    }
}
