//! Error types for flashcard-core.

use thiserror::Error;

/// Result type alias using FlashcardError.
pub type Result<T> = std::result::Result<T, FlashcardError>;

/// Errors raised by the card registry, the record format and the session.
#[derive(Debug, Error)]
pub enum FlashcardError {
    #[error("the card \"{0}\" already exists")]
    DuplicateTerm(String),

    #[error("the definition \"{0}\" already exists")]
    DuplicateDefinition(String),

    #[error("there is no such card: \"{0}\"")]
    NotFound(String),

    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("\"{0}\" is not a valid number")]
    InvalidNumber(String),

    #[error("end of input")]
    EndOfInput,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
