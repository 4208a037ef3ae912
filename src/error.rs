//! Error types for the flashcard app.

use thiserror::Error;

/// Result type alias using FlashcardError
pub type Result<T> = std::result::Result<T, FlashcardError>;

#[derive(Debug, Error)]
pub enum FlashcardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Deck file is not valid JSON or not an array of flashcards
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing or non-text field '{field}' in flashcard")]
    MissingField { field: &'static str },

    #[error("Invalid index {index} (deck has {len} flashcards)")]
    InvalidIndex { index: usize, len: usize },

    #[error("Invalid deck name '{0}'")]
    InvalidDeckName(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
