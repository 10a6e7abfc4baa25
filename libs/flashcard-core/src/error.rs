//! Error types for flashcard-core.

use thiserror::Error;

/// Result type alias using WordInfoError.
pub type Result<T> = std::result::Result<T, WordInfoError>;

/// Errors raised when a word gloss does not fit the word it describes.
#[derive(Debug, Error)]
pub enum WordInfoError {
    #[error("characters for {word} do not match: expected {expected}, got {returned}")]
    CharacterMismatch {
        word: String,
        expected: String,
        returned: String,
    },
}
