//! Hand classification error types.

use thiserror::Error;

/// Errors raised while building or classifying hands.
///
/// A pool that cannot form a hand type is not an error: the classifier
/// reports it as impossible and the next, weaker, hand type is tried.
#[derive(Debug, Error)]
pub enum HandError {
    /// The standard variant forbids the same card twice in one pool
    #[error("Duplicate cards: {0}")]
    DuplicateCards(String),

    /// A card code that isn't `<value><suit>`
    #[error("Invalid card: {0:?}")]
    InvalidCard(String),

    /// A Pai Gow hand must be split from exactly seven cards
    #[error("Wrong number of cards: expected {expected}, got {got}")]
    WrongCardCount { expected: usize, got: usize },

    /// A custom rule set that can't be used to classify hands
    #[error("Invalid rules: {0}")]
    InvalidRules(String),

    /// A rule set that couldn't be decoded
    #[error("Failed to decode rules: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type for hand operations
pub type Result<T> = std::result::Result<T, HandError>;
