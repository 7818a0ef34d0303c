//! Errors raised by the guess model and the solver

use thiserror::Error;

/// Recoverable failures of the core types
///
/// None of these leave a `Solver` partially mutated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("the word list is empty, so the word length cannot be derived")]
    EmptyDictionary,

    #[error("invalid feedback character '{0}' (expected c, i or m)")]
    InvalidMapCharacter(char),

    #[error("guess has {actual} letters, but words have {expected}")]
    GuessLengthMismatch { expected: usize, actual: usize },

    #[error("no guess '{0}' in the history")]
    GuessNotFound(String),

    #[error("a guess needs at least one letter")]
    EmptyGuess,
}
