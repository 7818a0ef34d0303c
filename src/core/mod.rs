//! Core domain types for feedback
//!
//! Pure value types with no I/O: letters, guesses and the errors they raise.

mod error;
mod guess;
mod letter;

pub use error::Error;
pub use guess::Guess;
pub use letter::{Letter, LetterStatus};
pub(crate) use letter::lowercase;
