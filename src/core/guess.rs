//! A submitted guess and its feedback
//!
//! Guesses are decoded from the word that was played and a parallel feedback
//! map such as `"ciiim"`, one map character per letter.

use super::{Error, Letter, LetterStatus};
use std::fmt;

/// One submitted word with per-position feedback
///
/// Always holds at least one letter. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Guess {
    letters: Vec<Letter>,
}

impl Guess {
    /// Decode a guess from the played word and its feedback map
    ///
    /// Positions are paired up to the shorter of the two inputs. A length
    /// disagreement between them is left for the solver to report, since the
    /// paired guess will not match the word length.
    ///
    /// # Errors
    /// - `Error::InvalidMapCharacter` if a map character is not `c`, `i` or `m`
    /// - `Error::EmptyGuess` if no positions pair up
    ///
    /// # Examples
    /// ```
    /// use wordle_assistant::core::{Guess, LetterStatus};
    ///
    /// let guess = Guess::decode("Apple", "CIIIM").unwrap();
    /// assert_eq!(guess.word(), "apple");
    /// assert_eq!(guess.letters()[4].status(), LetterStatus::Miss);
    /// ```
    pub fn decode(word: &str, map: &str) -> Result<Self, Error> {
        let letters = word
            .chars()
            .zip(map.chars())
            .map(|(ch, code)| LetterStatus::from_map_char(code).map(|status| Letter::new(ch, status)))
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_letters(letters)
    }

    /// Build a guess from already-decoded letters
    ///
    /// # Errors
    /// Returns `Error::EmptyGuess` if `letters` is empty.
    pub fn from_letters(letters: Vec<Letter>) -> Result<Self, Error> {
        if letters.is_empty() {
            return Err(Error::EmptyGuess);
        }
        Ok(Self { letters })
    }

    /// The guessed word, lowercased
    #[must_use]
    pub fn word(&self) -> String {
        self.letters.iter().map(|letter| letter.ch()).collect()
    }

    /// The feedback map, lowercased (e.g. `"ciiim"`)
    #[must_use]
    pub fn map(&self) -> String {
        self.letters
            .iter()
            .map(|letter| letter.status().map_char())
            .collect()
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// True when there are no letters
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.word())
    }
}
