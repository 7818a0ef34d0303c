//! Accumulated feedback as a consistency predicate
//!
//! Letter-level sets are built from the distinct letters across all guesses.
//! Position constraints are gathered over every (guess, position) pair.
//! Neither depends on the order the guesses were submitted in.

use crate::core::{Guess, Letter, LetterStatus, lowercase};
use rustc_hash::FxHashSet;

/// Everything the guess history says about the target word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    correct_chars: FxHashSet<char>,
    miss_chars: FxHashSet<char>,
    incorrect_chars: FxHashSet<char>,
    correct_positions: FxHashSet<(char, usize)>,
    miss_positions: FxHashSet<(char, usize)>,
}

impl Constraints {
    /// Derive constraints from a guess history
    ///
    /// A character marked `Incorrect` somewhere but `Correct` or `Miss`
    /// elsewhere is known to be in the word, so it is not excluded.
    #[must_use]
    pub fn from_guesses(guesses: &[Guess]) -> Self {
        let letters: FxHashSet<Letter> = guesses
            .iter()
            .flat_map(|guess| guess.letters().iter().copied())
            .collect();

        let chars_with = |status: LetterStatus| -> FxHashSet<char> {
            letters
                .iter()
                .filter(|letter| letter.status() == status)
                .map(|letter| letter.ch())
                .collect()
        };

        let correct_chars = chars_with(LetterStatus::Correct);
        let miss_chars = chars_with(LetterStatus::Miss);
        // Only computed once both sets above are complete
        let incorrect_chars = chars_with(LetterStatus::Incorrect)
            .into_iter()
            .filter(|ch| !correct_chars.contains(ch) && !miss_chars.contains(ch))
            .collect();

        let positions_with = |status: LetterStatus| -> FxHashSet<(char, usize)> {
            guesses
                .iter()
                .flat_map(|guess| guess.letters().iter().enumerate())
                .filter(|(_, letter)| letter.status() == status)
                .map(|(position, letter)| (letter.ch(), position))
                .collect()
        };

        Self {
            correct_positions: positions_with(LetterStatus::Correct),
            miss_positions: positions_with(LetterStatus::Miss),
            correct_chars,
            miss_chars,
            incorrect_chars,
        }
    }

    /// Check whether `word` is consistent with every constraint
    ///
    /// Matching is per character and case-insensitive. A word too short to
    /// have a character at a constrained position fails a `Correct` check
    /// there and passes a `Miss` check.
    ///
    /// # Examples
    /// ```
    /// use wordle_assistant::core::Guess;
    /// use wordle_assistant::solver::Constraints;
    ///
    /// let guesses = [Guess::decode("apple", "ciiim").unwrap()];
    /// let constraints = Constraints::from_guesses(&guesses);
    ///
    /// assert!(constraints.permits("ashen"));
    /// assert!(!constraints.permits("adobe")); // 'e' was missed at position 4
    /// ```
    #[must_use]
    pub fn permits(&self, word: &str) -> bool {
        let chars: Vec<char> = word.chars().map(lowercase).collect();

        !chars.iter().any(|ch| self.incorrect_chars.contains(ch))
            && self
                .correct_positions
                .iter()
                .all(|&(ch, position)| chars.get(position) == Some(&ch))
            && self
                .miss_positions
                .iter()
                .all(|&(ch, position)| chars.get(position) != Some(&ch))
            && self.miss_chars.iter().all(|ch| chars.contains(ch))
    }

    /// True when no guess has contributed anything yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.correct_chars.is_empty()
            && self.miss_chars.is_empty()
            && self.incorrect_chars.is_empty()
    }

    /// Characters known to be absent from the target, sorted
    #[must_use]
    pub fn excluded_chars(&self) -> Vec<char> {
        sorted(&self.incorrect_chars)
    }

    /// Characters known to be present in the target, sorted
    #[must_use]
    pub fn required_chars(&self) -> Vec<char> {
        let present: FxHashSet<char> = self
            .correct_chars
            .union(&self.miss_chars)
            .copied()
            .collect();
        sorted(&present)
    }

    /// Known `(char, position)` placements, sorted by position
    #[must_use]
    pub fn fixed_positions(&self) -> Vec<(char, usize)> {
        let mut fixed: Vec<_> = self.correct_positions.iter().copied().collect();
        fixed.sort_unstable_by_key(|&(ch, position)| (position, ch));
        fixed
    }
}

fn sorted(chars: &FxHashSet<char>) -> Vec<char> {
    let mut chars: Vec<char> = chars.iter().copied().collect();
    chars.sort_unstable();
    chars
}
