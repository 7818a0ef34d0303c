//! Per-letter feedback
//!
//! A guessed letter paired with the feedback the game gave for it.

use super::Error;
use std::fmt;

/// Feedback for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterStatus {
    /// Letter is at this exact position in the target word
    Correct,
    /// Letter does not appear in the target word
    Incorrect,
    /// Letter appears in the target word, but not at this position
    Miss,
}

impl LetterStatus {
    /// All statuses, in map-character order (`c`, `i`, `m`)
    pub const ALL: [Self; 3] = [Self::Correct, Self::Incorrect, Self::Miss];

    /// Decode a feedback map character (`c`, `i` or `m`, any case)
    ///
    /// # Errors
    /// Returns `Error::InvalidMapCharacter` with the character as given
    /// for anything else.
    ///
    /// # Examples
    /// ```
    /// use wordle_assistant::core::LetterStatus;
    ///
    /// assert_eq!(LetterStatus::from_map_char('C').unwrap(), LetterStatus::Correct);
    /// assert!(LetterStatus::from_map_char('x').is_err());
    /// ```
    pub fn from_map_char(ch: char) -> Result<Self, Error> {
        match ch.to_ascii_lowercase() {
            'c' => Ok(Self::Correct),
            'i' => Ok(Self::Incorrect),
            'm' => Ok(Self::Miss),
            _ => Err(Error::InvalidMapCharacter(ch)),
        }
    }

    /// The lowercase map character for this status
    #[must_use]
    pub const fn map_char(self) -> char {
        match self {
            Self::Correct => 'c',
            Self::Incorrect => 'i',
            Self::Miss => 'm',
        }
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Correct => "correct",
            Self::Incorrect => "incorrect",
            Self::Miss => "missed",
        };
        f.write_str(name)
    }
}

/// A guessed character and its feedback
///
/// The character is normalized to lowercase on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Letter {
    ch: char,
    status: LetterStatus,
}

impl Letter {
    #[must_use]
    pub fn new(ch: char, status: LetterStatus) -> Self {
        Self {
            ch: lowercase(ch),
            status,
        }
    }

    #[inline]
    #[must_use]
    pub const fn ch(self) -> char {
        self.ch
    }

    #[inline]
    #[must_use]
    pub const fn status(self) -> LetterStatus {
        self.status
    }
}

/// Single-character lowercase mapping
///
/// Characters whose lowercase form spans several code points keep the first one.
pub(crate) fn lowercase(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_chars_decode_case_insensitively() {
        for (upper, lower, status) in [
            ('C', 'c', LetterStatus::Correct),
            ('I', 'i', LetterStatus::Incorrect),
            ('M', 'm', LetterStatus::Miss),
        ] {
            assert_eq!(LetterStatus::from_map_char(upper), Ok(status));
            assert_eq!(LetterStatus::from_map_char(lower), Ok(status));
            assert_eq!(status.map_char(), lower);
        }
    }

    #[test]
    fn unknown_map_char_is_reported_verbatim() {
        assert_eq!(
            LetterStatus::from_map_char('X'),
            Err(Error::InvalidMapCharacter('X'))
        );
        assert_eq!(
            LetterStatus::from_map_char('-'),
            Err(Error::InvalidMapCharacter('-'))
        );
    }

    #[test]
    fn letter_is_lowercased() {
        let letter = Letter::new('A', LetterStatus::Miss);
        assert_eq!(letter.ch(), 'a');
        assert_eq!(letter.status(), LetterStatus::Miss);
        assert_eq!(letter, Letter::new('a', LetterStatus::Miss));
    }

    #[test]
    fn letter_equality_includes_status() {
        assert_ne!(
            Letter::new('e', LetterStatus::Miss),
            Letter::new('e', LetterStatus::Correct)
        );
    }

    #[test]
    fn non_ascii_letters_lowercase() {
        assert_eq!(Letter::new('Ç', LetterStatus::Correct).ch(), 'ç');
    }
}
