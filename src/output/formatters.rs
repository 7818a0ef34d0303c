//! Formatting utilities for terminal output

use crate::core::{Guess, Letter, LetterStatus};
use colored::{ColoredString, Colorize};

/// RGB of the muted gray used for incorrect letters and long lists
pub const GRAY: (u8, u8, u8) = (64, 64, 72);

/// Paint text in the muted gray
#[must_use]
pub fn gray(text: &str) -> ColoredString {
    text.truecolor(GRAY.0, GRAY.1, GRAY.2)
}

/// Paint text in the color associated with a feedback status
#[must_use]
pub fn paint(text: &str, status: LetterStatus) -> ColoredString {
    match status {
        LetterStatus::Correct => text.green().bold(),
        LetterStatus::Incorrect => gray(text),
        LetterStatus::Miss => text.yellow().bold(),
    }
}

/// One letter, uppercased and colored by its status
#[must_use]
pub fn letter_tile(letter: Letter) -> ColoredString {
    paint(&letter.ch().to_uppercase().to_string(), letter.status())
}

/// A whole guess as colored letters
#[must_use]
pub fn render_guess(guess: &Guess) -> String {
    guess
        .letters()
        .iter()
        .map(|&letter| letter_tile(letter).to_string())
        .collect()
}

/// The `c`/`i`/`m` legend, each entry in its own color
#[must_use]
pub fn status_legend() -> String {
    LetterStatus::ALL
        .iter()
        .map(|&status| {
            format!(
                "{}: {} letter",
                paint(&status.map_char().to_string(), status),
                paint(&status.to_string(), status)
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// `"1 word"` / `"3 words"`
#[must_use]
pub fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Comma-separated candidates, truncated after `limit` (0 means no limit)
#[must_use]
pub fn candidate_list(candidates: &[&str], limit: usize) -> String {
    if limit == 0 || candidates.len() <= limit {
        return candidates.join(", ");
    }

    format!(
        "{} and {} more",
        candidates[..limit].join(", "),
        candidates.len() - limit
    )
}
