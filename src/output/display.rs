//! Display functions for the prompt session
//!
//! Everything writes to a caller-supplied `Write` so the session can be
//! driven against a buffer.

use super::formatters::{candidate_list, gray, pluralize, render_guess, status_legend};
use crate::commands::{InputError, Outcome, Progress};
use crate::core::{Error, Guess};
use colored::Colorize;
use std::io::{self, Write};

/// Print the banner and the guess format instructions
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_welcome(out: &mut impl Write, word_length: usize) -> io::Result<()> {
    writeln!(out, "{}", "Welcome to the Wordle Assistant!".green().bold())?;
    writeln!(out, "To guess, use the following format:")?;
    writeln!(out, "{}", status_legend())?;
    if let Ok(example) = Guess::decode("apple", "ciiim") {
        writeln!(
            out,
            "So, for example, if the word is '{}', you should write:",
            render_guess(&example)
        )?;
    }
    writeln!(out, "→ apple-ciiim")?;
    writeln!(
        out,
        "{}",
        gray(&format!(
            "Words have {word_length} letters. Type 'help' for commands."
        ))
    )?;
    writeln!(out)
}

/// Print the list of session commands
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  <word>-<feedback>  submit a guess, e.g. apple-ciiim")?;
    writeln!(out, "  undo               forget the last guess")?;
    writeln!(out, "  remove <word>      forget the guess of <word>")?;
    writeln!(out, "  clear              forget every guess")?;
    writeln!(out, "  quit               leave")
}

/// Print what an applied input did
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_outcome(out: &mut impl Write, outcome: &Outcome) -> io::Result<()> {
    match outcome {
        Outcome::Guessed(guess) => writeln!(out, "→ {}", render_guess(guess)),
        Outcome::Removed(guess) => writeln!(out, "Removed {}", render_guess(guess)),
        Outcome::Undone(guess) => writeln!(out, "Undid {}", render_guess(guess)),
        Outcome::NothingToUndo => writeln!(out, "{}", "Nothing to undo.".yellow()),
        Outcome::Cleared => writeln!(out, "All guesses cleared."),
        Outcome::Help => print_help(out),
        Outcome::Quit => Ok(()),
    }
}

/// Print how many candidates remain, and which
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_progress(out: &mut impl Write, candidates: &[&str], limit: usize) -> io::Result<()> {
    match Progress::of(candidates) {
        Progress::NoWordsLeft => {
            writeln!(out, "{}", "No words left. Something went wrong.".red())
        }
        Progress::Found(word) => writeln!(out, "→ Final word: {}", word.green().bold()),
        Progress::Narrowed(count) => writeln!(
            out,
            "{} left. {}",
            pluralize(count, "word"),
            gray(&format!("They are: {}", candidate_list(candidates, limit)))
        ),
    }
}

/// Print a rejected input with a corrective hint
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_rejection(out: &mut impl Write, error: &InputError, word_length: usize) -> io::Result<()> {
    writeln!(out, "{} {}", "Invalid input:".red().bold(), error)?;
    writeln!(out, "  {}", gray(&error_hint(error, word_length)))
}

/// A one-line suggestion for fixing a rejected input
#[must_use]
pub fn error_hint(error: &InputError, word_length: usize) -> String {
    match error {
        InputError::MissingSeparator => {
            "Guesses must be in the <word>-<feedback> format, e.g. apple-ciiim.".to_string()
        }
        InputError::UnknownCommand(_) | InputError::MissingArgument(_) => {
            "Type 'help' to list the commands.".to_string()
        }
        InputError::Invalid(Error::InvalidMapCharacter(_)) => {
            "Feedback may only use c (correct), i (incorrect) and m (missed).".to_string()
        }
        InputError::Invalid(Error::GuessLengthMismatch { .. } | Error::EmptyGuess) => format!(
            "Guesses must have the same length as the possible words ({word_length} characters)."
        ),
        InputError::Invalid(Error::GuessNotFound(_)) => {
            "Only submitted guesses can be removed.".to_string()
        }
        InputError::Invalid(Error::EmptyDictionary) => "Choose a non-empty word list.".to_string(),
    }
}
