//! Line input grammar shared by the prompt and the TUI
//!
//! A line is either a guess in `<word>-<feedback>` form (e.g. `apple-ciiim`)
//! or one of a few session commands.

use crate::core::{Error, Guess};
use thiserror::Error;

/// One parsed line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Guess(Guess),
    Undo,
    Remove(String),
    Clear,
    Help,
    Quit,
}

/// Input that could not be turned into an `Input`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("guesses must look like <word>-<feedback>")]
    MissingSeparator,

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("'{0}' needs a word")]
    MissingArgument(&'static str),

    #[error(transparent)]
    Invalid(#[from] Error),
}

/// Parse a guess in `<word>-<feedback>` form
///
/// Splits on the first `-`; whitespace around either half is ignored.
///
/// # Errors
/// - `InputError::MissingSeparator` if there is no `-`
/// - `InputError::Invalid` if the feedback does not decode
///
/// # Examples
/// ```
/// use wordle_assistant::commands::parse_guess;
///
/// let guess = parse_guess("apple-ciiim").unwrap();
/// assert_eq!(guess.word(), "apple");
/// ```
pub fn parse_guess(text: &str) -> Result<Guess, InputError> {
    let (word, map) = text
        .trim()
        .split_once('-')
        .ok_or(InputError::MissingSeparator)?;
    Ok(Guess::decode(word.trim(), map.trim())?)
}

/// Parse one line of input
///
/// # Errors
/// Returns an `InputError` describing why the line is not a guess or command.
pub fn parse_input(line: &str) -> Result<Input, InputError> {
    let line = line.trim();
    if line.contains('-') {
        return parse_guess(line).map(Input::Guess);
    }

    let mut parts = line.split_whitespace();
    let command = parts.next().map(str::to_lowercase).unwrap_or_default();
    let argument = parts.next();

    match (command.as_str(), argument) {
        ("quit" | "q" | "exit", None) => Ok(Input::Quit),
        ("undo" | "u", None) => Ok(Input::Undo),
        ("clear" | "reset", None) => Ok(Input::Clear),
        ("help" | "h" | "?", None) => Ok(Input::Help),
        ("remove" | "rm", Some(word)) => Ok(Input::Remove(word.to_string())),
        ("remove" | "rm", None) => Err(InputError::MissingArgument("remove")),
        (_, None) => Err(InputError::MissingSeparator),
        (other, Some(_)) => Err(InputError::UnknownCommand(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_splits_on_first_hyphen() {
        let guess = parse_guess(" Apple - CIIIM ").unwrap();
        assert_eq!(guess.word(), "apple");
        assert_eq!(guess.map(), "ciiim");
    }

    #[test]
    fn extra_hyphen_is_a_bad_map_char() {
        assert_eq!(
            parse_guess("apple-cii-m"),
            Err(InputError::Invalid(Error::InvalidMapCharacter('-')))
        );
    }

    #[test]
    fn missing_separator() {
        assert_eq!(parse_guess("apple"), Err(InputError::MissingSeparator));
        assert_eq!(parse_input("apple"), Err(InputError::MissingSeparator));
        assert_eq!(parse_input(""), Err(InputError::MissingSeparator));
    }

    #[test]
    fn empty_halves_are_empty_guesses() {
        assert_eq!(
            parse_input("-"),
            Err(InputError::Invalid(Error::EmptyGuess))
        );
        assert_eq!(
            parse_input("apple-"),
            Err(InputError::Invalid(Error::EmptyGuess))
        );
    }

    #[test]
    fn commands() {
        assert_eq!(parse_input("quit"), Ok(Input::Quit));
        assert_eq!(parse_input(" Q "), Ok(Input::Quit));
        assert_eq!(parse_input("undo"), Ok(Input::Undo));
        assert_eq!(parse_input("clear"), Ok(Input::Clear));
        assert_eq!(parse_input("?"), Ok(Input::Help));
        assert_eq!(
            parse_input("remove Crane"),
            Ok(Input::Remove("Crane".to_string()))
        );
    }

    #[test]
    fn command_errors() {
        assert_eq!(
            parse_input("remove"),
            Err(InputError::MissingArgument("remove"))
        );
        assert_eq!(
            parse_input("delete crane"),
            Err(InputError::UnknownCommand("delete".to_string()))
        );
    }
}
