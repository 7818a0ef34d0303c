//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use log::{debug, warn};
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Lines are trimmed and lowercased; blank lines are skipped. Order and
/// duplicates are kept. Words whose length differs from the first word are
/// kept too, with a warning.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or is not valid UTF-8.
///
/// # Examples
/// ```no_run
/// use wordle_assistant::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/wordle_words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = words_from_text(&content);

    debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Split text into words, one per line
#[must_use]
pub fn words_from_text(text: &str) -> Vec<String> {
    let words: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect();

    check_uniform_length(&words);
    words
}

/// Convert an embedded string slice to owned words
///
/// # Examples
/// ```
/// use wordle_assistant::wordlists::loader::words_from_slice;
/// use wordle_assistant::wordlists::WORDLE;
///
/// let words = words_from_slice(WORDLE);
/// assert_eq!(words.len(), WORDLE.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}

fn check_uniform_length(words: &[String]) {
    let Some(first) = words.first() else {
        return;
    };
    let expected = first.chars().count();
    let odd = words
        .iter()
        .filter(|word| word.chars().count() != expected)
        .count();

    if odd > 0 {
        warn!("{odd} words differ in length from '{first}' ({expected} letters)");
    }
}
