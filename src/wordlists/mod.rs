//! Word lists for the supported games
//!
//! Embedded lists are compiled into the binary; custom lists are read from disk.

mod embedded;
pub mod loader;

pub use embedded::{TERMO, TERMO_COUNT, WORDLE, WORDLE_COUNT};

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// A game with a built-in word list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Game {
    /// The English original
    Wordle,
    /// The Portuguese variant
    Termo,
}

impl Game {
    /// All games, in menu order
    pub const ALL: [Self; 2] = [Self::Wordle, Self::Termo];

    /// Display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wordle => "Wordle",
            Self::Termo => "Termo",
        }
    }

    /// The embedded word list for this game
    #[must_use]
    pub const fn words(self) -> &'static [&'static str] {
        match self {
            Self::Wordle => WORDLE,
            Self::Termo => TERMO,
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Game {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "wordle" => Ok(Self::Wordle),
            "termo" | "termooo" => Ok(Self::Termo),
            other => Err(format!("Unknown game: {other}")),
        }
    }
}

/// Where a session's dictionary comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    Embedded(Game),
    File(PathBuf),
}

impl WordSource {
    /// Interpret a `--wordlist` value: a game name, or else a file path
    #[must_use]
    pub fn parse(value: &str) -> Self {
        value
            .parse::<Game>()
            .map_or_else(|_| Self::File(PathBuf::from(value)), Self::Embedded)
    }

    /// Read the words for this source
    ///
    /// # Errors
    /// Returns an I/O error if a file source cannot be read.
    pub fn load(&self) -> std::io::Result<Vec<String>> {
        match self {
            Self::Embedded(game) => Ok(loader::words_from_slice(game.words())),
            Self::File(path) => loader::load_from_file(path),
        }
    }
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded(game) => write!(f, "{game} (built-in)"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}
