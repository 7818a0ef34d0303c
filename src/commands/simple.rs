//! Simple interactive CLI mode
//!
//! Line-based prompt session without the TUI.

use super::{InputError, Outcome, Progress, apply, parse_input};
use crate::output::{print_outcome, print_progress, print_rejection, print_welcome};
use crate::solver::Solver;
use crate::wordlists::Game;
use log::debug;
use std::io::{self, BufRead, Write};

/// Run the prompt session until the word is found, the user quits, or input ends
///
/// Bad input is reported with a hint and the prompt repeats. Showing more
/// than `limit` candidates is abbreviated (0 shows all).
///
/// # Errors
///
/// Returns an error only for I/O failures on `input` or `out`.
pub fn run_simple<R: BufRead, W: Write>(
    solver: &mut Solver,
    mut input: R,
    mut out: W,
    limit: usize,
) -> io::Result<()> {
    print_welcome(&mut out, solver.word_length())?;

    loop {
        let Some(line) = prompt(
            &mut input,
            &mut out,
            &format!("[Guess #{}] ", solver.guesses().len() + 1),
        )?
        else {
            debug!("input ended, leaving prompt session");
            return Ok(());
        };
        if line.is_empty() {
            continue;
        }

        let outcome = match parse_input(&line)
            .and_then(|parsed| apply(solver, parsed).map_err(InputError::from))
        {
            Ok(outcome) => outcome,
            Err(error) => {
                print_rejection(&mut out, &error, solver.word_length())?;
                continue;
            }
        };

        print_outcome(&mut out, &outcome)?;
        match &outcome {
            Outcome::Quit => return Ok(()),
            Outcome::Help | Outcome::NothingToUndo => {}
            Outcome::Guessed(_) | Outcome::Removed(_) | Outcome::Undone(_) | Outcome::Cleared => {
                let candidates = solver.solve();
                print_progress(&mut out, &candidates, limit)?;

                match Progress::of(&candidates) {
                    Progress::Found(_) if matches!(outcome, Outcome::Guessed(_)) => return Ok(()),
                    Progress::NoWordsLeft => {
                        writeln!(out, "Type 'undo' to take back the last guess.")?;
                    }
                    _ => {}
                }
            }
        }
    }
}

/// Ask which game is being played
///
/// Accepts the option number or the game's name.
///
/// # Errors
///
/// Returns an I/O error, or `UnexpectedEof` if input ends before a choice.
pub fn choose_game<R: BufRead, W: Write>(mut input: R, mut out: W) -> io::Result<Game> {
    writeln!(out, "Which game are you playing?")?;
    for (i, game) in Game::ALL.iter().enumerate() {
        writeln!(out, "  {}. {game}", i + 1)?;
    }

    loop {
        let Some(answer) = prompt(&mut input, &mut out, "> ")? else {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no game chosen",
            ));
        };

        let chosen = answer
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| Game::ALL.get(i).copied())
            .or_else(|| answer.parse::<Game>().ok());

        match chosen {
            Some(game) => return Ok(game),
            None => writeln!(out, "Please pick 1-{}.", Game::ALL.len())?,
        }
    }
}

/// Print a prompt and read one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> io::Result<Option<String>> {
    write!(out, "{text}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
