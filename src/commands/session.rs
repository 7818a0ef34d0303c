//! Applying parsed input to a solver

use super::Input;
use crate::core::{Error, Guess};
use crate::solver::Solver;

/// What a successfully applied input did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Guessed(Guess),
    Removed(Guess),
    Undone(Guess),
    NothingToUndo,
    Cleared,
    Help,
    Quit,
}

/// Where the search stands after an outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    /// No dictionary word fits the feedback
    NoWordsLeft,
    /// Exactly one word fits
    Found(String),
    /// More than one word fits
    Narrowed(usize),
}

impl Progress {
    /// Classify a candidate list
    #[must_use]
    pub fn of(candidates: &[&str]) -> Self {
        match candidates {
            [] => Self::NoWordsLeft,
            [word] => Self::Found((*word).to_string()),
            _ => Self::Narrowed(candidates.len()),
        }
    }

    /// True when the session has nothing more to narrow
    #[must_use]
    pub const fn is_final(&self) -> bool {
        matches!(self, Self::NoWordsLeft | Self::Found(_))
    }
}

/// Apply one input to the solver
///
/// # Errors
/// Propagates the solver's error; the solver is unchanged in that case.
pub fn apply(solver: &mut Solver, input: Input) -> Result<Outcome, Error> {
    match input {
        Input::Guess(guess) => {
            solver.add_guess(guess.clone())?;
            Ok(Outcome::Guessed(guess))
        }
        Input::Remove(word) => solver.remove_guess_by_word(&word).map(Outcome::Removed),
        Input::Undo => Ok(solver.undo().map_or(Outcome::NothingToUndo, Outcome::Undone)),
        Input::Clear => {
            solver.clear_guesses();
            Ok(Outcome::Cleared)
        }
        Input::Help => Ok(Outcome::Help),
        Input::Quit => Ok(Outcome::Quit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::parse_input;

    fn solver() -> Solver {
        Solver::new(["apple", "angle", "ankle", "adobe", "ashen"]).unwrap()
    }

    fn run(solver: &mut Solver, line: &str) -> Result<Outcome, Error> {
        apply(solver, parse_input(line).unwrap())
    }

    #[test]
    fn guess_then_progress() {
        let mut solver = solver();

        let outcome = run(&mut solver, "apple-ciiim").unwrap();

        assert!(matches!(outcome, Outcome::Guessed(ref g) if g.word() == "apple"));
        assert_eq!(Progress::of(&solver.solve()), Progress::Found("ashen".to_string()));
    }

    #[test]
    fn wrong_length_guess_is_an_error() {
        let mut solver = solver();
        assert_eq!(
            run(&mut solver, "apples-ciiiim"),
            Err(Error::GuessLengthMismatch {
                expected: 5,
                actual: 6
            })
        );
        assert!(solver.guesses().is_empty());
    }

    #[test]
    fn remove_undo_and_clear() {
        let mut solver = solver();
        run(&mut solver, "apple-ciiim").unwrap();
        run(&mut solver, "angle-ciiic").unwrap();

        assert!(matches!(run(&mut solver, "remove apple"), Ok(Outcome::Removed(_))));
        assert_eq!(
            run(&mut solver, "remove apple"),
            Err(Error::GuessNotFound("apple".to_string()))
        );
        assert!(matches!(run(&mut solver, "undo"), Ok(Outcome::Undone(_))));
        assert_eq!(run(&mut solver, "undo"), Ok(Outcome::NothingToUndo));

        run(&mut solver, "adobe-ciiii").unwrap();
        assert_eq!(run(&mut solver, "clear"), Ok(Outcome::Cleared));
        assert_eq!(solver.count_candidates(), 5);
    }

    #[test]
    fn progress_classification() {
        assert_eq!(Progress::of(&[]), Progress::NoWordsLeft);
        assert_eq!(Progress::of(&["crane"]), Progress::Found("crane".to_string()));
        assert_eq!(Progress::of(&["crane", "crane"]), Progress::Narrowed(2));
        assert!(Progress::NoWordsLeft.is_final());
        assert!(!Progress::Narrowed(3).is_final());
    }
}
