//! One-shot filtering for scripts

use super::{InputError, parse_guess};
use crate::solver::Solver;

/// Apply every encoded guess in order and return the surviving words
///
/// Stops at the first guess that fails to parse or does not fit.
///
/// # Errors
///
/// Returns the `InputError` of the first rejected guess.
///
/// # Examples
/// ```
/// use wordle_assistant::commands::run_filter;
/// use wordle_assistant::solver::Solver;
///
/// let mut solver = Solver::new(["angle", "ankle", "ashen"]).unwrap();
/// let words = run_filter(&mut solver, &["apple-ciiim"]).unwrap();
/// assert_eq!(words, ["ashen"]);
/// ```
pub fn run_filter<S: AsRef<str>>(
    solver: &mut Solver,
    encoded: &[S],
) -> Result<Vec<String>, InputError> {
    for text in encoded {
        solver.add_guess(parse_guess(text.as_ref())?)?;
    }
    Ok(solver.solve().into_iter().map(String::from).collect())
}
