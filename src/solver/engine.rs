//! Main solver interface

use super::Constraints;
use crate::core::{Error, Guess, lowercase};
use log::{debug, trace};

/// Candidate dictionary plus the guess history of one session
///
/// The dictionary is fixed at construction. Candidates are recomputed from the
/// full history on every `solve` call; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct Solver {
    words: Vec<String>,
    word_length: usize,
    guesses: Vec<Guess>,
}

impl Solver {
    /// Create a solver over the given words, in order
    ///
    /// The word length is the character count of the first word.
    ///
    /// # Errors
    /// Returns `Error::EmptyDictionary` if `words` yields nothing.
    ///
    /// # Examples
    /// ```
    /// use wordle_assistant::core::Guess;
    /// use wordle_assistant::solver::Solver;
    ///
    /// let mut solver = Solver::new(["apple", "ashen", "adobe"]).unwrap();
    /// solver.add_guess(Guess::decode("apple", "ciiim").unwrap()).unwrap();
    /// assert_eq!(solver.solve(), ["ashen"]);
    /// ```
    pub fn new<I, S>(words: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_guesses(words, Vec::new())
    }

    /// Create a solver with a pre-filled guess history
    ///
    /// # Errors
    /// - `Error::EmptyDictionary` if `words` yields nothing
    /// - `Error::GuessLengthMismatch` for the first guess of the wrong length
    pub fn with_guesses<I, S>(words: I, guesses: Vec<Guess>) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        let word_length = words
            .first()
            .ok_or(Error::EmptyDictionary)?
            .chars()
            .count();

        let solver = Self {
            words,
            word_length,
            guesses: Vec::new(),
        };
        for guess in &guesses {
            solver.validate(guess)?;
        }

        debug!(
            "solver ready: {} words of length {}, {} initial guesses",
            solver.words.len(),
            word_length,
            guesses.len()
        );
        Ok(Self { guesses, ..solver })
    }

    /// Character count every guess must have
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// The full dictionary, in original order
    #[inline]
    #[must_use]
    pub fn dictionary(&self) -> &[String] {
        &self.words
    }

    /// Guess history in submission order
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    /// Append a guess to the history
    ///
    /// # Errors
    /// Returns `Error::GuessLengthMismatch` if the guess length differs from
    /// the word length. The history is left unchanged.
    pub fn add_guess(&mut self, guess: Guess) -> Result<(), Error> {
        self.validate(&guess)?;
        debug!("guess #{} added: {}-{}", self.guesses.len() + 1, guess, guess.map());
        self.guesses.push(guess);
        Ok(())
    }

    /// Remove the first history entry equal to `guess`
    ///
    /// # Errors
    /// Returns `Error::GuessNotFound` if no entry matches.
    pub fn remove_guess(&mut self, guess: &Guess) -> Result<Guess, Error> {
        let index = self
            .guesses
            .iter()
            .position(|g| g == guess)
            .ok_or_else(|| Error::GuessNotFound(guess.word()))?;
        Ok(self.remove_at(index))
    }

    /// Remove the first history entry whose word is `word` (case-insensitive)
    ///
    /// # Errors
    /// Returns `Error::GuessNotFound` if no entry matches.
    pub fn remove_guess_by_word(&mut self, word: &str) -> Result<Guess, Error> {
        let word: String = word.chars().map(lowercase).collect();
        let index = self
            .guesses
            .iter()
            .position(|g| g.word() == word)
            .ok_or(Error::GuessNotFound(word))?;
        Ok(self.remove_at(index))
    }

    /// Remove and return the most recent guess, if any
    pub fn undo(&mut self) -> Option<Guess> {
        let guess = self.guesses.pop();
        if let Some(ref guess) = guess {
            debug!("guess undone: {guess}");
        }
        guess
    }

    /// Empty the guess history
    pub fn clear_guesses(&mut self) {
        debug!("clearing {} guesses", self.guesses.len());
        self.guesses.clear();
    }

    /// Constraints implied by the current history
    #[must_use]
    pub fn constraints(&self) -> Constraints {
        Constraints::from_guesses(&self.guesses)
    }

    /// Dictionary words consistent with every guess so far
    ///
    /// Keeps dictionary order and duplicates.
    #[must_use]
    pub fn solve(&self) -> Vec<&str> {
        let constraints = self.constraints();
        let candidates: Vec<&str> = self
            .words
            .iter()
            .map(String::as_str)
            .filter(|word| constraints.permits(word))
            .collect();

        trace!(
            "solve: {} of {} words remain after {} guesses",
            candidates.len(),
            self.words.len(),
            self.guesses.len()
        );
        candidates
    }

    /// Number of words `solve` would return
    #[must_use]
    pub fn count_candidates(&self) -> usize {
        let constraints = self.constraints();
        self.words
            .iter()
            .filter(|word| constraints.permits(word))
            .count()
    }

    fn remove_at(&mut self, index: usize) -> Guess {
        let guess = self.guesses.remove(index);
        debug!("guess removed: {guess}");
        guess
    }

    fn validate(&self, guess: &Guess) -> Result<(), Error> {
        if guess.len() == self.word_length {
            Ok(())
        } else {
            Err(Error::GuessLengthMismatch {
                expected: self.word_length,
                actual: guess.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn guess(word: &str, map: &str) -> Guess {
        Guess::decode(word, map).unwrap()
    }

    const APPLES: [&str; 4] = ["apple", "angle", "ankle", "adobe"];

    #[test]
    fn empty_dictionary_fails() {
        assert_eq!(
            Solver::new(Vec::<String>::new()).unwrap_err(),
            Error::EmptyDictionary
        );
    }

    #[test]
    fn word_length_from_first_word() {
        let solver = Solver::new(["crane", "ab"]).unwrap();
        assert_eq!(solver.word_length(), 5);

        let solver = Solver::new(["termo", "ação"]).unwrap();
        assert_eq!(solver.word_length(), 5);

        let solver = Solver::new(["ação"]).unwrap();
        assert_eq!(solver.word_length(), 4);
    }

    #[test]
    fn no_guesses_returns_whole_dictionary() {
        let solver = Solver::new(["b", "a", "b"]).unwrap();
        assert_eq!(solver.solve(), ["b", "a", "b"]);
    }

    #[test]
    fn worked_example() {
        let mut solver = Solver::new(APPLES).unwrap();
        solver.add_guess(guess("apple", "ciiim")).unwrap();

        // angle and ankle contain 'l'; adobe has 'e' where it was missed
        assert!(solver.solve().is_empty());
        assert_eq!(solver.count_candidates(), 0);
    }

    #[test]
    fn worked_example_with_survivor() {
        let mut words = APPLES.to_vec();
        words.push("ashen");
        let mut solver = Solver::new(words).unwrap();
        solver.add_guess(guess("apple", "ciiim")).unwrap();

        assert_eq!(solver.solve(), ["ashen"]);
    }

    #[test]
    fn incorrect_then_correct_keeps_letter() {
        let mut solver = Solver::new(["spell", "smell", "shell", "swell", "spill"]).unwrap();
        solver.add_guess(guess("llama", "iiiii")).unwrap();
        solver.add_guess(guess("spell", "ciccc")).unwrap();

        assert_eq!(solver.solve(), ["shell", "swell"]);
    }

    #[test]
    fn mismatched_guess_is_rejected_without_change() {
        let mut solver = Solver::new(APPLES).unwrap();
        solver.add_guess(guess("adobe", "ciiii")).unwrap();
        let before: Vec<String> = solver.solve().into_iter().map(String::from).collect();

        let err = solver.add_guess(guess("apples", "ciiiim")).unwrap_err();

        assert_eq!(
            err,
            Error::GuessLengthMismatch {
                expected: 5,
                actual: 6
            }
        );
        assert_eq!(solver.guesses().len(), 1);
        assert_eq!(solver.solve(), before);
    }

    #[test]
    fn with_guesses_validates_each() {
        let ok = Solver::with_guesses(APPLES, vec![guess("apple", "ciiim")]).unwrap();
        assert_eq!(ok.guesses().len(), 1);

        let err = Solver::with_guesses(
            APPLES,
            vec![guess("apple", "ciiim"), guess("app", "cii")],
        )
        .unwrap_err();
        assert_eq!(
            err,
            Error::GuessLengthMismatch {
                expected: 5,
                actual: 3
            }
        );

        assert_eq!(
            Solver::with_guesses(Vec::<&str>::new(), vec![guess("a", "c")]).unwrap_err(),
            Error::EmptyDictionary
        );
    }

    #[test]
    fn remove_by_word_removes_one_duplicate() {
        let mut solver = Solver::new(APPLES).unwrap();
        solver.add_guess(guess("angle", "ciiic")).unwrap();
        solver.add_guess(guess("adobe", "ciiii")).unwrap();
        solver.add_guess(guess("angle", "ciiic")).unwrap();

        let removed = solver.remove_guess_by_word("ANGLE").unwrap();

        assert_eq!(removed.word(), "angle");
        let words: Vec<String> = solver.guesses().iter().map(Guess::word).collect();
        assert_eq!(words, ["adobe", "angle"]);
    }

    #[test]
    fn remove_missing_word_fails() {
        let mut solver = Solver::new(APPLES).unwrap();
        solver.add_guess(guess("angle", "ciiic")).unwrap();

        assert_eq!(
            solver.remove_guess_by_word("adobe").unwrap_err(),
            Error::GuessNotFound("adobe".to_string())
        );
        assert_eq!(solver.guesses().len(), 1);
    }

    #[test]
    fn remove_by_value_matches_feedback_too() {
        let mut solver = Solver::new(APPLES).unwrap();
        solver.add_guess(guess("angle", "ciiic")).unwrap();

        assert!(solver.remove_guess(&guess("angle", "iiiic")).is_err());
        assert!(solver.remove_guess(&guess("angle", "ciiic")).is_ok());
        assert!(solver.guesses().is_empty());
    }

    #[test]
    fn undo_pops_latest() {
        let mut solver = Solver::new(APPLES).unwrap();
        assert!(solver.undo().is_none());

        solver.add_guess(guess("angle", "ciiic")).unwrap();
        solver.add_guess(guess("adobe", "ciiii")).unwrap();

        assert_eq!(solver.undo().map(|g| g.word()), Some("adobe".to_string()));
        assert_eq!(solver.guesses().len(), 1);
    }

    #[test]
    fn clear_restores_full_dictionary() {
        let mut solver = Solver::new(APPLES).unwrap();
        solver.add_guess(guess("apple", "ciiim")).unwrap();
        solver.add_guess(guess("angle", "ciiic")).unwrap();

        solver.clear_guesses();

        assert!(solver.guesses().is_empty());
        assert_eq!(solver.solve(), APPLES);
    }

    #[test]
    fn solve_keeps_duplicates_in_order() {
        let mut solver = Solver::new(["crane", "slate", "crane", "crate"]).unwrap();
        solver.add_guess(guess("crxxx", "cciii")).unwrap();

        assert_eq!(solver.solve(), ["crane", "crane", "crate"]);
    }

    #[test]
    fn later_correct_reinstates_incorrect_letter() {
        let mut solver = Solver::new(["abbb"]).unwrap();

        solver.add_guess(guess("aaaa", "iiii")).unwrap();
        assert!(solver.solve().is_empty());

        // 'a' is now known to be present, so it no longer excludes words
        solver.add_guess(guess("abbb", "cccc")).unwrap();
        assert_eq!(solver.solve(), ["abbb"]);
    }

    fn small_word() -> impl Strategy<Value = String> {
        proptest::collection::vec(prop::sample::select(vec!['a', 'b', 'c', 'd', 'e']), 4)
            .prop_map(|chars| chars.into_iter().collect())
    }

    fn small_guess() -> impl Strategy<Value = Guess> {
        (
            small_word(),
            proptest::collection::vec(prop::sample::select(vec!['c', 'i', 'm']), 4),
        )
            .prop_map(|(word, map)| {
                let map: String = map.into_iter().collect();
                Guess::decode(&word, &map).unwrap()
            })
    }

    /// Feedback for `word` as reported when the answer is `target`
    fn score(word: &str, target: &str) -> Guess {
        let map: String = word
            .chars()
            .zip(target.chars())
            .map(|(ch, answer)| {
                if ch == answer {
                    'c'
                } else if target.contains(ch) {
                    'm'
                } else {
                    'i'
                }
            })
            .collect();
        Guess::decode(word, &map).unwrap()
    }

    /// A history plus one more guess, all scored against the same hidden answer
    fn consistent_guesses() -> impl Strategy<Value = (Vec<Guess>, Guess)> {
        (
            small_word(),
            proptest::collection::vec(small_word(), 0..4),
            small_word(),
        )
            .prop_map(|(target, played, next)| {
                let history = played.iter().map(|word| score(word, &target)).collect();
                (history, score(&next, &target))
            })
    }

    /// True when `sub` appears in `full` in the same relative order
    fn is_subsequence(sub: &[&str], full: &[&str]) -> bool {
        let mut rest = full.iter();
        sub.iter().all(|word| rest.any(|candidate| candidate == word))
    }

    proptest! {
        #[test]
        fn solve_is_idempotent(
            words in proptest::collection::vec(small_word(), 1..40),
            guesses in proptest::collection::vec(small_guess(), 0..4),
        ) {
            let solver = Solver::with_guesses(words, guesses).unwrap();
            prop_assert_eq!(solver.solve(), solver.solve());
        }

        #[test]
        fn adding_a_guess_never_grows_candidates(
            words in proptest::collection::vec(small_word(), 1..40),
            (guesses, next) in consistent_guesses(),
        ) {
            let mut solver = Solver::with_guesses(words, guesses).unwrap();
            let before: Vec<String> = solver.solve().into_iter().map(String::from).collect();
            let before: Vec<&str> = before.iter().map(String::as_str).collect();

            solver.add_guess(next).unwrap();
            let after = solver.solve();

            prop_assert!(after.len() <= before.len());
            prop_assert!(is_subsequence(&after, &before));
        }

        #[test]
        fn clearing_always_restores_dictionary(
            words in proptest::collection::vec(small_word(), 1..40),
            guesses in proptest::collection::vec(small_guess(), 0..4),
        ) {
            let mut solver = Solver::with_guesses(words.clone(), guesses).unwrap();
            solver.clear_guesses();
            prop_assert_eq!(solver.solve(), words);
        }
    }
}
