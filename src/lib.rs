//! Wordle Assistant
//!
//! Narrows a Wordle-family dictionary down to the words still consistent with
//! the feedback from every guess so far.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_assistant::core::Guess;
//! use wordle_assistant::solver::Solver;
//!
//! let mut solver = Solver::new(["apple", "angle", "ankle", "adobe", "ashen"]).unwrap();
//!
//! // 'a' correct, 'p', 'p' and 'l' absent, 'e' present elsewhere
//! solver.add_guess(Guess::decode("apple", "ciiim").unwrap()).unwrap();
//! assert_eq!(solver.solve(), ["ashen"]);
//! ```

// Core domain types
pub mod core;

// Candidate filtering
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
