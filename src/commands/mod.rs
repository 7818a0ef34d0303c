//! Command implementations

pub mod filter;
pub mod input;
pub mod session;
pub mod simple;

pub use filter::run_filter;
pub use input::{Input, InputError, parse_guess, parse_input};
pub use session::{Outcome, Progress, apply};
pub use simple::{choose_game, run_simple};
