//! Terminal output formatting
//!
//! Colors and wording for the prompt session. The core never sees any of it.

pub mod display;
pub mod formatters;

pub use display::{print_help, print_outcome, print_progress, print_rejection, print_welcome};
