//! Candidate filtering
//!
//! Turns the accumulated guess history into the set of dictionary words that
//! are still consistent with it.

mod constraints;
mod engine;

pub use constraints::Constraints;
pub use engine::Solver;
