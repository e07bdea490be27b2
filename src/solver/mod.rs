//! Code-breaking solver
//!
//! Maintains the set of codes consistent with all feedback in a round and
//! proposes the next guess from it.

mod candidates;
mod engine;
pub mod strategy;

pub use candidates::CandidateSet;
pub use engine::{Solver, SolverState};
pub use strategy::{FirstCandidate, GuessSelector};
