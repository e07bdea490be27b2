//! Guess selection
//!
//! Defines the selection trait the solver is generic over and the one
//! selector shipped with the crate.

use super::CandidateSet;
use crate::core::Code;

/// Picks the next guess from the remaining candidates
///
/// Implementations must be deterministic for a given candidate set so that
/// games can be replayed.
pub trait GuessSelector {
    /// Select the next guess, or `None` if no candidate remains
    fn select<'a>(&self, candidates: &'a CandidateSet) -> Option<&'a Code>;
}

/// Guess the first remaining candidate in enumeration order
///
/// Simple and not optimal. Solves every classic (6 colors, 4 slots) code in
/// at most 8 guesses from the `RRGG` opening.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstCandidate;

impl GuessSelector for FirstCandidate {
    fn select<'a>(&self, candidates: &'a CandidateSet) -> Option<&'a Code> {
        candidates.first()
    }
}
