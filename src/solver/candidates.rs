//! Candidate set management
//!
//! Holds every code still consistent with the feedback seen in a round.

use crate::core::{Code, Feedback, GameConfig};
use rayon::prelude::*;

/// Below this size filtering runs on the current thread
const PARALLEL_THRESHOLD: usize = 4096;

/// Codes consistent with all feedback received so far
///
/// Enumeration order is the Cartesian product of the palette in palette
/// order, with the last slot varying fastest: `RRRR, RRRG, RRRB, ..., PPPP`.
/// Filtering keeps that order, so "first remaining candidate" is reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    codes: Vec<Code>,
}

impl CandidateSet {
    /// Every code of the configuration, in enumeration order
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::GameConfig;
    /// use mastermind::solver::CandidateSet;
    ///
    /// let set = CandidateSet::full(&GameConfig::default());
    /// assert_eq!(set.len(), 1296);
    /// assert_eq!(set.first().unwrap().to_string(), "RRRR");
    /// ```
    #[must_use]
    pub fn full(config: &GameConfig) -> Self {
        let palette = config.palette();
        let length = config.length();
        let mut codes = Vec::with_capacity(config.code_space());
        let mut digits = vec![0usize; length];

        loop {
            codes.push(Code::new(
                digits.iter().map(|&d| palette[d]).collect::<Vec<_>>(),
            ));

            // Odometer increment, last slot fastest
            let mut slot = length;
            loop {
                if slot == 0 {
                    return Self { codes };
                }
                slot -= 1;
                digits[slot] += 1;
                if digits[slot] < palette.len() {
                    break;
                }
                digits[slot] = 0;
            }
        }
    }

    /// Number of remaining candidates
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True when no candidate remains
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// First candidate in enumeration order
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&Code> {
        self.codes.first()
    }

    /// Check whether a code is still a candidate
    #[must_use]
    pub fn contains(&self, code: &Code) -> bool {
        self.codes.contains(code)
    }

    /// Iterate candidates in enumeration order
    pub fn iter(&self) -> std::slice::Iter<'_, Code> {
        self.codes.iter()
    }

    /// Candidates as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[Code] {
        &self.codes
    }

    /// The candidates that would have produced `feedback` for `guess`
    ///
    /// Does not modify the set; the solver swaps the result in once it knows
    /// it is non-empty.
    #[must_use]
    pub fn filtered(&self, guess: &Code, feedback: Feedback) -> Self {
        let consistent = |candidate: &&Code| Feedback::calculate(guess, candidate) == feedback;

        let codes = if self.codes.len() >= PARALLEL_THRESHOLD {
            self.codes.par_iter().filter(consistent).cloned().collect()
        } else {
            self.codes.iter().filter(consistent).cloned().collect()
        };

        Self { codes }
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Code;
    type IntoIter = std::slice::Iter<'a, Code>;

    fn into_iter(self) -> Self::IntoIter {
        self.codes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color::{self, Blue, Green, Red};

    fn small_config() -> GameConfig {
        GameConfig::new(vec![Red, Green, Blue], 2).unwrap()
    }

    #[test]
    fn full_enumerates_in_palette_order() {
        let set = CandidateSet::full(&small_config());
        let codes: Vec<String> = set.iter().map(ToString::to_string).collect();
        assert_eq!(
            codes,
            ["RR", "RG", "RB", "GR", "GG", "GB", "BR", "BG", "BB"]
        );
    }

    #[test]
    fn full_size_matches_code_space() {
        let config = GameConfig::default();
        let set = CandidateSet::full(&config);
        assert_eq!(set.len(), config.code_space());
        assert_eq!(set.as_slice().last().unwrap().to_string(), "PPPP");

        let single = GameConfig::new(vec![Color::Orange], 3).unwrap();
        let set = CandidateSet::full(&single);
        assert_eq!(set.len(), 1);
        assert_eq!(set.first().unwrap().to_string(), "OOO");
    }

    #[test]
    fn filtered_is_sound_and_keeps_order() {
        let set = CandidateSet::full(&GameConfig::default());
        let guess: Code = "RRGG".parse().unwrap();
        let fb = Feedback::new(1, 1);

        let filtered = set.filtered(&guess, fb);
        assert_eq!(filtered.len(), 208);
        assert!(
            filtered
                .iter()
                .all(|c| Feedback::calculate(&guess, c) == fb)
        );
        assert!(filtered.contains(&"RGBY".parse().unwrap()));

        let positions: Vec<usize> = filtered
            .iter()
            .map(|c| set.iter().position(|s| s == c).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn filtered_leaves_original_untouched() {
        let set = CandidateSet::full(&small_config());
        let guess: Code = "RR".parse().unwrap();
        let filtered = set.filtered(&guess, Feedback::new(2, 0));
        assert_eq!(filtered.len(), 1);
        assert_eq!(set.len(), 9);
    }

    #[test]
    fn filtered_can_empty_the_set() {
        let set = CandidateSet::full(&small_config());
        let guess: Code = "RG".parse().unwrap();
        // Two misplaced pegs means the answer is GR; claim one exact and one misplaced instead
        let filtered = set.filtered(&guess, Feedback::new(1, 1));
        assert!(filtered.is_empty());
    }

    #[test]
    fn parallel_path_matches_sequential() {
        let config = GameConfig::new(Color::ALL.to_vec(), 5).unwrap();
        let set = CandidateSet::full(&config);
        assert!(set.len() >= PARALLEL_THRESHOLD);

        let guess: Code = "RGBYO".parse().unwrap();
        let fb = Feedback::new(1, 2);
        let parallel = set.filtered(&guess, fb);
        let sequential: Vec<&Code> = set
            .iter()
            .filter(|c| Feedback::calculate(&guess, c) == fb)
            .collect();

        assert_eq!(parallel.len(), sequential.len());
        assert!(parallel.iter().zip(sequential).all(|(a, b)| a == b));
    }
}
