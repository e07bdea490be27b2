//! Feedback calculation and representation
//!
//! Feedback is the classic pair of peg counts returned for a guess:
//! - exact: right color in the right slot (black pegs)
//! - misplaced: right color in the wrong slot (white pegs)

use super::{Code, EngineError};
use std::fmt;
use std::str::FromStr;

/// Score of a guess against a target code
///
/// Invariant: `exact + misplaced` never exceeds the code length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Feedback {
    exact: u8,
    misplaced: u8,
}

impl Feedback {
    /// Create feedback from raw peg counts
    #[inline]
    #[must_use]
    pub const fn new(exact: u8, misplaced: u8) -> Self {
        Self { exact, misplaced }
    }

    /// Feedback for a correct guess of a code with `length` slots
    #[inline]
    #[must_use]
    pub const fn perfect(length: usize) -> Self {
        Self::new(length as u8, 0)
    }

    /// Number of slots with the right color (black pegs)
    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    /// Number of right colors in the wrong slot (white pegs)
    #[inline]
    #[must_use]
    pub const fn misplaced(self) -> u8 {
        self.misplaced
    }

    /// Total number of pegs awarded
    #[inline]
    #[must_use]
    pub const fn total(self) -> usize {
        self.exact as usize + self.misplaced as usize
    }

    /// Check if this is the winning score for codes of `length` slots
    #[inline]
    #[must_use]
    pub const fn is_perfect(self, length: usize) -> bool {
        self.exact as usize == length && self.misplaced == 0
    }

    /// Check that these counts can occur at all for codes of `length` slots
    ///
    /// `length - 1` exact pegs plus one misplaced peg is impossible: the
    /// last remaining slot would have to hold the color it is missing.
    #[must_use]
    pub const fn is_possible(self, length: usize) -> bool {
        let total = self.total();
        total <= length && !(self.exact as usize + 1 == length && self.misplaced == 1)
    }

    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// Callers must pass codes of equal length; see [`score`] for the
    /// checked variant.
    ///
    /// # Algorithm
    /// 1. Count slots where both codes hold the same color
    /// 2. For each color in the guess, take the smaller of its counts in both
    ///    codes and sum those minimums
    /// 3. Misplaced pegs are that overlap minus the exact matches
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Feedback};
    ///
    /// let guess: Code = "RRRR".parse().unwrap();
    /// let target: Code = "RGBR".parse().unwrap();
    ///
    /// assert_eq!(Feedback::calculate(&guess, &target), Feedback::new(2, 0));
    /// ```
    #[must_use]
    pub fn calculate(guess: &Code, target: &Code) -> Self {
        debug_assert_eq!(guess.len(), target.len(), "codes must have equal length");

        let exact = guess
            .colors()
            .iter()
            .zip(target.colors())
            .filter(|(g, t)| g == t)
            .count() as u8;

        let target_counts = target.color_counts();
        let overlap: u8 = guess
            .color_counts()
            .iter()
            .map(|(color, &count)| count.min(target_counts.get(color).copied().unwrap_or(0)))
            .sum();

        Self::new(exact, overlap - exact)
    }

    /// Render as peg symbols, padded with empty holes up to `length`
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Feedback;
    ///
    /// assert_eq!(Feedback::new(1, 2).to_pegs(4), "●○○·");
    /// ```
    #[must_use]
    pub fn to_pegs(self, length: usize) -> String {
        let mut result = String::with_capacity(length * 3);
        result.extend(std::iter::repeat_n('●', self.exact as usize));
        result.extend(std::iter::repeat_n('○', self.misplaced as usize));
        result.extend(std::iter::repeat_n('·', length.saturating_sub(self.total())));
        result
    }
}

/// Score `guess` against `target`, failing fast on mismatched lengths
///
/// # Errors
/// Returns [`EngineError::InvalidInputLength`] when the two codes differ in
/// length.
///
/// # Examples
/// ```
/// use mastermind::core::{score, Code, Feedback};
///
/// let guess: Code = "GBYO".parse().unwrap();
/// let target: Code = "OYBG".parse().unwrap();
/// assert_eq!(score(&guess, &target).unwrap(), Feedback::new(0, 4));
///
/// let short: Code = "GBY".parse().unwrap();
/// assert!(score(&short, &target).is_err());
/// ```
pub fn score(guess: &Code, target: &Code) -> Result<Feedback, EngineError> {
    if guess.len() != target.len() {
        return Err(EngineError::InvalidInputLength {
            expected: target.len(),
            actual: guess.len(),
        });
    }
    Ok(Feedback::calculate(guess, target))
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.exact, self.misplaced)
    }
}

impl FromStr for Feedback {
    type Err = EngineError;

    /// Parse two counts separated by a comma, slash or whitespace: `"1,2"`, `"1 2"`, `"1/2"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::Parse(format!("feedback '{}'", s.trim()));

        let parts: Vec<&str> = s
            .trim()
            .trim_start_matches('(')
            .trim_end_matches(')')
            .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();

        let [exact, misplaced] = parts.as_slice() else {
            return Err(invalid());
        };

        let exact = exact.parse::<u8>().map_err(|_| invalid())?;
        let misplaced = misplaced.parse::<u8>().map_err(|_| invalid())?;
        Ok(Self::new(exact, misplaced))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;

    fn code(s: &str) -> Code {
        s.parse().unwrap()
    }

    #[test]
    fn first_guess_against_rgby() {
        // Red matches in slot 0. Red and Green each overlap once, so the
        // overlap is 2 and one peg is misplaced (the Green).
        let fb = Feedback::calculate(&code("RRGG"), &code("RGBY"));
        assert_eq!(fb, Feedback::new(1, 1));
    }

    #[test]
    fn repeated_guess_color_counts_once_per_target_copy() {
        let fb = Feedback::calculate(&code("RRRR"), &code("RGBR"));
        assert_eq!(fb.exact(), 2);
        assert_eq!(fb.misplaced(), 0);
    }

    #[test]
    fn full_permutation_is_all_misplaced() {
        let fb = Feedback::calculate(&code("GBYO"), &code("OYBG"));
        assert_eq!(fb, Feedback::new(0, 4));
    }

    #[test]
    fn no_shared_colors() {
        let fb = Feedback::calculate(&code("RRGG"), &code("BYOP"));
        assert_eq!(fb, Feedback::new(0, 0));
        assert_eq!(fb.total(), 0);
    }

    #[test]
    fn identity_scores_perfect() {
        for s in ["RRGG", "RGBY", "PPPP", "OYBG", "RGRG"] {
            let c = code(s);
            let fb = Feedback::calculate(&c, &c);
            assert_eq!(fb, Feedback::perfect(4));
            assert!(fb.is_perfect(4));
        }
    }

    #[test]
    fn bounds_hold_for_every_pair_of_small_codes() {
        let palette = [Color::Red, Color::Green, Color::Blue];
        let mut codes = Vec::new();
        for &a in &palette {
            for &b in &palette {
                for &c in &palette {
                    codes.push(Code::new([a, b, c]));
                }
            }
        }

        for guess in &codes {
            for target in &codes {
                let fb = Feedback::calculate(guess, target);
                assert!(fb.exact() <= 3);
                assert!(fb.misplaced() <= 3 - fb.exact());
                assert!(fb.is_possible(3));
                assert_eq!(fb.is_perfect(3), guess == target);
            }
        }
    }

    #[test]
    fn overlap_is_symmetric() {
        let a = code("RRBY");
        let b = code("YRRP");
        assert_eq!(
            Feedback::calculate(&a, &b).total(),
            Feedback::calculate(&b, &a).total()
        );
    }

    #[test]
    fn score_checks_length() {
        let err = score(&code("RGB"), &code("RGBY")).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidInputLength {
                expected: 4,
                actual: 3
            }
        );
        assert_eq!(
            score(&code("RGBY"), &code("RGBY")).unwrap(),
            Feedback::new(4, 0)
        );
    }

    #[test]
    fn impossible_counts() {
        assert!(!Feedback::new(3, 1).is_possible(4));
        assert!(!Feedback::new(2, 3).is_possible(4));
        assert!(!Feedback::new(5, 0).is_possible(4));
        assert!(Feedback::new(2, 2).is_possible(4));
        assert!(Feedback::new(4, 0).is_possible(4));
    }

    #[test]
    fn parse_feedback() {
        assert_eq!("1,2".parse::<Feedback>().unwrap(), Feedback::new(1, 2));
        assert_eq!("1 2".parse::<Feedback>().unwrap(), Feedback::new(1, 2));
        assert_eq!("3/0".parse::<Feedback>().unwrap(), Feedback::new(3, 0));
        assert_eq!("(0, 4)".parse::<Feedback>().unwrap(), Feedback::new(0, 4));
        assert!("1".parse::<Feedback>().is_err());
        assert!("1,2,3".parse::<Feedback>().is_err());
        assert!("a,b".parse::<Feedback>().is_err());
    }

    #[test]
    fn display_and_pegs() {
        let fb = Feedback::new(1, 2);
        assert_eq!(fb.to_string(), "(1, 2)");
        assert_eq!(fb.to_pegs(4), "●○○·");
        assert_eq!(Feedback::perfect(4).to_pegs(4), "●●●●");
        assert_eq!(Feedback::default().to_pegs(3), "···");
    }
}
