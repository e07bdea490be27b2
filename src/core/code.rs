//! Code representation
//!
//! A Code is an ordered sequence of colors: either the hidden secret or a guess.

use super::{Color, EngineError};
use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;

/// An ordered sequence of peg colors, repetitions allowed
///
/// A Code is not tied to a particular configuration. Length and palette
/// membership are checked by [`GameConfig::validate`](super::GameConfig::validate)
/// wherever a code enters the engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code {
    colors: Vec<Color>,
}

impl Code {
    /// Create a code from its colors, in slot order
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Color};
    ///
    /// let code = Code::new([Color::Red, Color::Green, Color::Blue, Color::Yellow]);
    /// assert_eq!(code.len(), 4);
    /// assert_eq!(code.to_string(), "RGBY");
    /// ```
    #[must_use]
    pub fn new(colors: impl Into<Vec<Color>>) -> Self {
        Self {
            colors: colors.into(),
        }
    }

    /// Number of slots
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// True for a code with no slots
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The colors in slot order
    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Color in the given slot
    ///
    /// # Panics
    /// Panics if `slot >= self.len()`
    #[inline]
    #[must_use]
    pub fn color_at(&self, slot: usize) -> Color {
        self.colors[slot]
    }

    /// Full color names joined by spaces, e.g. `Red Green Blue Yellow`
    #[must_use]
    pub fn names(&self) -> String {
        self.colors
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// How often each color occurs in the code
    pub(crate) fn color_counts(&self) -> FxHashMap<Color, u8> {
        let mut counts = FxHashMap::default();
        for &color in &self.colors {
            *counts.entry(color).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Code {
    /// Compact form using color letters, e.g. `RRGG`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in &self.colors {
            write!(f, "{}", color.letter())?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = EngineError;

    /// Parse `"RGBY"`, `"red,green,blue,yellow"` or `"red green blue yellow"`
    ///
    /// A single token is read letter by letter first and falls back to a
    /// one-slot color name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .collect();

        match tokens.as_slice() {
            [] => Err(EngineError::Parse("empty code".to_string())),
            [single] => {
                let letters: Option<Vec<Color>> = single.chars().map(Color::from_letter).collect();
                match letters {
                    Some(colors) => Ok(Self::new(colors)),
                    None => Ok(Self::new(vec![single.parse::<Color>()?])),
                }
            }
            many => many
                .iter()
                .map(|t| t.parse::<Color>())
                .collect::<Result<Vec<_>, _>>()
                .map(Self::new),
        }
    }
}

impl From<Vec<Color>> for Code {
    fn from(colors: Vec<Color>) -> Self {
        Self::new(colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Color::{Blue, Green, Red, Yellow};

    #[test]
    fn parse_letters() {
        let code: Code = "rgby".parse().unwrap();
        assert_eq!(code.colors(), &[Red, Green, Blue, Yellow]);
    }

    #[test]
    fn parse_names_comma_and_space() {
        let a: Code = "red,green,blue,yellow".parse().unwrap();
        let b: Code = "Red Green  Blue Yellow".parse().unwrap();
        let c: Code = "red, green, blue, yellow".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn parse_single_name_falls_back() {
        let code: Code = "purple".parse().unwrap();
        assert_eq!(code.colors(), &[Color::Purple]);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("".parse::<Code>().is_err());
        assert!("   ".parse::<Code>().is_err());
        assert!("rgbz".parse::<Code>().is_err());
        assert!("red,teal".parse::<Code>().is_err());
    }

    #[test]
    fn display_and_names() {
        let code = Code::new([Red, Red, Green, Green]);
        assert_eq!(code.to_string(), "RRGG");
        assert_eq!(code.names(), "Red Red Green Green");
    }

    #[test]
    fn color_counts_with_repeats() {
        let code = Code::new([Red, Green, Red, Red]);
        let counts = code.color_counts();
        assert_eq!(counts.get(&Red), Some(&3));
        assert_eq!(counts.get(&Green), Some(&1));
        assert_eq!(counts.get(&Blue), None);
    }

    #[test]
    fn color_at_reads_slots() {
        let code = Code::new([Red, Green, Blue, Yellow]);
        assert_eq!(code.color_at(0), Red);
        assert_eq!(code.color_at(3), Yellow);
        assert!(!code.is_empty());
        assert!(Code::new(Vec::<Color>::new()).is_empty());
    }
}
