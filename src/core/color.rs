//! Peg colors
//!
//! The engine knows eight symbolic colors. A game only uses the subset listed
//! in its palette (see [`GameConfig`](super::GameConfig)), six by default.

use super::EngineError;
use std::fmt;
use std::str::FromStr;

/// A symbolic peg color
///
/// Declaration order doubles as the default palette order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
    Purple,
    White,
    Black,
}

impl Color {
    /// Every color the engine knows, in declaration order
    pub const ALL: [Self; 8] = [
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Yellow,
        Self::Orange,
        Self::Purple,
        Self::White,
        Self::Black,
    ];

    /// The six colors of the classic game
    pub const CLASSIC: [Self; 6] = [
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Yellow,
        Self::Orange,
        Self::Purple,
    ];

    /// Full color name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Blue => "Blue",
            Self::Yellow => "Yellow",
            Self::Orange => "Orange",
            Self::Purple => "Purple",
            Self::White => "White",
            Self::Black => "Black",
        }
    }

    /// Single-letter abbreviation (`K` is Black, `B` is Blue)
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Green => 'G',
            Self::Blue => 'B',
            Self::Yellow => 'Y',
            Self::Orange => 'O',
            Self::Purple => 'P',
            Self::White => 'W',
            Self::Black => 'K',
        }
    }

    /// Look a color up by its abbreviation (case-insensitive)
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        let upper = letter.to_ascii_uppercase();
        Self::ALL.into_iter().find(|c| c.letter() == upper)
    }

    /// Terminal RGB value used when rendering a peg
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Red => (220, 50, 47),
            Self::Green => (64, 160, 43),
            Self::Blue => (38, 139, 210),
            Self::Yellow => (230, 200, 40),
            Self::Orange => (240, 130, 20),
            Self::Purple => (150, 80, 200),
            Self::White => (235, 235, 235),
            Self::Black => (60, 60, 60),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = EngineError;

    /// Accepts a full name or a single letter, in any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            return Self::from_letter(ch)
                .ok_or_else(|| EngineError::Parse(format!("color '{trimmed}'")));
        }

        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| EngineError::Parse(format!("color '{trimmed}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_by_name_any_case() {
        assert_eq!("red".parse::<Color>().unwrap(), Color::Red);
        assert_eq!("PURPLE".parse::<Color>().unwrap(), Color::Purple);
        assert_eq!(" Orange ".parse::<Color>().unwrap(), Color::Orange);
    }

    #[test]
    fn parse_by_letter() {
        assert_eq!("b".parse::<Color>().unwrap(), Color::Blue);
        assert_eq!("K".parse::<Color>().unwrap(), Color::Black);
        assert_eq!(Color::from_letter('y'), Some(Color::Yellow));
        assert_eq!(Color::from_letter('z'), None);
    }

    #[test]
    fn parse_rejects_unknown() {
        assert!(matches!(
            "magenta".parse::<Color>(),
            Err(EngineError::Parse(_))
        ));
        assert!("".parse::<Color>().is_err());
        assert!("x".parse::<Color>().is_err());
    }

    #[test]
    fn letters_are_unique() {
        let letters: std::collections::HashSet<char> =
            Color::ALL.iter().map(|c| c.letter()).collect();
        assert_eq!(letters.len(), Color::ALL.len());
    }

    #[test]
    fn classic_is_prefix_of_all() {
        assert_eq!(&Color::ALL[..6], &Color::CLASSIC);
    }
}
