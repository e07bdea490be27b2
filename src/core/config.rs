//! Game configuration
//!
//! The palette and code length are fixed for the lifetime of a round. Changing
//! them changes the size of the code space (`palette^length`) but not the
//! scoring or solving algorithm.

use super::{Code, Color, EngineError, Feedback};

/// Default number of slots in a code
pub const DEFAULT_LENGTH: usize = 4;

/// Longest code the engine accepts
pub const MAX_LENGTH: usize = 16;

/// Largest code space the solver will enumerate
pub const MAX_CODE_SPACE: usize = 1 << 20;

/// Palette and code length for a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    palette: Vec<Color>,
    length: usize,
}

impl GameConfig {
    /// Create a validated configuration
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidConfig`] if:
    /// - the palette is empty or lists a color twice
    /// - `length` is zero or above [`MAX_LENGTH`]
    /// - the code space `palette.len()^length` exceeds [`MAX_CODE_SPACE`]
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Color, GameConfig};
    ///
    /// let config = GameConfig::new(vec![Color::Red, Color::Green, Color::Blue], 3).unwrap();
    /// assert_eq!(config.code_space(), 27);
    ///
    /// assert!(GameConfig::new(vec![Color::Red, Color::Red], 4).is_err());
    /// ```
    pub fn new(palette: Vec<Color>, length: usize) -> Result<Self, EngineError> {
        if palette.is_empty() {
            return Err(EngineError::InvalidConfig(
                "palette must contain at least one color".to_string(),
            ));
        }

        for (i, color) in palette.iter().enumerate() {
            if palette[..i].contains(color) {
                return Err(EngineError::InvalidConfig(format!(
                    "color {color} appears more than once in the palette"
                )));
            }
        }

        if length == 0 || length > MAX_LENGTH {
            return Err(EngineError::InvalidConfig(format!(
                "code length must be between 1 and {MAX_LENGTH}, got {length}"
            )));
        }

        let exponent = u32::try_from(length).unwrap_or(u32::MAX);
        match palette.len().checked_pow(exponent) {
            Some(space) if space <= MAX_CODE_SPACE => Ok(Self { palette, length }),
            _ => Err(EngineError::InvalidConfig(format!(
                "{} colors with {length} slots exceeds {MAX_CODE_SPACE} possible codes",
                palette.len()
            ))),
        }
    }

    /// Colors in play, in enumeration order
    #[inline]
    #[must_use]
    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    /// Number of slots per code
    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Number of distinct codes, `palette^length`
    #[must_use]
    pub fn code_space(&self) -> usize {
        // Bounded by MAX_CODE_SPACE at construction
        self.palette.len().pow(self.length as u32)
    }

    /// Check that a code fits this configuration
    ///
    /// # Errors
    /// - [`EngineError::InvalidInputLength`] if the code has the wrong number of slots
    /// - [`EngineError::UnknownColor`] if it uses a color outside the palette
    pub fn validate(&self, code: &Code) -> Result<(), EngineError> {
        if code.len() != self.length {
            return Err(EngineError::InvalidInputLength {
                expected: self.length,
                actual: code.len(),
            });
        }

        if let Some(&color) = code.colors().iter().find(|c| !self.palette.contains(c)) {
            return Err(EngineError::UnknownColor(color));
        }

        Ok(())
    }

    /// Check that feedback counts can occur for this code length
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidFeedback`] for impossible peg counts.
    pub fn validate_feedback(&self, feedback: Feedback) -> Result<(), EngineError> {
        if feedback.is_possible(self.length) {
            Ok(())
        } else {
            Err(EngineError::InvalidFeedback {
                feedback,
                length: self.length,
            })
        }
    }

    /// Validate both codes, then score `guess` against `target`
    ///
    /// # Errors
    /// Propagates [`validate`](Self::validate) failures for either code.
    pub fn score(&self, guess: &Code, target: &Code) -> Result<Feedback, EngineError> {
        self.validate(guess)?;
        self.validate(target)?;
        Ok(Feedback::calculate(guess, target))
    }

    /// Winning feedback for this configuration
    #[must_use]
    pub const fn perfect(&self) -> Feedback {
        Feedback::perfect(self.length)
    }

    /// The fixed opening guess
    ///
    /// The first half of the slots take the first palette color and the rest
    /// take the second (`RRGG` for the classic game). A one-color palette
    /// fills every slot with its only color.
    #[must_use]
    pub fn opening_guess(&self) -> Code {
        let first = self.palette[0];
        let second = self.palette.get(1).copied().unwrap_or(first);
        let half = self.length / 2;

        Code::new(
            (0..self.length)
                .map(|slot| if slot < half { first } else { second })
                .collect::<Vec<_>>(),
        )
    }
}

impl Default for GameConfig {
    /// Six classic colors, four slots
    fn default() -> Self {
        Self {
            palette: Color::CLASSIC.to_vec(),
            length: DEFAULT_LENGTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Color::{Black, Blue, Green, Red};

    #[test]
    fn default_is_classic_game() {
        let config = GameConfig::default();
        assert_eq!(config.palette().len(), 6);
        assert_eq!(config.length(), 4);
        assert_eq!(config.code_space(), 1296);
        assert_eq!(config.perfect(), Feedback::new(4, 0));
    }

    #[test]
    fn rejects_bad_palettes() {
        assert!(matches!(
            GameConfig::new(Vec::new(), 4),
            Err(EngineError::InvalidConfig(_))
        ));
        assert!(matches!(
            GameConfig::new(vec![Red, Green, Red], 4),
            Err(EngineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_bad_lengths() {
        assert!(GameConfig::new(vec![Red, Green], 0).is_err());
        assert!(GameConfig::new(vec![Red], MAX_LENGTH + 1).is_err());
        assert!(GameConfig::new(vec![Red], MAX_LENGTH).is_ok());
    }

    #[test]
    fn rejects_huge_code_space() {
        assert!(GameConfig::new(Color::ALL.to_vec(), 7).is_err());
        assert!(GameConfig::new(Color::ALL.to_vec(), 6).is_ok());
    }

    #[test]
    fn validate_code_length_and_colors() {
        let config = GameConfig::default();
        assert!(config.validate(&"RGBY".parse().unwrap()).is_ok());
        assert_eq!(
            config.validate(&"RGB".parse().unwrap()),
            Err(EngineError::InvalidInputLength {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(
            config.validate(&"RGBK".parse().unwrap()),
            Err(EngineError::UnknownColor(Black))
        );
    }

    #[test]
    fn checked_score_rejects_unknown_color() {
        let config = GameConfig::new(vec![Red, Green, Blue], 4).unwrap();
        let guess = "RRGG".parse().unwrap();
        let target = "RGBY".parse().unwrap();
        assert_eq!(
            config.score(&guess, &target),
            Err(EngineError::UnknownColor(Color::Yellow))
        );
    }

    #[test]
    fn feedback_validation() {
        let config = GameConfig::default();
        assert!(config.validate_feedback(Feedback::new(2, 2)).is_ok());
        assert!(config.validate_feedback(Feedback::new(3, 1)).is_err());
        assert!(config.validate_feedback(Feedback::new(4, 1)).is_err());
    }

    #[test]
    fn opening_guesses() {
        assert_eq!(GameConfig::default().opening_guess().to_string(), "RRGG");

        let five = GameConfig::new(Color::CLASSIC.to_vec(), 5).unwrap();
        assert_eq!(five.opening_guess().to_string(), "RRGGG");

        let single = GameConfig::new(vec![Blue], 3).unwrap();
        assert_eq!(single.opening_guess().to_string(), "BBB");
    }
}
