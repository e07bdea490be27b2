//! A single secret-code lifecycle

use crate::core::{Code, EngineError, Feedback, GameConfig};

/// Whether the secret has been found yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
}

/// A secret plus every guess made against it
///
/// The round is the only place a secret is scored, whoever is guessing.
#[derive(Debug, Clone)]
pub struct GameRound {
    config: GameConfig,
    secret: Code,
    history: Vec<(Code, Feedback)>,
    status: RoundStatus,
}

impl GameRound {
    /// Start a round with the given secret
    ///
    /// # Errors
    /// Fails if the secret does not fit `config`.
    pub fn new(config: GameConfig, secret: Code) -> Result<Self, EngineError> {
        config.validate(&secret)?;
        Ok(Self {
            config,
            secret,
            history: Vec::new(),
            status: RoundStatus::InProgress,
        })
    }

    /// Score a guess against the secret and record it
    ///
    /// # Errors
    /// - [`EngineError::RoundFinished`] once the round is won
    /// - validation errors if the guess does not fit the configuration
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Feedback, GameConfig};
    /// use mastermind::game::GameRound;
    ///
    /// let mut round = GameRound::new(GameConfig::default(), "RGBY".parse().unwrap()).unwrap();
    /// let feedback = round.submit_guess(&"RRGG".parse().unwrap()).unwrap();
    /// assert_eq!(feedback, Feedback::new(1, 1));
    /// assert!(!round.is_won());
    /// ```
    pub fn submit_guess(&mut self, guess: &Code) -> Result<Feedback, EngineError> {
        if self.status == RoundStatus::Won {
            return Err(EngineError::RoundFinished);
        }

        let feedback = self.config.score(guess, &self.secret)?;
        self.history.push((guess.clone(), feedback));

        if feedback.is_perfect(self.config.length()) {
            self.status = RoundStatus::Won;
        }
        Ok(feedback)
    }

    /// The hidden code
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Code {
        &self.secret
    }

    /// Guesses made so far with their feedback, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[(Code, Feedback)] {
        &self.history
    }

    /// Number of guesses made
    #[inline]
    #[must_use]
    pub fn turns(&self) -> usize {
        self.history.len()
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.status == RoundStatus::Won
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
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
    fn rejects_invalid_secret() {
        assert!(GameRound::new(GameConfig::default(), code("RGB")).is_err());
        assert_eq!(
            GameRound::new(GameConfig::default(), code("RGBK")).unwrap_err(),
            EngineError::UnknownColor(Color::Black)
        );
    }

    #[test]
    fn records_guesses_until_won() {
        let mut round = GameRound::new(GameConfig::default(), code("RGBY")).unwrap();

        assert_eq!(round.submit_guess(&code("RRRR")).unwrap(), Feedback::new(1, 0));
        assert_eq!(round.submit_guess(&code("YBGR")).unwrap(), Feedback::new(0, 4));
        assert_eq!(round.status(), RoundStatus::InProgress);

        assert_eq!(round.submit_guess(&code("RGBY")).unwrap(), Feedback::new(4, 0));
        assert!(round.is_won());
        assert_eq!(round.turns(), 3);
        assert_eq!(round.history()[1].0, code("YBGR"));
    }

    #[test]
    fn rejects_guess_after_win() {
        let mut round = GameRound::new(GameConfig::default(), code("PPPP")).unwrap();
        round.submit_guess(&code("PPPP")).unwrap();
        assert_eq!(
            round.submit_guess(&code("PPPP")),
            Err(EngineError::RoundFinished)
        );
        assert_eq!(round.turns(), 1);
    }

    #[test]
    fn invalid_guess_is_not_recorded() {
        let mut round = GameRound::new(GameConfig::default(), code("RGBY")).unwrap();
        assert!(round.submit_guess(&code("RGBYO")).is_err());
        assert_eq!(round.turns(), 0);
    }
}
