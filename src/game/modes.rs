//! Mode-scoped round state machines
//!
//! - [`PlayerRound`]: the computer holds the secret, the human guesses
//! - [`ComputerRound`]: the human holds the secret, the solver guesses
//!
//! Shells pick one per round. Neither knows anything about timing or input
//! devices.

use super::{GameRound, SecretSource};
use crate::core::{Code, EngineError, Feedback, GameConfig};
use crate::solver::{Solver, SolverState};
use std::fmt;
use tracing::{debug, info};

/// Who guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Mode {
    /// The computer picks a secret, you guess it
    #[default]
    #[value(name = "player")]
    PlayerVsComputer,
    /// You pick a secret, the computer guesses it
    #[value(name = "computer")]
    ComputerVsPlayer,
}

impl Mode {
    /// The other mode
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::PlayerVsComputer => Self::ComputerVsPlayer,
            Self::ComputerVsPlayer => Self::PlayerVsComputer,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PlayerVsComputer => "Player vs Computer",
            Self::ComputerVsPlayer => "Computer vs Player",
        })
    }
}

/// Player-vs-Computer: score the human's guesses against a generated secret
pub struct PlayerRound {
    round: GameRound,
}

impl PlayerRound {
    /// Start a round with a secret drawn from `source`
    ///
    /// # Errors
    /// Fails if the source produces a code that does not fit `config`.
    pub fn new(config: GameConfig, source: &mut impl SecretSource) -> Result<Self, EngineError> {
        let secret = source.generate(&config);
        debug!(%secret, "computer picked secret");
        Ok(Self {
            round: GameRound::new(config, secret)?,
        })
    }

    /// Score a human guess
    ///
    /// # Errors
    /// See [`GameRound::submit_guess`].
    pub fn guess(&mut self, guess: &Code) -> Result<Feedback, EngineError> {
        let feedback = self.round.submit_guess(guess)?;
        if self.round.is_won() {
            info!(turns = self.round.turns(), "player cracked the code");
        }
        Ok(feedback)
    }

    /// The secret, for showing once the player gives up
    #[must_use]
    pub const fn reveal(&self) -> &Code {
        self.round.secret()
    }

    #[must_use]
    pub const fn round(&self) -> &GameRound {
        &self.round
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.round.is_won()
    }
}

/// One computer guess and its outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Code,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub state: SolverState,
}

/// Computer-vs-Player: the solver guesses a human-chosen secret
///
/// The round scores each solver guess against the secret, so feedback is
/// always honest.
pub struct ComputerRound {
    round: GameRound,
    solver: Solver,
}

impl ComputerRound {
    /// Start a round against the human's secret
    ///
    /// # Errors
    /// Fails if the secret does not fit `config`.
    pub fn new(config: GameConfig, secret: Code) -> Result<Self, EngineError> {
        let round = GameRound::new(config.clone(), secret)?;
        Ok(Self {
            round,
            solver: Solver::new(config),
        })
    }

    /// The guess the computer will play next
    #[must_use]
    pub fn next_guess(&self) -> &Code {
        self.solver.next_guess()
    }

    /// Play one computer turn
    ///
    /// # Errors
    /// [`EngineError::RoundFinished`] once the secret is found; solver
    /// errors otherwise.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::GameConfig;
    /// use mastermind::game::ComputerRound;
    /// use mastermind::solver::SolverState;
    ///
    /// let mut round = ComputerRound::new(GameConfig::default(), "RRGG".parse().unwrap()).unwrap();
    /// let turn = round.step().unwrap();
    /// assert_eq!(turn.state, SolverState::Won);
    /// ```
    pub fn step(&mut self) -> Result<Turn, EngineError> {
        let guess = self.solver.next_guess().clone();
        let candidates_before = self.solver.candidate_count();

        let feedback = self.round.submit_guess(&guess)?;
        let state = self.solver.record_feedback(&guess, feedback)?;

        if state == SolverState::Won {
            info!(turns = self.round.turns(), secret = %guess, "computer cracked the code");
        }

        Ok(Turn {
            guess,
            feedback,
            candidates_before,
            candidates_after: self.solver.candidate_count(),
            state,
        })
    }

    #[must_use]
    pub const fn round(&self) -> &GameRound {
        &self.round
    }

    #[must_use]
    pub const fn solver(&self) -> &Solver {
        &self.solver
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.round.is_won()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{FixedSecret, RandomSecret};

    fn code(s: &str) -> Code {
        s.parse().unwrap()
    }

    #[test]
    fn mode_toggles_and_displays() {
        assert_eq!(Mode::default(), Mode::PlayerVsComputer);
        assert_eq!(Mode::PlayerVsComputer.toggled(), Mode::ComputerVsPlayer);
        assert_eq!(Mode::ComputerVsPlayer.toggled(), Mode::PlayerVsComputer);
        assert_eq!(Mode::ComputerVsPlayer.to_string(), "Computer vs Player");
    }

    #[test]
    fn player_round_scores_against_generated_secret() {
        let mut source = FixedSecret(code("RGBY"));
        let mut round = PlayerRound::new(GameConfig::default(), &mut source).unwrap();

        assert_eq!(round.guess(&code("RRGG")).unwrap(), Feedback::new(1, 1));
        assert!(!round.is_won());
        assert_eq!(round.guess(&code("RGBY")).unwrap(), Feedback::new(4, 0));
        assert!(round.is_won());
        assert_eq!(round.reveal(), &code("RGBY"));
        assert_eq!(round.round().turns(), 2);
    }

    #[test]
    fn player_round_with_seeded_secret_is_reproducible() {
        let a = PlayerRound::new(GameConfig::default(), &mut RandomSecret::seeded(9)).unwrap();
        let b = PlayerRound::new(GameConfig::default(), &mut RandomSecret::seeded(9)).unwrap();
        assert_eq!(a.reveal(), b.reveal());
    }

    #[test]
    fn player_round_rejects_bad_source() {
        let mut source = FixedSecret(code("RGB"));
        assert!(PlayerRound::new(GameConfig::default(), &mut source).is_err());
    }

    #[test]
    fn computer_round_plays_to_the_end() {
        let mut round = ComputerRound::new(GameConfig::default(), code("RGBY")).unwrap();
        assert_eq!(round.next_guess(), &code("RRGG"));

        let first = round.step().unwrap();
        assert_eq!(first.guess, code("RRGG"));
        assert_eq!(first.feedback, Feedback::new(1, 1));
        assert_eq!(first.candidates_before, 1296);
        assert_eq!(first.candidates_after, 208);
        assert_eq!(first.state, SolverState::Guessing);

        let second = round.step().unwrap();
        assert_eq!(second.guess, code("RGBB"));
        assert_eq!(second.candidates_after, 6);

        let third = round.step().unwrap();
        assert_eq!(third.state, SolverState::Won);
        assert!(round.is_won());
        assert_eq!(round.round().turns(), 3);

        assert_eq!(round.step(), Err(EngineError::RoundFinished));
    }

    #[test]
    fn computer_round_rejects_bad_secret() {
        assert!(ComputerRound::new(GameConfig::default(), code("RGBW")).is_err());
    }
}
