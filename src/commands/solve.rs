//! Code solving command
//!
//! Lets the solver crack a specific secret and returns the solution path.

use crate::core::{Code, EngineError, Feedback, GameConfig};
use crate::game::ComputerRound;
use crate::solver::SolverState;
use tracing::info;

/// Configuration for solving a code
pub struct SolveConfig {
    pub secret: Code,
    pub max_guesses: usize,
}

impl SolveConfig {
    /// Solve `secret` with no practical guess limit
    #[must_use]
    pub const fn new(secret: Code) -> Self {
        Self {
            secret,
            max_guesses: usize::MAX,
        }
    }
}

/// Result of solving a code
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub secret: Code,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub code: Code,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve a specific secret with the default solver
///
/// # Errors
///
/// Returns an error if:
/// - The secret does not fit the configuration
/// - The solver reports inconsistent feedback (cannot happen for honest scoring)
pub fn solve_code(config: SolveConfig, game: &GameConfig) -> Result<SolveResult, EngineError> {
    let mut round = ComputerRound::new(game.clone(), config.secret.clone())?;
    let mut guesses: Vec<GuessStep> = Vec::new();

    while guesses.len() < config.max_guesses {
        let turn = round.step()?;

        guesses.push(GuessStep {
            code: turn.guess,
            feedback: turn.feedback,
            candidates_before: turn.candidates_before,
            candidates_after: turn.candidates_after,
        });

        if turn.state == SolverState::Won {
            info!(secret = %config.secret, guesses = guesses.len(), "solved");
            return Ok(SolveResult {
                success: true,
                guesses,
                secret: config.secret,
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        secret: config.secret,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> Code {
        s.parse().unwrap()
    }

    #[test]
    fn solve_code_succeeds() {
        let result = solve_code(SolveConfig::new(code("RGBY")), &GameConfig::default()).unwrap();

        assert!(result.success);
        assert_eq!(result.guesses.len(), 3);
        assert_eq!(result.guesses.last().unwrap().code, code("RGBY"));
    }

    #[test]
    fn solve_records_history() {
        let result = solve_code(SolveConfig::new(code("OYBG")), &GameConfig::default()).unwrap();

        assert_eq!(result.guesses[0].code, code("RRGG"));
        assert_eq!(result.guesses[0].candidates_before, 1296);
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.candidates_after >= 1);
        }
        assert_eq!(result.guesses.last().unwrap().candidates_after, 1);
    }

    #[test]
    fn solve_invalid_secret_returns_error() {
        let result = solve_code(SolveConfig::new(code("RGB")), &GameConfig::default());
        assert!(matches!(
            result,
            Err(EngineError::InvalidInputLength { .. })
        ));
    }

    #[test]
    fn solve_with_max_guesses_limit() {
        let mut config = SolveConfig::new(code("PPPP"));
        config.max_guesses = 3;

        let result = solve_code(config, &GameConfig::default()).unwrap();

        // PPPP takes five guesses from the RRGG opening
        assert!(!result.success);
        assert_eq!(result.guesses.len(), 3);
    }

    #[test]
    fn solve_perfect_first_guess() {
        let result = solve_code(SolveConfig::new(code("RRGG")), &GameConfig::default()).unwrap();
        assert!(result.success);
        assert_eq!(result.guesses.len(), 1);
        assert!(result.guesses[0].feedback.is_perfect(4));
    }
}
