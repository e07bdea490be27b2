//! Main solver interface

use super::{CandidateSet, FirstCandidate, GuessSelector};
use crate::core::{Code, EngineError, Feedback, GameConfig};
use tracing::{debug, warn};

/// Where the solver stands in the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverState {
    /// Waiting for feedback on the current guess
    Guessing,
    /// The last recorded guess scored perfect feedback
    Won,
}

/// Constraint-based code breaker
///
/// Owns the candidate set for one round at a time. Each recorded
/// (guess, feedback) pair removes the candidates that would have scored
/// differently, so the true secret is never eliminated as long as the
/// feedback is honest.
pub struct Solver<S: GuessSelector = FirstCandidate> {
    config: GameConfig,
    selector: S,
    candidates: CandidateSet,
    history: Vec<(Code, Feedback)>,
    current_guess: Code,
    state: SolverState,
    failure: Option<EngineError>,
}

impl Solver {
    /// Create a solver using the first-candidate selector
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Feedback, GameConfig};
    /// use mastermind::solver::{Solver, SolverState};
    ///
    /// let mut solver = Solver::new(GameConfig::default());
    /// let guess = solver.next_guess().clone();
    /// assert_eq!(guess.to_string(), "RRGG");
    ///
    /// let state = solver.record_feedback(&guess, Feedback::new(4, 0)).unwrap();
    /// assert_eq!(state, SolverState::Won);
    /// ```
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_selector(config, FirstCandidate)
    }
}

impl<S: GuessSelector> Solver<S> {
    /// Create a solver with a custom guess selector
    #[must_use]
    pub fn with_selector(config: GameConfig, selector: S) -> Self {
        let candidates = CandidateSet::full(&config);
        let current_guess = config.opening_guess();

        Self {
            config,
            selector,
            candidates,
            history: Vec::new(),
            current_guess,
            state: SolverState::Guessing,
            failure: None,
        }
    }

    /// Reset to the full code space and the opening guess
    pub fn new_round(&mut self) {
        self.candidates = CandidateSet::full(&self.config);
        self.current_guess = self.config.opening_guess();
        self.history.clear();
        self.state = SolverState::Guessing;
        self.failure = None;
        debug!(candidates = self.candidates.len(), "solver round reset");
    }

    /// The guess to play next
    ///
    /// The first guess of every round is the configuration's fixed
    /// [opening guess](GameConfig::opening_guess). After a win this is the
    /// winning code.
    #[must_use]
    pub fn next_guess(&self) -> &Code {
        &self.current_guess
    }

    /// Apply the feedback observed for `guess`
    ///
    /// Keeps only candidates that score `feedback` against `guess`, then
    /// either declares the round won or moves on to the next guess.
    ///
    /// # Errors
    /// - [`EngineError::RoundFinished`] if the round is already won
    /// - [`EngineError::InvalidInputLength`] / [`EngineError::UnknownColor`]
    ///   if `guess` does not fit the configuration
    /// - [`EngineError::InvalidFeedback`] for peg counts that cannot occur
    /// - [`EngineError::InvariantViolation`] if no candidate is consistent with
    ///   the feedback history. The candidate set is left as it was and every
    ///   further call fails the same way until [`new_round`](Self::new_round).
    pub fn record_feedback(
        &mut self,
        guess: &Code,
        feedback: Feedback,
    ) -> Result<SolverState, EngineError> {
        if self.state == SolverState::Won {
            return Err(EngineError::RoundFinished);
        }
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }

        self.config.validate(guess)?;
        self.config.validate_feedback(feedback)?;

        let before = self.candidates.len();
        let remaining = self.candidates.filtered(guess, feedback);
        if remaining.is_empty() {
            return Err(self.fail(guess, feedback));
        }

        self.candidates = remaining;
        self.history.push((guess.clone(), feedback));
        debug!(
            %guess,
            %feedback,
            before,
            after = self.candidates.len(),
            "pruned candidates"
        );

        if feedback.is_perfect(self.config.length()) {
            self.current_guess = guess.clone();
            self.state = SolverState::Won;
            debug!(turns = self.history.len(), "solver won");
            return Ok(SolverState::Won);
        }

        let Some(next) = self.selector.select(&self.candidates).cloned() else {
            return Err(self.fail(guess, feedback));
        };
        self.current_guess = next;
        Ok(SolverState::Guessing)
    }

    fn fail(&mut self, guess: &Code, feedback: Feedback) -> EngineError {
        warn!(%guess, %feedback, "feedback is inconsistent with every candidate");
        let err = EngineError::InvariantViolation {
            guess: guess.to_string(),
            feedback,
        };
        self.failure = Some(err.clone());
        err
    }

    /// Current state of the round
    #[inline]
    #[must_use]
    pub const fn state(&self) -> SolverState {
        self.state
    }

    /// Codes still consistent with every recorded feedback
    #[inline]
    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// Number of remaining candidates
    #[inline]
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Recorded (guess, feedback) pairs of this round, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[(Code, Feedback)] {
        &self.history
    }

    /// Configuration the solver was built for
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }
}
