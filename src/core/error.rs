//! Engine error type

use super::{Color, Feedback};
use thiserror::Error;

/// Errors raised by the scoring engine, the solver and game rounds
///
/// Every variant is recoverable by starting a new round.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A code does not have the configured number of slots
    #[error("Code must be exactly {expected} colors long, got {actual}")]
    InvalidInputLength { expected: usize, actual: usize },

    /// A code uses a color that is not part of the configured palette
    #[error("Color {0} is not part of the configured palette")]
    UnknownColor(Color),

    /// Feedback counts cannot occur for the configured code length
    #[error("Feedback {feedback} is impossible for codes of length {length}")]
    InvalidFeedback { feedback: Feedback, length: usize },

    /// Filtering removed every candidate, so the feedback history is inconsistent
    #[error("No candidate code is consistent with feedback {feedback} for guess {guess}")]
    InvariantViolation { guess: String, feedback: Feedback },

    /// The round has already been won
    #[error("The round is already over, start a new round")]
    RoundFinished,

    /// The palette or code length cannot be used
    #[error("Invalid game configuration: {0}")]
    InvalidConfig(String),

    /// Text could not be parsed into a color, code or feedback
    #[error("Could not parse {0}")]
    Parse(String),
}

/// Result alias used throughout the engine
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let err = EngineError::InvalidInputLength {
            expected: 4,
            actual: 3,
        };
        assert_eq!(err.to_string(), "Code must be exactly 4 colors long, got 3");

        let err = EngineError::UnknownColor(Color::Black);
        assert_eq!(
            err.to_string(),
            "Color Black is not part of the configured palette"
        );

        let err = EngineError::InvalidFeedback {
            feedback: Feedback::new(3, 2),
            length: 4,
        };
        assert_eq!(
            err.to_string(),
            "Feedback (3, 2) is impossible for codes of length 4"
        );
    }
}
