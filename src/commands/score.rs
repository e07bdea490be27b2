//! Scoring command
//!
//! Scores one guess against one target code.

use crate::core::{Code, EngineError, Feedback, GameConfig};

/// A scored guess
pub struct ScoreResult {
    pub guess: Code,
    pub target: Code,
    pub feedback: Feedback,
    pub length: usize,
}

/// Score `guess` against `target` under `config`
///
/// # Errors
///
/// Returns an error if either code has the wrong length or uses a color
/// outside the palette.
pub fn score_codes(
    guess: Code,
    target: Code,
    config: &GameConfig,
) -> Result<ScoreResult, EngineError> {
    let feedback = config.score(&guess, &target)?;
    Ok(ScoreResult {
        guess,
        target,
        feedback,
        length: config.length(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_valid_codes() {
        let result = score_codes(
            "RRRR".parse().unwrap(),
            "RGBR".parse().unwrap(),
            &GameConfig::default(),
        )
        .unwrap();
        assert_eq!(result.feedback, Feedback::new(2, 0));
        assert_eq!(result.length, 4);
    }

    #[test]
    fn rejects_codes_outside_config() {
        let config = GameConfig::default();
        assert!(score_codes("RGBW".parse().unwrap(), "RGBY".parse().unwrap(), &config).is_err());
        assert!(score_codes("RGBY".parse().unwrap(), "RGB".parse().unwrap(), &config).is_err());
    }
}
