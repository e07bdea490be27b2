//! Formatting utilities for terminal output

use crate::core::{Code, Color, Feedback};
use colored::{ColoredString, Colorize};

/// A color letter on a background of that color
#[must_use]
pub fn color_peg(color: Color) -> ColoredString {
    let (r, g, b) = color.rgb();
    format!(" {} ", color.letter())
        .black()
        .bold()
        .on_truecolor(r, g, b)
}

/// Format a code as a row of colored pegs
#[must_use]
pub fn code_to_pegs(code: &Code) -> String {
    code.colors()
        .iter()
        .map(|&c| color_peg(c).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format feedback as black/white key pegs
#[must_use]
pub fn feedback_to_pegs(feedback: Feedback, length: usize) -> String {
    let pegs = feedback.to_pegs(length);
    format!("{} {}", pegs.bright_white(), feedback.to_string().bright_black())
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
