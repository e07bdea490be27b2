//! Core domain types for Mastermind
//!
//! Colors, codes, feedback and the game configuration. Everything here is
//! pure and deterministic; the solver and game rounds build on top of it.

mod code;
mod color;
mod config;
mod error;
mod feedback;

pub use code::Code;
pub use color::Color;
pub use config::{DEFAULT_LENGTH, GameConfig, MAX_CODE_SPACE, MAX_LENGTH};
pub use error::{EngineError, Result};
pub use feedback::{Feedback, score};
