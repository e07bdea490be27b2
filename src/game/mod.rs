//! Game rounds for both modes
//!
//! The building blocks a presentation shell drives: a round that owns the
//! secret, the per-mode state machines, secret generation and slot-by-slot
//! code entry.

mod builder;
mod modes;
mod round;
mod secret;

pub use builder::CodeBuilder;
pub use modes::{ComputerRound, Mode, PlayerRound, Turn};
pub use round::{GameRound, RoundStatus};
pub use secret::{FixedSecret, RandomSecret, SecretSource};
