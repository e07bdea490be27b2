//! Interactive TUI interface
//!
//! Full-screen board for both game modes, built on ratatui and crossterm.

mod app;
mod rendering;

pub use app::{App, HistoryEntry, Message, MessageStyle, Phase, Statistics, run_tui};
