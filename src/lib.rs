//! Mastermind
//!
//! A Mastermind code-breaking game with a constraint-based solver: the
//! computer either scores your guesses or cracks your secret by keeping only
//! the codes consistent with every feedback so far.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Code, GameConfig, score};
//! use mastermind::solver::{Solver, SolverState};
//!
//! // Score a guess
//! let guess: Code = "RRGG".parse().unwrap();
//! let secret: Code = "RGBY".parse().unwrap();
//! let feedback = score(&guess, &secret).unwrap();
//! assert_eq!((feedback.exact(), feedback.misplaced()), (1, 1));
//!
//! // Let the solver crack it
//! let mut solver = Solver::new(GameConfig::default());
//! loop {
//!     let guess = solver.next_guess().clone();
//!     let feedback = score(&guess, &secret).unwrap();
//!     if solver.record_feedback(&guess, feedback).unwrap() == SolverState::Won {
//!         break;
//!     }
//! }
//! assert_eq!(solver.history().len(), 3);
//! ```

// Core domain types
pub mod core;

// Candidate-elimination solver
pub mod solver;

// Rounds for both game modes
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
