//! Wordle Engine
//!
//! Game engine for Wordle on boards from 3x3 to 7x7: word lists, daily
//! targets, guess scoring with duplicate-letter handling, hard mode, sessions
//! and per-player statistics.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_engine::core::{Feedback, LetterFeedback, Word};
//!
//! let guess = Word::new("thank").unwrap();
//! let target = Word::new("smart").unwrap();
//!
//! let feedback = Feedback::calculate(&guess, &target);
//! assert_eq!(feedback.marks()[2], LetterFeedback::Correct);
//! assert_eq!(feedback.to_string(), "Y-G--");
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Daily targets, evaluation and sessions
pub mod engine;

// Player statistics and accounts
pub mod stats;

// Persistence
pub mod storage;

pub mod error;

pub mod config;

pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{
    AccountError, ConfigurationError, Error, GuessError, HardModeViolation, Result, StorageError,
};
