//! Core domain types for Wordle
//!
//! Words, board sizes and feedback. Everything here is pure and has no I/O.

mod board;
mod feedback;
mod word;

pub use board::BoardConfig;
pub use feedback::{Feedback, GuessRecord, LetterFeedback};
pub use word::{MAX_LEN, MIN_LEN, Word, WordError};
