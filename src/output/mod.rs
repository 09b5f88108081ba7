//! Terminal output formatting
//!
//! Themed tiles, boards and statistics for the CLI.

pub mod display;
pub mod formatters;
pub mod theme;

pub use display::{print_board, print_guess, print_outcome, print_preferences, print_statistics};
pub use theme::Theme;
