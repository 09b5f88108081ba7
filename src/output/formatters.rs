//! Formatting utilities for terminal output

use super::theme::Theme;
use crate::core::{Feedback, GuessRecord};

/// Format feedback as an emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback, theme: Theme) -> String {
    feedback.marks().iter().map(|&mark| theme.emoji(mark)).collect()
}

/// Format a guess as a row of coloured tiles
#[must_use]
pub fn guess_tiles(record: &GuessRecord, theme: Theme) -> String {
    record
        .iter()
        .map(|(letter, mark)| theme.tile(letter, mark).to_string())
        .collect()
}

/// Placeholder row for an unused board line
#[must_use]
pub fn empty_row(cols: usize) -> String {
    " · ".repeat(cols)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64).round() as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
