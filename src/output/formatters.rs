//! Formatting utilities for terminal output

use crate::core::{Classification, Feedback};
use colored::{ColoredString, Colorize};

/// Format feedback as emoji squares
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    feedback.to_emoji()
}

/// One letter tile colored by its classification
#[must_use]
pub fn colored_tile(letter: char, classification: Classification) -> ColoredString {
    let tile = format!(" {} ", letter.to_ascii_uppercase());
    match classification {
        Classification::Correct => tile.black().on_green().bold(),
        Classification::Present => tile.black().on_yellow().bold(),
        Classification::Absent => tile.white().on_bright_black(),
    }
}

/// Whole guess as colored tiles
#[must_use]
pub fn colored_feedback(feedback: &Feedback) -> String {
    feedback
        .iter()
        .map(|lf| colored_tile(lf.letter, lf.classification).to_string())
        .collect()
}

/// Hint line, e.g. "a _ _ l _" uppercased with the length
#[must_use]
pub fn hint_line(hint_display: &str, word_length: usize) -> String {
    format!("{}  ({word_length} letters)", hint_display.to_uppercase())
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
