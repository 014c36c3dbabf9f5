//! Formatting utilities for terminal output

use crate::core::{Classification, Feedback, Word};
use crate::game::Board;
use colored::{ColoredString, Colorize};

/// A letter tile colored by its classification
#[must_use]
pub fn tile(letter: Option<u8>, class: Classification) -> ColoredString {
    let text = format!(" {} ", letter.map_or('_', |l| char::from(l.to_ascii_uppercase())));
    match (letter, class) {
        (None, _) => text.normal(),
        (_, Classification::Correct) => text.black().on_green().bold(),
        (_, Classification::Present) => text.black().on_yellow().bold(),
        (_, Classification::Absent) => text.white().on_bright_black(),
    }
}

/// A guess rendered as colored tiles
#[must_use]
pub fn feedback_row(guess: &Word, feedback: &Feedback) -> String {
    guess
        .chars()
        .iter()
        .zip(feedback.iter())
        .map(|(&letter, class)| tile(Some(letter), class).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The reveal board rendered as colored tiles
#[must_use]
pub fn board_row(board: &Board) -> String {
    board
        .cells()
        .iter()
        .map(|cell| tile(cell.letter, cell.class).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Space-separated letters, e.g. "a b d"
#[must_use]
pub fn letters_line(letters: &[u8]) -> String {
    letters
        .iter()
        .map(|&l| char::from(l).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
