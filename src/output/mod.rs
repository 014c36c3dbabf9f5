//! Terminal output formatting
//!
//! Colored rendering for the line-based game.

pub mod display;
pub mod formatters;

pub use display::{
    print_game_over, print_reveal, print_score_result, print_statistics, print_turn,
};
