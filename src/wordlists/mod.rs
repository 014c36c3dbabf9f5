//! Word lists for Wordle
//!
//! Provides embedded word lists compiled into the binary for zero-cost access,
//! and the [`Vocabulary`] the game validates against.

mod embedded;
pub mod loader;
mod vocabulary;

pub use embedded::{GUESSES, GUESSES_COUNT, SOLUTIONS, SOLUTIONS_COUNT};
pub use vocabulary::Vocabulary;
