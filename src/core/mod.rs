//! Core domain types for Wordle
//!
//! Words and per-letter feedback. Everything here is pure: no randomness,
//! no I/O and no game state.

mod feedback;
mod word;

pub use feedback::{Classification, Feedback};
pub use word::{WORD_LEN, Word, WordError};
