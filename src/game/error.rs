//! Error types for game operations

use super::GameStatus;
use thiserror::Error;

/// Rejections raised by [`Game`](super::Game) operations
///
/// Every variant leaves the game exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Guess is malformed or not in the guess vocabulary.
    #[error("'{guess}' is not a valid word")]
    InvalidGuess { guess: String },

    /// Guess ignores feedback from earlier turns while hard mode is on.
    #[error("'{guess}' does not use the hints revealed so far")]
    HardModeViolation { guess: String },

    /// Every untried letter belongs to the solution.
    #[error("no letters left to eliminate")]
    EmptyPool,

    /// A mutating call was made after the game ended.
    #[error("game is already over ({status})")]
    GameAlreadyTerminal { status: GameStatus },

    /// The solution vocabulary has no words to draw from.
    #[error("solution word list is empty")]
    EmptyVocabulary,
}

impl GameError {
    /// Whether the player can simply try again
    ///
    /// Terminal-state and vocabulary errors point at a caller bug instead.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidGuess { .. } | Self::HardModeViolation { .. } | Self::EmptyPool
        )
    }
}
