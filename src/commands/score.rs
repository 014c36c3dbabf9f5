//! Score a single guess against a known solution
//!
//! Handy for checking feedback rules without playing a game.

use crate::core::{Feedback, Word, WordError};

/// Result of scoring one guess
pub struct ScoreResult {
    pub solution: Word,
    pub guess: Word,
    pub feedback: Feedback,
}

/// Classify `guess` against `solution`
///
/// Neither word has to be in a word list.
///
/// # Errors
///
/// Returns an error if either input is not a 5-letter word.
pub fn score_guess(solution: &str, guess: &str) -> Result<ScoreResult, WordError> {
    let solution = Word::new(solution)?;
    let guess = Word::new(guess)?;
    let feedback = Feedback::classify(&solution, &guess);

    Ok(ScoreResult {
        solution,
        guess,
        feedback,
    })
}
