//! Cross-turn memory of yellow (present but misplaced) letters

use crate::core::{Classification, Feedback, WORD_LEN, Word};
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;

/// Letters seen `Present`, keyed to every position where that happened
///
/// Grows monotonically over a game; there is no removal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YellowMemory {
    positions: FxHashMap<u8, BTreeSet<usize>>,
}

impl YellowMemory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember every position of `guess` that `feedback` marks `Present`
    ///
    /// Re-recording a known position is a no-op.
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for i in 0..WORD_LEN {
            if feedback.get(i) == Classification::Present {
                self.positions
                    .entry(guess.char_at(i))
                    .or_default()
                    .insert(i);
            }
        }
    }

    /// Positions where `letter` has been yellow (empty if never)
    #[must_use]
    pub fn positions_for(&self, letter: u8) -> BTreeSet<usize> {
        self.positions.get(&letter).cloned().unwrap_or_default()
    }

    /// Whether `letter` has been yellow at `position`
    #[must_use]
    pub fn contains(&self, letter: u8, position: usize) -> bool {
        self.positions
            .get(&letter)
            .is_some_and(|set| set.contains(&position))
    }

    /// Every letter that has been yellow at least once, alphabetically
    #[must_use]
    pub fn known_letters(&self) -> BTreeSet<u8> {
        self.positions
            .iter()
            .filter(|(_, set)| !set.is_empty())
            .map(|(&letter, _)| letter)
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.values().all(BTreeSet::is_empty)
    }
}
