//! Alphabet letters not yet used in any accepted guess

use super::GameError;
use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;

const FULL_ALPHABET: u32 = (1 << 26) - 1;

/// Untried letters, stored as a 26-bit set
///
/// Only ever shrinks during a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterPool {
    bits: u32,
}

impl Default for LetterPool {
    fn default() -> Self {
        Self::new()
    }
}

const fn bit(letter: u8) -> u32 {
    1 << (letter - b'a')
}

impl LetterPool {
    /// Pool holding all 26 letters
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bits: FULL_ALPHABET,
        }
    }

    /// Remove every letter of `guess`
    pub fn consume(&mut self, guess: &Word) {
        for &letter in guess.chars() {
            self.remove(letter);
        }
    }

    /// Remove a single letter (no-op if already gone)
    pub fn remove(&mut self, letter: u8) {
        if letter.is_ascii_lowercase() {
            self.bits &= !bit(letter);
        }
    }

    #[must_use]
    pub const fn contains(&self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.bits & bit(letter) != 0
    }

    /// Remaining letters in alphabetical order
    #[must_use]
    pub fn remaining(&self) -> Vec<u8> {
        (b'a'..=b'z').filter(|&l| self.contains(l)).collect()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Draw uniformly from the remaining letters that are not in `solution`
    ///
    /// The pool itself is left untouched.
    ///
    /// # Errors
    /// Returns [`GameError::EmptyPool`] when every remaining letter is part of
    /// the solution.
    pub fn pick_random_excluding<R: Rng + ?Sized>(
        &self,
        solution: &Word,
        rng: &mut R,
    ) -> Result<u8, GameError> {
        let candidates: Vec<u8> = self
            .remaining()
            .into_iter()
            .filter(|&l| !solution.has_letter(l))
            .collect();

        candidates.choose(rng).copied().ok_or(GameError::EmptyPool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn new_pool_has_full_alphabet() {
        let pool = LetterPool::new();
        assert_eq!(pool.len(), 26);
        assert_eq!(pool.remaining(), (b'a'..=b'z').collect::<Vec<_>>());
    }

    #[test]
    fn consume_removes_each_letter_once() {
        let mut pool = LetterPool::new();
        pool.consume(&Word::new("speed").unwrap());
        assert_eq!(pool.len(), 22);
        assert!(!pool.contains(b'e'));
        assert!(pool.contains(b'a'));

        // overlap with letters already gone
        pool.consume(&Word::new("spade").unwrap());
        assert_eq!(pool.len(), 21);
    }

    #[test]
    fn pool_never_grows() {
        let mut pool = LetterPool::new();
        let mut last = pool.len();
        for word in ["crane", "slate", "crane", "moist", "abyss"] {
            pool.consume(&Word::new(word).unwrap());
            assert!(pool.len() <= last);
            last = pool.len();
        }
    }

    #[test]
    fn pick_never_returns_solution_letters() {
        let solution = Word::new("crane").unwrap();
        let pool = LetterPool::new();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let letter = pool.pick_random_excluding(&solution, &mut rng).unwrap();
            assert!(!solution.has_letter(letter));
            assert!(pool.contains(letter));
        }
    }

    #[test]
    fn pick_fails_when_only_solution_letters_remain() {
        let solution = Word::new("crane").unwrap();
        let mut pool = LetterPool::new();
        for letter in b'a'..=b'z' {
            if !solution.has_letter(letter) {
                pool.remove(letter);
            }
        }
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            pool.pick_random_excluding(&solution, &mut rng),
            Err(GameError::EmptyPool)
        );
        assert_eq!(pool.len(), 5);
    }
}
