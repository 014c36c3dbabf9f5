//! Solution and guess vocabularies

use super::loader::words_from_slice;
use super::{GUESSES, SOLUTIONS};
use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// Words the game may pick as solutions, and words it accepts as guesses
///
/// Every solution is also accepted as a guess.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    solutions: Vec<Word>,
    guesses: FxHashSet<String>,
}

impl Vocabulary {
    #[must_use]
    pub fn new(solutions: Vec<Word>, guesses: Vec<Word>) -> Self {
        let guesses = guesses
            .iter()
            .chain(&solutions)
            .map(|w| w.text().to_string())
            .collect();
        Self { solutions, guesses }
    }

    /// Vocabulary built from the word lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(SOLUTIONS), words_from_slice(GUESSES))
    }

    /// Whether `word` is an acceptable guess
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.guesses.contains(word.text())
    }

    /// Pick a solution uniformly at random
    pub fn choose_solution<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.solutions.choose(rng)
    }

    #[must_use]
    pub fn solution_count(&self) -> usize {
        self.solutions.len()
    }

    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.guesses.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn solutions_are_always_guessable() {
        let vocab = Vocabulary::new(
            words_from_slice(&["crane"]),
            words_from_slice(&["slate", "irate"]),
        );
        assert!(vocab.contains(&Word::new("crane").unwrap()));
        assert!(vocab.contains(&Word::new("slate").unwrap()));
        assert!(!vocab.contains(&Word::new("pluck").unwrap()));
        assert_eq!(vocab.guess_count(), 3);
        assert_eq!(vocab.solution_count(), 1);
    }

    #[test]
    fn duplicate_guesses_collapse() {
        let vocab = Vocabulary::new(
            words_from_slice(&["crane"]),
            words_from_slice(&["crane", "CRANE"]),
        );
        assert_eq!(vocab.guess_count(), 1);
    }

    #[test]
    fn choose_solution_is_seedable() {
        let vocab = Vocabulary::embedded();
        let a = vocab
            .choose_solution(&mut StdRng::seed_from_u64(5))
            .cloned();
        let b = vocab
            .choose_solution(&mut StdRng::seed_from_u64(5))
            .cloned();
        assert!(a.is_some());
        assert_eq!(a, b);
    }

    #[test]
    fn empty_solutions_choose_nothing() {
        let vocab = Vocabulary::new(Vec::new(), words_from_slice(&["crane"]));
        assert!(vocab.choose_solution(&mut StdRng::seed_from_u64(5)).is_none());
    }

    #[test]
    fn embedded_vocabulary_accepts_common_words() {
        let vocab = Vocabulary::embedded();
        for word in ["crane", "crate", "speed", "eerie", "slate"] {
            assert!(vocab.contains(&Word::new(word).unwrap()), "{word}");
        }
    }
}
