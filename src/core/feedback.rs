//! Per-letter feedback for a guess
//!
//! Each position of a guess is classified as:
//! - `Correct` (green): same letter as the solution at that position
//! - `Present` (yellow): letter occurs at another, still unclaimed, solution position
//! - `Absent` (gray): letter does not occur, or every occurrence is already claimed

use super::word::{WORD_LEN, Word};
use std::fmt;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Classification {
    #[default]
    Absent,
    Present,
    Correct,
}

impl Classification {
    /// ASCII symbol used in feedback strings (`G`, `Y`, `-`)
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    /// Emoji square used in the share grid
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Classifications for every position of one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Feedback([Classification; WORD_LEN]);

impl Feedback {
    /// All greens
    pub const PERFECT: Self = Self([Classification::Correct; WORD_LEN]);

    #[must_use]
    pub const fn new(classes: [Classification; WORD_LEN]) -> Self {
        Self(classes)
    }

    /// Classify `guess` against `solution`
    ///
    /// # Algorithm
    /// 1. Mark every exact positional match `Correct`
    /// 2. Collect the solution letters at the remaining positions into a pool
    /// 3. Left to right over non-green positions, a letter still in the pool is
    ///    `Present` and consumes one occurrence; otherwise it is `Absent`
    ///
    /// Leftmost positions win when several compete for the same letter.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, Word};
    ///
    /// let solution = Word::new("crane").unwrap();
    /// let guess = Word::new("crate").unwrap();
    /// assert_eq!(Feedback::classify(&solution, &guess).to_string(), "GGG-G");
    /// ```
    #[must_use]
    pub fn classify(solution: &Word, guess: &Word) -> Self {
        let mut result = [Classification::Absent; WORD_LEN];
        let mut remaining = [0u8; 26];

        // Allow: index drives guess[i], solution[i] and result[i] together
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            let letter = solution.char_at(i);
            if guess.char_at(i) == letter {
                result[i] = Classification::Correct;
            } else {
                remaining[usize::from(letter - b'a')] += 1;
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if result[i] == Classification::Correct {
                continue;
            }
            let slot = &mut remaining[usize::from(guess.char_at(i) - b'a')];
            if *slot > 0 {
                *slot -= 1;
                result[i] = Classification::Present;
            }
        }

        Self(result)
    }

    /// Check if every position is green
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.iter().all(|&c| c == Classification::Correct)
    }

    /// Classification at `position`
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn get(&self, position: usize) -> Classification {
        self.0[position]
    }

    /// Number of positions with the given classification
    #[must_use]
    pub fn count(&self, class: Classification) -> usize {
        self.0.iter().filter(|&&c| c == class).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = Classification> + '_ {
        self.0.iter().copied()
    }

    /// Emoji row such as "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|c| c.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for class in &self.0 {
            write!(f, "{}", class.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    /// Parse strings like "GY-GY" or "🟩🟨⬜🟩🟨"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let classes: Vec<Classification> = s
            .chars()
            .map(Classification::from_symbol)
            .collect::<Option<_>>()
            .ok_or_else(|| format!("Invalid feedback string: {s}"))?;

        let classes: [Classification; WORD_LEN] = classes
            .try_into()
            .map_err(|_| format!("Feedback must have 5 positions: {s}"))?;

        Ok(Self(classes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(solution: &str, guess: &str) -> String {
        let solution = Word::new(solution).unwrap();
        let guess = Word::new(guess).unwrap();
        Feedback::classify(&solution, &guess).to_string()
    }

    #[test]
    fn classify_all_absent() {
        assert_eq!(classify("fghij", "abcde"), "-----");
    }

    #[test]
    fn classify_same_word_is_perfect() {
        for word in ["crane", "slate", "eerie", "speed", "aback"] {
            let w = Word::new(word).unwrap();
            assert_eq!(Feedback::classify(&w, &w), Feedback::PERFECT);
        }
    }

    #[test]
    fn classify_unused_solution_letter() {
        // t is absent, n is never matched
        assert_eq!(classify("crane", "crate"), "GGG-G");
    }

    #[test]
    fn classify_duplicate_guess_letters_consume_greedily() {
        // speed has two e's, neither matched positionally by eerie
        // the two leftmost e's claim them, the third is absent
        assert_eq!(classify("speed", "eerie"), "YY---");
    }

    #[test]
    fn classify_green_claims_before_yellow() {
        // floor: second o of robot is green, first o takes the remaining o
        assert_eq!(classify("floor", "robot"), "YY-G-");
        // both l's of hello are claimed by greens, the leading l gets nothing
        assert_eq!(classify("hello", "lolly"), "-YGG-");
    }

    #[test]
    fn classify_single_occurrence_not_double_counted() {
        // the only e of crane is taken by the green, stray e's stay gray
        assert_eq!(classify("crane", "geese"), "----G");
        // leftmost stray e wins the only e when there is no green
        assert_eq!(classify("abled", "eerie"), "Y----");
    }

    #[test]
    fn classify_is_deterministic() {
        let solution = Word::new("speed").unwrap();
        let guess = Word::new("erase").unwrap();
        assert_eq!(
            Feedback::classify(&solution, &guess),
            Feedback::classify(&solution, &guess)
        );
    }

    #[test]
    fn present_never_exceeds_unclaimed_occurrences() {
        let words = ["speed", "eerie", "geese", "crane", "llama", "hello", "robot", "floor"];
        for s in words {
            for g in words {
                let solution = Word::new(s).unwrap();
                let guess = Word::new(g).unwrap();
                let feedback = Feedback::classify(&solution, &guess);
                for letter in b'a'..=b'z' {
                    let in_solution = solution.positions_of(letter).len();
                    let greens = (0..WORD_LEN)
                        .filter(|&i| {
                            guess.char_at(i) == letter
                                && feedback.get(i) == Classification::Correct
                        })
                        .count();
                    let yellows = (0..WORD_LEN)
                        .filter(|&i| {
                            guess.char_at(i) == letter
                                && feedback.get(i) == Classification::Present
                        })
                        .count();
                    assert!(yellows <= in_solution - greens, "{s} vs {g}");
                }
            }
        }
    }

    #[test]
    fn correct_means_same_letter() {
        let solution = Word::new("geese").unwrap();
        let guess = Word::new("eerie").unwrap();
        let feedback = Feedback::classify(&solution, &guess);
        for i in 0..WORD_LEN {
            if feedback.get(i) == Classification::Correct {
                assert_eq!(solution.char_at(i), guess.char_at(i));
            }
        }
    }

    #[test]
    fn feedback_parse_and_render() {
        let parsed: Feedback = "GY-gy".parse().unwrap();
        let emoji: Feedback = "🟩🟨⬜🟩🟨".parse().unwrap();
        assert_eq!(parsed, emoji);
        assert_eq!(parsed.to_string(), "GY-GY");
        assert_eq!(parsed.to_emoji(), "🟩🟨⬜🟩🟨");
        assert_eq!(parsed.count(Classification::Correct), 2);
        assert_eq!(parsed.count(Classification::Present), 2);
    }

    #[test]
    fn feedback_parse_invalid() {
        assert!("GYGGYG".parse::<Feedback>().is_err());
        assert!("GYG".parse::<Feedback>().is_err());
        assert!("GXGGY".parse::<Feedback>().is_err());
        assert!("".parse::<Feedback>().is_err());
    }
}
