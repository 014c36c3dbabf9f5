//! Hard-mode admissibility rules
//!
//! A guess is admissible only if it honors all feedback gathered so far.
//! Callers only learn pass/fail; the specific rule is exposed for logging.

use super::{Attempt, LetterPool, YellowMemory};
use crate::core::{Classification, Feedback, WORD_LEN, Word};
use std::fmt;

/// The individual hard-mode rules, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HardModeRule {
    /// Greens from the previous guess must stay in place
    RepeatGreens,
    /// Every letter ever seen yellow must be used
    UseAllYellows,
    /// A yellow letter may not return to a position it was yellow at
    NoRepeatPosition,
    /// A letter absent from the solution may not be typed again
    NoKnownAbsentRetry,
}

impl fmt::Display for HardModeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::RepeatGreens => "repeat greens",
            Self::UseAllYellows => "use all yellows",
            Self::NoRepeatPosition => "no repeat position",
            Self::NoKnownAbsentRetry => "no known-absent retry",
        };
        f.write_str(name)
    }
}

/// First rule `guess` breaks, if any
///
/// `prior` is the previously accepted attempt; `pool` must not yet include
/// the effects of `guess`.
#[must_use]
pub fn violation(
    guess: &Word,
    solution: &Word,
    prior: Option<&Attempt>,
    memory: &YellowMemory,
    pool: &LetterPool,
) -> Option<HardModeRule> {
    if let Some(prior) = prior {
        let greens_kept = (0..WORD_LEN).all(|i| {
            prior.feedback.get(i) != Classification::Correct
                || guess.char_at(i) == prior.guess.char_at(i)
        });
        if !greens_kept {
            return Some(HardModeRule::RepeatGreens);
        }
    }

    if !memory.known_letters().into_iter().all(|l| guess.has_letter(l)) {
        return Some(HardModeRule::UseAllYellows);
    }

    if (0..WORD_LEN).any(|i| memory.contains(guess.char_at(i), i)) {
        return Some(HardModeRule::NoRepeatPosition);
    }

    // Already typed is approximated by absence from the pool
    let feedback = Feedback::classify(solution, guess);
    let retries_absent = (0..WORD_LEN).any(|i| {
        let letter = guess.char_at(i);
        feedback.get(i) == Classification::Absent
            && !solution.has_letter(letter)
            && !pool.contains(letter)
    });
    if retries_absent {
        return Some(HardModeRule::NoKnownAbsentRetry);
    }

    None
}

/// Whether `guess` passes every hard-mode rule
#[must_use]
pub fn validate(
    guess: &Word,
    solution: &Word,
    prior: Option<&Attempt>,
    memory: &YellowMemory,
    pool: &LetterPool,
) -> bool {
    violation(guess, solution, prior, memory, pool).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Setup {
        solution: Word,
        prior: Option<Attempt>,
        memory: YellowMemory,
        pool: LetterPool,
    }

    impl Setup {
        fn new(solution: &str) -> Self {
            Self {
                solution: Word::new(solution).unwrap(),
                prior: None,
                memory: YellowMemory::new(),
                pool: LetterPool::new(),
            }
        }

        fn play(mut self, guess: &str) -> Self {
            let guess = Word::new(guess).unwrap();
            let feedback = Feedback::classify(&self.solution, &guess);
            self.memory.record(&guess, &feedback);
            self.pool.consume(&guess);
            self.prior = Some(Attempt { guess, feedback });
            self
        }

        fn check(&self, guess: &str) -> Option<HardModeRule> {
            violation(
                &Word::new(guess).unwrap(),
                &self.solution,
                self.prior.as_ref(),
                &self.memory,
                &self.pool,
            )
        }
    }

    #[test]
    fn first_guess_is_always_admissible() {
        let setup = Setup::new("crane");
        assert_eq!(setup.check("zzzzz"), None);
        assert!(validate(
            &Word::new("fuzzy").unwrap(),
            &setup.solution,
            None,
            &setup.memory,
            &setup.pool
        ));
    }

    #[test]
    fn changing_a_green_is_rejected() {
        // crate vs crane: greens at 0, 1, 2, 4
        let setup = Setup::new("crane").play("crate");
        assert_eq!(setup.check("drape"), Some(HardModeRule::RepeatGreens));
        assert_eq!(setup.check("crane"), None);
    }

    #[test]
    fn every_yellow_letter_must_be_used() {
        // rates vs tears: r a t e yellow, s green
        let setup = Setup::new("tears").play("rates");
        // drops the t
        assert_eq!(setup.check("areas"), Some(HardModeRule::UseAllYellows));
        assert_eq!(setup.check("tears"), None);
    }

    #[test]
    fn yellows_from_older_turns_still_count() {
        // after vs tapir: a and t yellow; pious then leaves a out entirely
        let setup = Setup::new("tapir").play("after").play("pious");
        assert!(setup.memory.contains(b'a', 0));
        assert!(setup.memory.contains(b'p', 0));
        // omits the a seen yellow in turn one
        assert_eq!(setup.check("split"), Some(HardModeRule::UseAllYellows));
    }

    #[test]
    fn yellow_letter_back_at_same_position_is_rejected() {
        // brake vs habit: a yellow at 2, b yellow at 0
        let setup = Setup::new("habit").play("brake");
        assert!(setup.memory.contains(b'a', 2));
        // a at position 2 again, even though a is used
        assert_eq!(setup.check("abase"), Some(HardModeRule::NoRepeatPosition));
        assert_eq!(setup.check("habit"), None);
    }

    #[test]
    fn retyping_a_known_absent_letter_is_rejected() {
        // fjord vs crane: r yellow, f j o d never in the solution
        let setup = Setup::new("crane").play("fjord");
        // brine: b i n e untried, r moved, but nothing absent retried
        assert_eq!(setup.check("brine"), None);
        // d was already typed and is not in crane
        assert_eq!(setup.check("drink"), Some(HardModeRule::NoKnownAbsentRetry));
    }

    #[test]
    fn surplus_duplicate_of_a_solution_letter_is_not_known_absent() {
        // geese vs crane: only the final e is green, e is no longer in the pool
        let setup = Setup::new("crane").play("geese");
        assert!(!setup.pool.contains(b'e'));

        // emcee: c yellow, e green at 4, the other e's gray as surplus
        let emcee = Word::new("emcee").unwrap();
        let feedback = Feedback::classify(&setup.solution, &emcee);
        assert_eq!(feedback.to_string(), "--Y-G");
        assert_eq!(setup.check("emcee"), None);
        assert_eq!(setup.check("crane"), None);
    }

    #[test]
    fn eliminated_letters_count_as_known_absent() {
        let mut setup = Setup::new("crane");
        assert_eq!(setup.check("murky"), None);

        setup.pool.remove(b'm');
        assert_eq!(setup.check("murky"), Some(HardModeRule::NoKnownAbsentRetry));
        // a solution letter is never known-absent, even once out of the pool
        setup.pool.remove(b'c');
        assert_eq!(setup.check("crane"), None);
    }

    #[test]
    fn untried_absent_letters_are_fine() {
        let setup = Setup::new("crane").play("fjord");
        // m, u, k, y are all fresh even though absent
        assert_eq!(setup.check("murky"), None);
    }
}
