//! Game state machine
//!
//! A [`Game`] owns everything that changes during one round: the turn
//! counter, yellow memory, letter pool, accepted attempts and the reveal
//! board. Every operation either applies fully or leaves the game untouched.

use super::{GameError, LetterPool, YellowMemory, hard_mode};
use crate::core::{Classification, Feedback, WORD_LEN, Word};
use crate::wordlists::Vocabulary;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::fmt;
use tracing::{debug, info};

/// Number of guesses a player gets
pub const MAX_TURNS: usize = 6;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Waiting for guess number `turn` (1-based)
    InProgress { turn: usize },
    /// Solved with the given number of guesses
    Won { turns: usize },
    /// Every guess used without solving
    Lost,
    /// Player gave up
    Aborted,
    /// Reveal assists filled in the whole word; not a win
    Revealed,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress { .. })
    }

    #[must_use]
    pub const fn is_won(self) -> bool {
        matches!(self, Self::Won { .. })
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress { turn } => write!(f, "in progress, turn {turn}"),
            Self::Won { turns } => write!(f, "won in {turns}"),
            Self::Lost => f.write_str("lost"),
            Self::Aborted => f.write_str("aborted"),
            Self::Revealed => f.write_str("revealed"),
        }
    }
}

/// One accepted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub guess: Word,
    pub feedback: Feedback,
}

/// A single square of the reveal board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub letter: Option<u8>,
    pub class: Classification,
}

/// Snapshot of the latest attempt that reveals are drawn onto
///
/// Starts blank, is reset from every accepted attempt and is edited in place
/// by [`Game::reveal_letter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Cell; WORD_LEN],
}

impl Board {
    fn from_attempt(attempt: &Attempt) -> Self {
        let mut cells = [Cell::default(); WORD_LEN];
        for (i, cell) in cells.iter_mut().enumerate() {
            *cell = Cell {
                letter: Some(attempt.guess.char_at(i)),
                class: attempt.feedback.get(i),
            };
        }
        Self { cells }
    }

    #[must_use]
    pub const fn cells(&self) -> &[Cell; WORD_LEN] {
        &self.cells
    }

    /// Positions not yet green
    #[must_use]
    pub fn open_positions(&self) -> Vec<usize> {
        (0..WORD_LEN)
            .filter(|&i| self.cells[i].class != Classification::Correct)
            .collect()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells
            .iter()
            .all(|cell| cell.class == Classification::Correct)
    }

    /// Force `position` to the solution letter and drop yellows it invalidates
    ///
    /// Returns the positions downgraded from `Present` to `Absent`.
    fn reveal(&mut self, position: usize, solution: &Word) -> Vec<usize> {
        let letter = solution.char_at(position);
        self.cells[position] = Cell {
            letter: Some(letter),
            class: Classification::Correct,
        };

        // Yellows for this letter may only cover occurrences still unclaimed
        let mut unclaimed = solution
            .positions_of(letter)
            .iter()
            .filter(|&&k| self.cells[k].class != Classification::Correct)
            .count();

        let mut downgraded = Vec::new();
        for (i, cell) in self.cells.iter_mut().enumerate() {
            if cell.letter != Some(letter) || cell.class != Classification::Present {
                continue;
            }
            if unclaimed > 0 {
                unclaimed -= 1;
            } else {
                cell.class = Classification::Absent;
                downgraded.push(i);
            }
        }
        downgraded
    }
}

/// Result of an accepted guess, for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    pub attempt: Attempt,
    pub status: GameStatus,
    pub remaining: Vec<u8>,
}

/// Result of a reveal assist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reveal {
    pub position: usize,
    pub letter: u8,
    pub downgraded: Vec<usize>,
    pub status: GameStatus,
}

/// One round of Wordle
pub struct Game<'a> {
    vocabulary: &'a Vocabulary,
    solution: Word,
    hard_mode: bool,
    status: GameStatus,
    memory: YellowMemory,
    pool: LetterPool,
    history: Vec<Attempt>,
    board: Board,
    rng: StdRng,
}

impl<'a> Game<'a> {
    /// Start a game with a solution drawn from `vocabulary`
    ///
    /// # Errors
    /// Returns [`GameError::EmptyVocabulary`] if there is nothing to draw.
    pub fn new(
        vocabulary: &'a Vocabulary,
        hard_mode: bool,
        mut rng: StdRng,
    ) -> Result<Self, GameError> {
        let solution = vocabulary
            .choose_solution(&mut rng)
            .ok_or(GameError::EmptyVocabulary)?
            .clone();
        Ok(Self::with_solution(vocabulary, solution, hard_mode, rng))
    }

    /// Start a game with a fixed solution
    #[must_use]
    pub fn with_solution(
        vocabulary: &'a Vocabulary,
        solution: Word,
        hard_mode: bool,
        rng: StdRng,
    ) -> Self {
        info!(hard_mode, "new game started");
        Self {
            vocabulary,
            solution,
            hard_mode,
            status: GameStatus::InProgress { turn: 1 },
            memory: YellowMemory::new(),
            pool: LetterPool::new(),
            history: Vec::new(),
            board: Board::default(),
            rng,
        }
    }

    /// Start a game with a fixed solution and a seeded RNG for assists
    #[must_use]
    pub fn seeded(vocabulary: &'a Vocabulary, solution: Word, hard_mode: bool, seed: u64) -> Self {
        Self::with_solution(vocabulary, solution, hard_mode, StdRng::seed_from_u64(seed))
    }

    /// Play one guess
    ///
    /// # Errors
    /// - [`GameError::GameAlreadyTerminal`] once the game is over
    /// - [`GameError::InvalidGuess`] if `input` is not in the guess vocabulary
    /// - [`GameError::HardModeViolation`] if hard mode rejects it
    ///
    /// Rejections consume no turn and change nothing.
    pub fn submit_guess(&mut self, input: &str) -> Result<TurnOutcome, GameError> {
        let turn = self.current_turn()?;

        let invalid = || GameError::InvalidGuess {
            guess: input.trim().to_string(),
        };
        let guess = Word::new(input.trim()).map_err(|_| invalid())?;
        if !self.vocabulary.contains(&guess) {
            return Err(invalid());
        }

        if self.hard_mode
            && let Some(rule) = hard_mode::violation(
                &guess,
                &self.solution,
                self.history.last(),
                &self.memory,
                &self.pool,
            )
        {
            debug!(guess = %guess, %rule, "hard mode rejected guess");
            return Err(GameError::HardModeViolation {
                guess: guess.text().to_string(),
            });
        }

        let feedback = Feedback::classify(&self.solution, &guess);
        self.memory.record(&guess, &feedback);
        self.pool.consume(&guess);

        let attempt = Attempt { guess, feedback };
        self.board = Board::from_attempt(&attempt);
        self.history.push(attempt.clone());

        self.status = if feedback.is_perfect() {
            GameStatus::Won { turns: turn }
        } else if turn >= MAX_TURNS {
            GameStatus::Lost
        } else {
            GameStatus::InProgress { turn: turn + 1 }
        };

        debug!(guess = %attempt.guess, %feedback, status = %self.status, "guess accepted");
        if self.status.is_over() {
            info!(status = %self.status, solution = %self.solution, "game over");
        }

        Ok(TurnOutcome {
            attempt,
            status: self.status,
            remaining: self.pool.remaining(),
        })
    }

    /// Give up; returns the solution
    ///
    /// # Errors
    /// [`GameError::GameAlreadyTerminal`] once the game is over.
    pub fn abort(&mut self) -> Result<&Word, GameError> {
        self.current_turn()?;
        self.status = GameStatus::Aborted;
        info!(solution = %self.solution, "game aborted");
        Ok(&self.solution)
    }

    /// Turn a random non-green square of the board green
    ///
    /// Does not consume a turn. Completing the board ends the game as
    /// [`GameStatus::Revealed`].
    ///
    /// # Errors
    /// [`GameError::GameAlreadyTerminal`] once the game is over.
    pub fn reveal_letter(&mut self) -> Result<Reveal, GameError> {
        self.current_turn()?;

        let open = self.board.open_positions();
        // A complete board already ended the game
        let Some(&position) = open.choose(&mut self.rng) else {
            return Err(GameError::GameAlreadyTerminal {
                status: GameStatus::Revealed,
            });
        };

        let downgraded = self.board.reveal(position, &self.solution);
        if self.board.is_complete() {
            self.status = GameStatus::Revealed;
            info!(solution = %self.solution, "word fully revealed");
        }

        let letter = self.solution.char_at(position);
        debug!(position, letter = %char::from(letter), ?downgraded, "letter revealed");

        Ok(Reveal {
            position,
            letter,
            downgraded,
            status: self.status,
        })
    }

    /// Remove a random untried letter that is not in the solution
    ///
    /// Does not consume a turn.
    ///
    /// # Errors
    /// - [`GameError::EmptyPool`] if no such letter is left; nothing changes
    /// - [`GameError::GameAlreadyTerminal`] once the game is over
    pub fn eliminate_letter(&mut self) -> Result<u8, GameError> {
        self.current_turn()?;
        let letter = self
            .pool
            .pick_random_excluding(&self.solution, &mut self.rng)?;
        self.pool.remove(letter);
        debug!(letter = %char::from(letter), "letter eliminated");
        Ok(letter)
    }

    fn current_turn(&self) -> Result<usize, GameError> {
        match self.status {
            GameStatus::InProgress { turn } => Ok(turn),
            status => Err(GameError::GameAlreadyTerminal { status }),
        }
    }

    /// Turn number: the next guess while in progress, else the guesses made
    ///
    /// Never exceeds [`MAX_TURNS`]: a lost game reports 6, not a seventh
    /// turn that will never be played. Use [`Game::status`] to tell a loss
    /// from a game still waiting for its sixth guess.
    #[must_use]
    pub fn turn(&self) -> usize {
        match self.status {
            GameStatus::InProgress { turn } => turn,
            _ => self.history.len(),
        }
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_over()
    }

    #[must_use]
    pub const fn hard_mode(&self) -> bool {
        self.hard_mode
    }

    /// The solution, only once the game has ended
    #[must_use]
    pub fn solution(&self) -> Option<&Word> {
        self.is_over().then_some(&self.solution)
    }

    #[must_use]
    pub fn remaining_letters(&self) -> Vec<u8> {
        self.pool.remaining()
    }

    #[must_use]
    pub const fn letter_pool(&self) -> &LetterPool {
        &self.pool
    }

    #[must_use]
    pub const fn yellow_memory(&self) -> &YellowMemory {
        &self.memory
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn history(&self) -> &[Attempt] {
        &self.history
    }

    #[must_use]
    pub fn last_attempt(&self) -> Option<&Attempt> {
        self.history.last()
    }

    /// Best feedback a letter has received so far, if it was ever guessed
    #[must_use]
    pub fn letter_hint(&self, letter: u8) -> Option<Classification> {
        self.history
            .iter()
            .flat_map(|attempt| {
                (0..WORD_LEN)
                    .filter(move |&i| attempt.guess.char_at(i) == letter)
                    .map(move |i| attempt.feedback.get(i))
            })
            .max()
    }

    /// Shareable emoji grid, e.g. `Wordle 4/6*` followed by one row per guess
    #[must_use]
    pub fn share_grid(&self) -> String {
        let score = match self.status {
            GameStatus::Won { turns } => turns.to_string(),
            _ => "X".to_string(),
        };
        let star = if self.hard_mode { "*" } else { "" };

        let mut grid = format!("Wordle {score}/{MAX_TURNS}{star}\n");
        for attempt in &self.history {
            grid.push('\n');
            grid.push_str(&attempt.feedback.to_emoji());
        }
        grid
    }
}
