//! A sequence of games sharing one vocabulary, RNG and statistics

use super::{Game, GameError, Statistics};
use crate::wordlists::Vocabulary;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Settings that apply to every game of a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameConfig {
    pub hard_mode: bool,
    /// Fixes solution draws and assist choices for the whole session
    pub seed: Option<u64>,
}

impl GameConfig {
    #[must_use]
    pub const fn new(hard_mode: bool, seed: Option<u64>) -> Self {
        Self { hard_mode, seed }
    }

    #[must_use]
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }
}

pub struct Session<'a> {
    vocabulary: &'a Vocabulary,
    config: GameConfig,
    rng: StdRng,
    stats: Statistics,
}

impl<'a> Session<'a> {
    #[must_use]
    pub fn new(vocabulary: &'a Vocabulary, config: GameConfig) -> Self {
        Self {
            vocabulary,
            config,
            rng: config.rng(),
            stats: Statistics::default(),
        }
    }

    /// Start a game with a fresh solution
    ///
    /// # Errors
    /// Returns [`GameError::EmptyVocabulary`] if there are no solutions.
    pub fn new_game(&mut self) -> Result<Game<'a>, GameError> {
        let rng = StdRng::from_rng(&mut self.rng);
        Game::new(self.vocabulary, self.config.hard_mode, rng)
    }

    /// Record a finished game in the statistics
    pub fn finish(&mut self, game: &Game<'_>) {
        self.stats.record(game.status());
    }

    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }

    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }
}
