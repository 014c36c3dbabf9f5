//! In-session play statistics (never persisted)

use super::{GameStatus, MAX_TURNS};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub max_streak: usize,
    /// Index `n` counts wins in `n` guesses; index 0 is unused
    pub guess_distribution: [usize; MAX_TURNS + 1],
}

impl Statistics {
    /// Tally a finished game; in-progress statuses are ignored
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::InProgress { .. } => return,
            GameStatus::Won { turns } => {
                self.games_won += 1;
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);
                if let Some(slot) = self.guess_distribution.get_mut(turns) {
                    *slot += 1;
                }
            }
            GameStatus::Lost | GameStatus::Aborted | GameStatus::Revealed => {
                self.current_streak = 0;
            }
        }
        self.games_played += 1;
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}
