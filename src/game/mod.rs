//! Game rules and state
//!
//! Cross-turn bookkeeping (yellow memory, letter pool), hard-mode rules and
//! the turn state machine with its assist commands.

mod error;
pub mod hard_mode;
mod memory;
mod pool;
mod session;
mod state;
mod stats;

pub use error::GameError;
pub use hard_mode::HardModeRule;
pub use memory::YellowMemory;
pub use pool::LetterPool;
pub use session::{GameConfig, Session};
pub use state::{Attempt, Board, Cell, Game, GameStatus, MAX_TURNS, Reveal, TurnOutcome};
pub use stats::Statistics;
