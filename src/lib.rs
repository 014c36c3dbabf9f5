//! Wordle Game
//!
//! Terminal Wordle with hard mode and reveal/eliminate assists.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::Word;
//! use wordle_game::game::{Game, GameStatus};
//! use wordle_game::wordlists::Vocabulary;
//!
//! let vocabulary = Vocabulary::embedded();
//! let solution = Word::new("crane").unwrap();
//! let mut game = Game::seeded(&vocabulary, solution, false, 7);
//!
//! let outcome = game.submit_guess("crate").unwrap();
//! assert_eq!(outcome.attempt.feedback.to_string(), "GGG-G");
//! assert_eq!(game.status(), GameStatus::InProgress { turn: 2 });
//! ```

// Core domain types
pub mod core;

// Rules and state
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
