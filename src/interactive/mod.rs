//! Interactive TUI game
//!
//! Full-screen terminal Wordle built with ratatui and crossterm.

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, run_tui};
