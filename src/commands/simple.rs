//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI: one line of input per guess or command.

use crate::game::{Game, GameError, Session};
use crate::output::formatters::letters_line;
use crate::output::{print_game_over, print_reveal, print_statistics, print_turn};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Guess(String),
    Reveal,
    Eliminate,
    Abort,
    Help,
    Quit,
}

impl Command {
    /// Parse a line; anything that is not a `/command` is a guess
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        match input.to_lowercase().as_str() {
            "/reveal" | "/r" => Self::Reveal,
            "/eliminate" | "/e" => Self::Eliminate,
            "/abort" | "/giveup" | "/a" => Self::Abort,
            "/help" | "/h" | "?" => Self::Help,
            "/quit" | "/q" | "/exit" => Self::Quit,
            _ => Self::Guess(input.to_string()),
        }
    }
}

/// Run the simple interactive CLI mode on stdin
///
/// # Errors
///
/// Returns an error if reading input fails or no solution can be drawn.
pub fn run_simple(session: &mut Session<'_>) -> Result<()> {
    let stdin = io::stdin();
    play_session(session, &mut stdin.lock())
}

/// Play games until the player quits or input ends
///
/// # Errors
///
/// Returns an error if reading input fails or no solution can be drawn.
pub fn play_session<R: BufRead>(session: &mut Session<'_>, input: &mut R) -> Result<()> {
    println!("\n╔══════════════════════════════════════╗");
    println!("║          W O R D L E                 ║");
    println!("╚══════════════════════════════════════╝\n");
    print_help(session.config().hard_mode);

    loop {
        let mut game = session.new_game().context("could not start a new game")?;

        if !play_game(&mut game, input)? {
            println!("\nThanks for playing!\n");
            return Ok(());
        }

        print_game_over(&game);
        session.finish(&game);
        print_statistics(session.stats());

        match read_line("Play again? (yes/no)", input)?
            .as_deref()
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("yes" | "y") => println!("\nNew game started!\n"),
            _ => {
                println!("\nThanks for playing!\n");
                return Ok(());
            }
        }
    }
}

/// Drive one game to its end; `false` means the player quit mid-game
fn play_game<R: BufRead>(game: &mut Game<'_>, input: &mut R) -> Result<bool> {
    while !game.is_over() {
        let Some(line) = read_line(&format!("{}. >", game.turn()), input)? else {
            return Ok(false);
        };

        match Command::parse(&line) {
            Command::Guess(word) => match game.submit_guess(&word) {
                Ok(outcome) => print_turn(&outcome),
                Err(GameError::InvalidGuess { .. }) => {
                    println!("{}\n", "Not a valid word. Guess again.".red());
                }
                Err(e @ GameError::HardModeViolation { .. }) => {
                    println!("{}\n", format!("Hard mode: {e}. Guess again.").red());
                }
                Err(e) => return Err(e.into()),
            },
            Command::Reveal => {
                let reveal = game.reveal_letter()?;
                print_reveal(game, &reveal);
            }
            Command::Eliminate => match game.eliminate_letter() {
                Ok(letter) => println!(
                    "Eliminated {}. {} {}\n",
                    char::from(letter).to_string().red().bold(),
                    "REMAINING LETTERS:".bright_cyan(),
                    letters_line(&game.remaining_letters())
                ),
                Err(e @ GameError::EmptyPool) => println!("{}\n", capitalize(&e.to_string()).yellow()),
                Err(e) => return Err(e.into()),
            },
            Command::Abort => {
                game.abort()?;
            }
            Command::Help => print_help(game.hard_mode()),
            Command::Quit => return Ok(false),
        }
    }
    Ok(true)
}

fn print_help(hard_mode: bool) {
    println!("Guess the 5-letter word in 6 tries.");
    if hard_mode {
        println!("{}", "Hard mode: every hint must be used in later guesses.".yellow());
    }
    println!("Commands: /reveal  /eliminate  /abort  /help  /quit\n");
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Prompt and read one trimmed line; `None` on end of input
fn read_line<R: BufRead>(prompt: &str, input: &mut R) -> Result<Option<String>> {
    print!("{prompt} ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
