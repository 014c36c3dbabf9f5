//! Wordle - CLI
//!
//! Play Wordle in the terminal, full-screen or line by line.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use wordle_game::{
    commands::{run_simple, score_guess},
    game::{GameConfig, Session},
    output::print_score_result,
    wordlists::{
        GUESSES, SOLUTIONS, Vocabulary,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the hidden 5-letter word in 6 tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Hard mode: revealed hints must be used in later guesses
    #[arg(long, global = true, env = "WORDLE_HARD")]
    hard: bool,

    /// Seed for reproducible solutions and assists
    #[arg(long, global = true, env = "WORDLE_SEED")]
    seed: Option<u64>,

    /// File of solution words (one per line) instead of the built-in list
    #[arg(long, global = true)]
    solutions: Option<PathBuf>,

    /// File of accepted guesses (one per line) instead of the built-in list
    #[arg(long, global = true)]
    guesses: Option<PathBuf>,

    /// Increase log output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Show the feedback for one guess against a given solution
    Score {
        /// The hidden word
        solution: String,

        /// The guessed word
        guess: String,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Build the vocabulary from the built-in lists or the given files
fn load_vocabulary(cli: &Cli) -> Result<Vocabulary> {
    let solutions = match &cli.solutions {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Failed to load solutions from {}", path.display()))?,
        None => words_from_slice(SOLUTIONS),
    };
    let guesses = match &cli.guesses {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Failed to load guesses from {}", path.display()))?,
        None => words_from_slice(GUESSES),
    };

    anyhow::ensure!(!solutions.is_empty(), "solution word list is empty");

    let vocabulary = Vocabulary::new(solutions, guesses);
    info!(
        solutions = vocabulary.solution_count(),
        guesses = vocabulary.guess_count(),
        "vocabulary loaded"
    );
    Ok(vocabulary)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = GameConfig::new(cli.hard, cli.seed);

    // Default to Play mode if no command given
    match cli.command.as_ref().unwrap_or(&Commands::Play) {
        Commands::Play => {
            let vocabulary = load_vocabulary(&cli)?;
            run_play_command(Session::new(&vocabulary, config))
        }
        Commands::Simple => {
            let vocabulary = load_vocabulary(&cli)?;
            run_simple(&mut Session::new(&vocabulary, config))
        }
        Commands::Score { solution, guess } => {
            let result = score_guess(solution, guess).context("Invalid word")?;
            print_score_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(session: Session<'_>) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(session)?;
    run_tui(app)
}
