//! Display functions for game events

use super::formatters::{board_row, create_progress_bar, feedback_row, letters_line};
use crate::commands::ScoreResult;
use crate::game::{Game, GameStatus, MAX_TURNS, Reveal, Statistics, TurnOutcome};
use colored::Colorize;

/// Print the result of scoring a guess
pub fn print_score_result(result: &ScoreResult) {
    println!(
        "\n{} {}",
        "Solution:".bright_cyan(),
        result.solution.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", feedback_row(&result.guess, &result.feedback));
    println!("{}  {}\n", result.feedback, result.feedback.to_emoji());
}

/// Print an accepted guess followed by the remaining letters
pub fn print_turn(outcome: &TurnOutcome) {
    println!(
        "{}\n",
        feedback_row(&outcome.attempt.guess, &outcome.attempt.feedback)
    );

    if !outcome.status.is_over() {
        println!(
            "{} {}\n",
            "REMAINING LETTERS:".bright_cyan(),
            letters_line(&outcome.remaining)
        );
    }
}

/// Print the board after a reveal
pub fn print_reveal(game: &Game<'_>, reveal: &Reveal) {
    println!(
        "Revealed {} at position {}",
        char::from(reveal.letter.to_ascii_uppercase())
            .to_string()
            .green()
            .bold(),
        reveal.position + 1
    );
    println!("{}\n", board_row(game.board()));
}

/// Print the end-of-game banner, solution and share grid
pub fn print_game_over(game: &Game<'_>) {
    let solution = game
        .solution()
        .map(|w| w.text().to_uppercase())
        .unwrap_or_default();

    println!("{}", "═".repeat(40).bright_cyan());
    match game.status() {
        GameStatus::Won { turns } => {
            println!("{}", "YOU HAVE WON!".bright_green().bold());
            println!(
                "Solved in {} {}",
                turns.to_string().bright_cyan().bold(),
                if turns == 1 { "guess" } else { "guesses" }
            );
        }
        GameStatus::Revealed => {
            println!("The word was revealed: {}", solution.bright_yellow().bold());
        }
        GameStatus::Lost | GameStatus::Aborted => {
            println!("The word was {}", solution.bright_yellow().bold());
        }
        GameStatus::InProgress { .. } => {}
    }
    println!("{}", "═".repeat(40).bright_cyan());

    if !game.history().is_empty() {
        println!("\n{}\n", game.share_grid());
    }
}

/// Print session statistics with a guess distribution chart
pub fn print_statistics(stats: &Statistics) {
    println!("\n{}", "Statistics:".bright_cyan().bold());
    println!(
        "   Played: {}  Win %: {:.0}  Streak: {}  Max streak: {}",
        stats.games_played,
        stats.win_rate(),
        stats.current_streak,
        stats.max_streak
    );

    let max = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for turns in 1..=MAX_TURNS {
        let count = stats.guess_distribution[turns];
        println!(
            "   {turns}: {} {count}",
            create_progress_bar(count, max, 20).green()
        );
    }
    println!();
}
