//! Display functions for command results

use super::formatters::{colored_row, feedback_to_emoji, keyboard_summary};
use crate::commands::CheckResult;
use crate::core::Feedback;
use crate::game::{EndOfGameNotice, GameOutcome, GameState, Statistics};
use colored::Colorize;

/// Print the result of checking one guess
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess: {}   Target: {}",
        result.feedback.guess().to_uppercase().bright_yellow().bold(),
        result.target.to_uppercase().bright_white()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}", colored_row(&result.feedback));
    println!("  {}", feedback_to_emoji(&result.feedback));

    println!();
    if result.feedback.is_solved() {
        println!("{}", "✅ Exact match!".green().bold());
    } else {
        println!("{}", "❌ Not the target word".red().bold());
    }
}

/// Print the board so far: one coloured row per committed guess
pub fn print_board(game: &GameState) {
    for row in 0..game.committed_rows() {
        if let Some(word) = game.grid().row_word(row) {
            let feedback = Feedback::calculate(&word, game.target());
            println!("  {}", colored_row(&feedback));
        }
    }
    for line in keyboard_summary(game.keyboard()) {
        println!("  {}", line.bright_black());
    }
}

/// Print the end-of-game notice with the share grid and statistics
pub fn print_game_over(game: &GameState, notice: &EndOfGameNotice, stats: &Statistics) {
    println!("\n{}", "═".repeat(50).bright_cyan());
    let title = match notice.outcome {
        GameOutcome::Won { .. } => notice.title().bright_green().bold(),
        GameOutcome::Lost { .. } => notice.title().bright_red().bold(),
    };
    println!("  {title}");
    println!("  {}", notice.message());
    println!("{}", "═".repeat(50).bright_cyan());

    println!();
    for row in 0..game.committed_rows() {
        if let Some(word) = game.grid().row_word(row) {
            println!("  {}", Feedback::calculate(&word, game.target()).to_emoji());
        }
    }

    println!(
        "\n  Played: {} | Win rate: {:.0}% | Streak: {} (best {})",
        stats.games_played,
        stats.win_rate(),
        stats.current_streak,
        stats.max_streak
    );
}
