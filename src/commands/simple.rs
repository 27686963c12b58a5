//! Simple interactive CLI mode
//!
//! Line-based game without TUI: each line is typed into the game letter by
//! letter and submitted.

use crate::game::{GameConfig, GameState, InputController, Statistics, Transition};
use crate::output::{print_board, print_game_over};
use crate::wordlists::WordSource;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<W: WordSource>(words: &mut W, config: &GameConfig) -> Result<Statistics> {
    let stdin = io::stdin();
    play_session(words, config, &mut stdin.lock())
}

/// Play games until input ends or the player quits
///
/// # Errors
///
/// Returns an error if reading from `input` fails.
pub fn play_session<W: WordSource, R: BufRead>(
    words: &mut W,
    config: &GameConfig,
    input: &mut R,
) -> Result<Statistics> {
    println!("\n╔════════════════════════════════════════════╗");
    println!("║                W O R D L E                 ║");
    println!("╚════════════════════════════════════════════╝\n");
    println!("Type a guess and press Enter. Commands: 'quit' to exit, 'new' for a new word\n");

    let controller = InputController::new();
    let mut stats = Statistics::new(config.max_tries);
    let mut game = new_game(words, config);

    loop {
        let prompt = format!(
            "Guess {}/{} ({} letters)",
            game.cursor().row + 1,
            game.max_tries(),
            game.word_len()
        );
        let Some(line) = read_line(input, &prompt)? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(stats);
        };

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(stats);
            }
            "new" | "n" => {
                game = new_game(words, config);
                println!("\n🔄 New game started!\n");
                continue;
            }
            guess => {
                if guess.chars().count() != game.word_len()
                    || !guess.chars().all(|c| c.is_ascii_alphabetic())
                {
                    println!(
                        "{}\n",
                        format!("Enter exactly {} letters", game.word_len()).red()
                    );
                    continue;
                }

                match controller.submit_word(&mut game, guess) {
                    Transition::Finished(notice) => {
                        stats.record(&notice.outcome);
                        print_board(&game);
                        print_game_over(&game, &notice, &stats);

                        let again = read_line(input, "\nPlay again? (yes/no)")?
                            .unwrap_or_default()
                            .to_lowercase();
                        if !matches!(again.as_str(), "yes" | "y") {
                            println!("\n👋 Thanks for playing!\n");
                            return Ok(stats);
                        }
                        game = new_game(words, config);
                        println!("\n🔄 New game started!\n");
                    }
                    _ => {
                        print_board(&game);
                        println!();
                    }
                }
            }
        }
    }
}

fn new_game<W: WordSource>(words: &mut W, config: &GameConfig) -> GameState {
    let target = words.pick_word();
    tracing::info!(letters = target.len(), "new game");
    GameState::new(target, config.max_tries)
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<R: BufRead>(input: &mut R, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::FixedWords;
    use crate::wordlists::loader::words_from_slice;
    use std::io::Cursor;

    fn source() -> FixedWords {
        FixedWords::new(words_from_slice(&["crane", "slate"])).unwrap()
    }

    #[test]
    fn win_then_quit() {
        let mut input = Cursor::new("pound\ncrane\nno\n");
        let stats = play_session(&mut source(), &GameConfig::default(), &mut input).unwrap();

        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.guess_distribution[1], 1);
    }

    #[test]
    fn loss_then_replay_then_eof() {
        let mut input = Cursor::new("pound\npound\nyes\nslate\n");
        let config = GameConfig::new(2, None);
        let stats = play_session(&mut source(), &config, &mut input).unwrap();

        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.current_streak, 1);
    }

    #[test]
    fn wrong_length_lines_do_not_use_a_try() {
        let mut input = Cursor::new("cat\ntoolong\ncrane\nn\n");
        let stats = play_session(&mut source(), &GameConfig::default(), &mut input).unwrap();

        assert_eq!(stats.guess_distribution[0], 1);
    }

    #[test]
    fn quit_immediately() {
        let mut input = Cursor::new("quit\n");
        let stats = play_session(&mut source(), &GameConfig::default(), &mut input).unwrap();
        assert_eq!(stats.games_played, 0);
    }
}
