//! Wordle Game - CLI
//!
//! Terminal Wordle with TUI and plain-text modes.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_game::{
    commands::{check_guess, run_simple},
    core::Word,
    game::{DEFAULT_MAX_TRIES, GameConfig},
    logging,
    output::print_check_result,
    wordlists::{RandomWords, WORDS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden word in a limited number of tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of tries per game (1-30)
    #[arg(
        short,
        long,
        global = true,
        default_value_t = DEFAULT_MAX_TRIES as u16,
        value_parser = clap::value_parser!(u16).range(1..=30)
    )]
    tries: u16,

    /// Wordlist: 'all' (default, bundled list) or path to file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Seed for reproducible word picks
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file (level from RUST_LOG, default info)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Score one guess against a target word
    Check {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },
}

/// Load the target words based on the -w flag
fn load_wordlist(wordlist_mode: &str) -> Result<Vec<Word>> {
    use wordle_game::wordlists::loader::load_from_file;

    let words = match wordlist_mode {
        "all" => words_from_slice(WORDS),
        path => load_from_file(path)?,
    };

    if words.is_empty() {
        bail!("Wordlist '{wordlist_mode}' contains no valid words");
    }
    Ok(words)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;

    let config = GameConfig::new(usize::from(cli.tries), cli.seed);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&cli.wordlist, config),
        Commands::Simple => run_simple_command(&cli.wordlist, config),
        Commands::Check { guess, target } => run_check_command(&guess, &target),
    }
}

fn run_check_command(guess: &str, target: &str) -> Result<()> {
    let result = check_guess(guess, target).map_err(|e| anyhow::anyhow!(e))?;
    print_check_result(&result);
    Ok(())
}

fn run_simple_command(wordlist: &str, config: GameConfig) -> Result<()> {
    let mut words = RandomWords::new(load_wordlist(wordlist)?, config.seed)?;
    run_simple(&mut words, &config)?;
    Ok(())
}

fn run_play_command(wordlist: &str, config: GameConfig) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let words = RandomWords::new(load_wordlist(wordlist)?, config.seed)?;
    let app = App::new(words, config);
    run_tui(app)
}
