//! Wordle Game
//!
//! A terminal Wordle: guess the hidden word within a fixed number of tries,
//! with per-letter feedback on the grid and on the keyboard.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::Word;
//! use wordle_game::game::{GameState, GameStatus, InputController, Transition};
//!
//! let mut game = GameState::new(Word::new("crane").unwrap(), 6);
//! let input = InputController::new();
//!
//! assert_eq!(input.submit_word(&mut game, "slate"), Transition::RowCommitted);
//! input.submit_word(&mut game, "crane");
//! assert_eq!(game.status(), GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Game rules and turn handling
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Log file setup
pub mod logging;
