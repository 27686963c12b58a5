//! Terminal output formatting
//!
//! Display utilities for the plain-text modes.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_check_result, print_game_over};
