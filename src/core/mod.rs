//! Core domain types for Wordle
//!
//! Words, the guess grid, per-letter classification and keyboard
//! highlighting. Everything here is pure and free of terminal concerns.

mod feedback;
mod grid;
mod keyboard;
mod word;

pub use feedback::{Feedback, LetterClass, classify, classify_letter};
pub use grid::{Cursor, Grid};
pub use keyboard::KeyboardHighlight;
pub use word::{Word, WordError};
