//! Word lists and target word sources
//!
//! The bundled list is embedded at build time; custom lists can be loaded
//! from a file.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{WORDS, WORDS_COUNT};
pub use source::{FixedWords, RandomWords, WordSource, WordSourceError};
