//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping blank lines, `#`
/// comments and any invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content))
}

fn words_from_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| Word::new(line).ok())
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
