//! Target word representation
//!
//! A Word stores the hidden word as characters along with a letter set for
//! fast membership checks during classification.

use rustc_hash::FxHashSet;
use std::fmt;

/// A lowercase word to be guessed
///
/// The length is fixed at construction and defines the grid column count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: Vec<char>,
    letter_set: FxHashSet<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The input is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("cr4ne").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let letters: Vec<char> = text.chars().collect();
        let letter_set = letters.iter().copied().collect();

        Ok(Self {
            text,
            letters,
            letter_set,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's letters in order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters, which is also the grid width
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false: empty words are rejected by [`Word::new`]
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Get the letter at a position, if the position is inside the word
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> Option<char> {
        self.letters.get(position).copied()
    }

    /// Check if the word contains a letter anywhere
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letter_set.contains(&letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
