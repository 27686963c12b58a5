//! Target word sources
//!
//! A `WordSource` hands out the hidden word at the start of each game.

use crate::core::Word;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Supplies one target word per game
pub trait WordSource {
    /// Pick the word for the next game
    fn pick_word(&mut self) -> Word;

    /// Number of distinct words this source can return
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Error building a word source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSourceError {
    EmptyList,
}

impl fmt::Display for WordSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyList => write!(f, "Word list contains no valid words"),
        }
    }
}

impl std::error::Error for WordSourceError {}

/// Uniform random picks from a fixed list
#[derive(Debug, Clone)]
pub struct RandomWords {
    words: Vec<Word>,
    rng: StdRng,
}

impl RandomWords {
    /// Build a source over `words`; a seed makes the pick order reproducible
    ///
    /// # Errors
    ///
    /// Returns `WordSourceError::EmptyList` if `words` is empty.
    pub fn new(words: Vec<Word>, seed: Option<u64>) -> Result<Self, WordSourceError> {
        if words.is_empty() {
            return Err(WordSourceError::EmptyList);
        }

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };

        Ok(Self { words, rng })
    }
}

impl WordSource for RandomWords {
    fn pick_word(&mut self) -> Word {
        // Non-empty by construction
        let index = self.rng.random_range(0..self.words.len());
        self.words[index].clone()
    }

    fn len(&self) -> usize {
        self.words.len()
    }
}

/// Hands out words in order, wrapping around
///
/// Useful for scripted games where the answer must be known up front.
#[derive(Debug, Clone)]
pub struct FixedWords {
    words: Vec<Word>,
    next: usize,
}

impl FixedWords {
    /// # Errors
    ///
    /// Returns `WordSourceError::EmptyList` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, WordSourceError> {
        if words.is_empty() {
            return Err(WordSourceError::EmptyList);
        }
        Ok(Self { words, next: 0 })
    }
}

impl WordSource for FixedWords {
    fn pick_word(&mut self) -> Word {
        let word = self.words[self.next % self.words.len()].clone();
        self.next = (self.next + 1) % self.words.len();
        word
    }

    fn len(&self) -> usize {
        self.words.len()
    }
}
