//! Per-letter guess feedback
//!
//! Each letter of a submitted row is classified against the target:
//! - Exact: same letter at the same position (green)
//! - Present: letter occurs somewhere else in the target (yellow)
//! - Absent: letter does not occur in the target (grey)
//!
//! Repeated letters are not budgeted: if the target holds one `e` and the
//! guess holds two, both are scored against the whole target.

use super::Word;

/// Classification of a single guessed letter
///
/// Variants are ordered by priority so `max` keeps the best-known state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterClass {
    Absent,
    Present,
    Exact,
}

impl LetterClass {
    /// Emoji square used for sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }
}

/// Classify every letter of `row` against `target`
///
/// The output always has the same length as `row`.
///
/// # Examples
/// ```
/// use wordle_game::core::{LetterClass, Word, classify};
///
/// let target = Word::new("crane").unwrap();
/// let row: Vec<char> = "crate".chars().collect();
/// let classes = classify(&row, &target);
///
/// assert_eq!(classes[0], LetterClass::Exact);
/// assert_eq!(classes[3], LetterClass::Absent);
/// ```
#[must_use]
pub fn classify(row: &[char], target: &Word) -> Vec<LetterClass> {
    row.iter()
        .enumerate()
        .map(|(i, &letter)| classify_letter(letter, i, target))
        .collect()
}

/// Classify one letter at `position`
#[inline]
#[must_use]
pub fn classify_letter(letter: char, position: usize, target: &Word) -> LetterClass {
    if target.letter_at(position) == Some(letter) {
        LetterClass::Exact
    } else if target.has_letter(letter) {
        LetterClass::Present
    } else {
        LetterClass::Absent
    }
}

/// A classified row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    guess: String,
    classes: Vec<LetterClass>,
}

impl Feedback {
    /// Score `guess` against `target`
    #[must_use]
    pub fn calculate(guess: &str, target: &Word) -> Self {
        let letters: Vec<char> = guess.chars().collect();
        Self {
            guess: guess.to_string(),
            classes: classify(&letters, target),
        }
    }

    #[must_use]
    pub fn guess(&self) -> &str {
        &self.guess
    }

    #[must_use]
    pub fn classes(&self) -> &[LetterClass] {
        &self.classes
    }

    /// Letters paired with their classification
    pub fn letters(&self) -> impl Iterator<Item = (char, LetterClass)> + '_ {
        self.guess.chars().zip(self.classes.iter().copied())
    }

    /// True when every letter is in its exact position
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.classes.is_empty() && self.classes.iter().all(|&c| c == LetterClass::Exact)
    }

    /// Convert feedback to an emoji string like "🟩🟨⬛🟩🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.classes.iter().map(|c| c.emoji()).collect()
    }
}
