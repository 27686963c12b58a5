//! Keyboard key highlighting
//!
//! Aggregates the best classification seen for each letter across all
//! completed rows. Fully recomputed after every committed row.

use super::feedback::{LetterClass, classify_letter};
use super::{Grid, Word};
use rustc_hash::FxHashMap;

/// Best-known classification per letter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardHighlight {
    keys: FxHashMap<char, LetterClass>,
}

impl KeyboardHighlight {
    /// Rebuild from the first `completed_rows` rows of `grid`
    ///
    /// Empty cells are skipped. A letter keeps its highest-priority class,
    /// so an Exact key is never downgraded by a later Present/Absent cell.
    #[must_use]
    pub fn recompute(grid: &Grid, completed_rows: usize, target: &Word) -> Self {
        let mut highlight = Self::default();

        for row in grid.rows().take(completed_rows) {
            for (col, cell) in row.iter().enumerate() {
                if let Some(letter) = *cell {
                    highlight.upsert(letter, classify_letter(letter, col, target));
                }
            }
        }

        highlight
    }

    fn upsert(&mut self, letter: char, class: LetterClass) {
        self.keys
            .entry(letter)
            .and_modify(|best| *best = (*best).max(class))
            .or_insert(class);
    }

    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterClass> {
        self.keys.get(&letter).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Sorted letters whose best class is `class`
    ///
    /// The three sets (green, yellow, grey caps) are disjoint.
    #[must_use]
    pub fn caps(&self, class: LetterClass) -> Vec<char> {
        let mut letters: Vec<char> = self
            .keys
            .iter()
            .filter(|&(_, &c)| c == class)
            .map(|(&letter, _)| letter)
            .collect();
        letters.sort_unstable();
        letters
    }
}
