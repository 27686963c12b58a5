//! Fixed-size guess grid
//!
//! The grid has one row per allowed try and one column per target letter.
//! Its dimensions never change after construction.

/// Position of the editable cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

/// Rows of optional letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<Option<char>>>,
    cols: usize,
}

impl Grid {
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![vec![None; cols]; rows],
            cols,
        }
    }

    #[inline]
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub const fn col_count(&self) -> usize {
        self.cols
    }

    /// Letter at a cell; `None` for an empty or out-of-bounds cell
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.cells.get(row)?.get(col).copied().flatten()
    }

    /// Write a letter, returning false when the cell is out of bounds
    pub fn set(&mut self, row: usize, col: usize, letter: char) -> bool {
        self.cell_mut(row, col)
            .map(|cell| *cell = Some(letter))
            .is_some()
    }

    /// Empty a cell, returning the letter it held
    pub fn clear(&mut self, row: usize, col: usize) -> Option<char> {
        self.cell_mut(row, col)?.take()
    }

    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[Option<char>]> {
        self.cells.get(row).map(Vec::as_slice)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Option<char>]> {
        self.cells.iter().map(Vec::as_slice)
    }

    #[must_use]
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row)
            .is_some_and(|cells| cells.iter().all(Option::is_some))
    }

    /// Joined letters of a row, only when every cell is filled
    #[must_use]
    pub fn row_word(&self, row: usize) -> Option<String> {
        self.row(row)?.iter().copied().collect()
    }

    fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut Option<char>> {
        self.cells.get_mut(row)?.get_mut(col)
    }
}
