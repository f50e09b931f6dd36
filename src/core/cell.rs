//! Cell identification for the 3x3 grid.
//!
//! ## Cell
//!
//! Type-safe index into the board, 0..=8 in row-major order:
//!
//! ```text
//! 0 | 1 | 2
//! ---------
//! 3 | 4 | 5
//! ---------
//! 6 | 7 | 8
//! ```

use serde::{Deserialize, Serialize};

/// Board cell identifier, 0..=8 in row-major order.
///
/// `row = index / 3`, `col = index % 3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell(u8);

impl Cell {
    /// Number of cells on the board.
    pub const COUNT: usize = 9;

    /// Create a cell from a raw index.
    ///
    /// Panics if `index >= 9`.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!(index < Self::COUNT as u8, "Cell index must be 0..=8");
        Self(index)
    }

    /// Create a cell from a row and column, both 0..=2.
    ///
    /// Panics if either coordinate is out of range.
    #[must_use]
    pub const fn at(row: u8, col: u8) -> Self {
        assert!(row < 3 && col < 3, "Row and column must be 0..=2");
        Self(row * 3 + col)
    }

    /// Create a cell from a `usize` index, `None` if out of range.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Get the raw index (0-based, row-major).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the row (0..=2).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.0 / 3
    }

    /// Get the column (0..=2).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.0 % 3
    }

    /// Iterate over all cells in index order.
    ///
    /// ```
    /// use rust_ttt::Cell;
    ///
    /// let cells: Vec<_> = Cell::all().collect();
    /// assert_eq!(cells.len(), 9);
    /// assert_eq!(cells[0], Cell::new(0));
    /// assert_eq!(cells[8], Cell::new(8));
    /// ```
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..Self::COUNT as u8).map(Cell)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}
