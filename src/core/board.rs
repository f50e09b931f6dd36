//! Board snapshot: 9 cells, each empty or holding a mark.
//!
//! `Board` is a plain value. Placement returns a new board rather than
//! mutating in place, so history entries can never alias each other.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::Index;

use super::cell::Cell;
use super::mark::Mark;

/// A 3x3 board snapshot, row-major.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Mark>; Cell::COUNT],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [None; Cell::COUNT],
        }
    }

    /// Get the mark at a cell, if any.
    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<Mark> {
        self.cells[cell.index()]
    }

    /// Check if a cell is occupied.
    #[must_use]
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.get(cell).is_some()
    }

    /// Check if every cell is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// Return a copy of this board with `mark` placed at `cell`.
    ///
    /// Overwrites whatever was there; legality is the engine's concern,
    /// not the board's.
    #[must_use]
    pub fn with_mark(&self, cell: Cell, mark: Mark) -> Self {
        let mut next = *self;
        next.cells[cell.index()] = Some(mark);
        next
    }

    /// The unoccupied cells, in index order.
    ///
    /// At most 9 entries, so no heap allocation.
    #[must_use]
    pub fn open_cells(&self) -> SmallVec<[Cell; Cell::COUNT]> {
        Cell::all().filter(|&c| !self.is_occupied(c)).collect()
    }

    /// The raw cell array, row-major.
    #[must_use]
    pub fn cells(&self) -> &[Option<Mark>; Cell::COUNT] {
        &self.cells
    }
}

impl Index<Cell> for Board {
    type Output = Option<Mark>;

    fn index(&self, cell: Cell) -> &Self::Output {
        &self.cells[cell.index()]
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f, "---+---+---")?;
            }
            for col in 0..3 {
                if col > 0 {
                    write!(f, "|")?;
                }
                match self.get(Cell::at(row, col)) {
                    Some(mark) => write!(f, " {} ", mark)?,
                    None => write!(f, "   ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
