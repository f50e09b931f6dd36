//! Win detection and derived game status.
//!
//! ## evaluate_winner
//!
//! Pure scan of the 8 winning lines (3 rows, 3 columns, 2 diagonals) in a
//! fixed order. The first uniform non-empty line wins. Two simultaneous
//! complete lines cannot arise under alternating play, but the scan order
//! makes the answer deterministic even on hand-built boards.

use serde::{Deserialize, Serialize};

use crate::core::board::Board;
use crate::core::cell::Cell;
use crate::core::mark::Mark;

/// The 8 winning lines, scanned in this order: rows, columns, diagonals.
pub const WIN_LINES: [[Cell; 3]; 8] = [
    [Cell::new(0), Cell::new(1), Cell::new(2)],
    [Cell::new(3), Cell::new(4), Cell::new(5)],
    [Cell::new(6), Cell::new(7), Cell::new(8)],
    [Cell::new(0), Cell::new(3), Cell::new(6)],
    [Cell::new(1), Cell::new(4), Cell::new(7)],
    [Cell::new(2), Cell::new(5), Cell::new(8)],
    [Cell::new(0), Cell::new(4), Cell::new(8)],
    [Cell::new(2), Cell::new(4), Cell::new(6)],
];

/// A detected win: the mark and the completed line.
///
/// The cells drive the presentation layer's highlight flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Winner {
    /// The winning mark.
    pub mark: Mark,

    /// The three cells of the completed line, in line order.
    pub cells: [Cell; 3],
}

impl Winner {
    /// Check whether a cell is part of the winning line.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }
}

/// Find the winner on a board, if any.
///
/// Returns the first complete line in [`WIN_LINES`] order, so the result
/// is deterministic even on boards with several complete lines.
///
/// ```
/// use rust_ttt::{evaluate_winner, Board, Cell, Mark};
///
/// let board = Board::empty()
///     .with_mark(Cell::new(0), Mark::O)
///     .with_mark(Cell::new(1), Mark::O)
///     .with_mark(Cell::new(2), Mark::O);
///
/// let winner = evaluate_winner(&board).unwrap();
/// assert_eq!(winner.mark, Mark::O);
/// assert_eq!(winner.cells, [Cell::new(0), Cell::new(1), Cell::new(2)]);
/// ```
#[must_use]
pub fn evaluate_winner(board: &Board) -> Option<Winner> {
    for line in WIN_LINES {
        let [a, b, c] = line;
        if let Some(mark) = board.get(a) {
            if board.get(b) == Some(mark) && board.get(c) == Some(mark) {
                return Some(Winner { mark, cells: line });
            }
        }
    }
    None
}

/// Derived game status: won, drawn, or awaiting the next player.
///
/// Never stored; recomputed from the current snapshot on demand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// A line is complete.
    Won(Winner),
    /// Nine placements made, no line completed.
    Draw,
    /// Game in progress; this mark moves next.
    NextPlayer(Mark),
}

impl Status {
    /// The winner, if the game has been won.
    #[must_use]
    pub fn winner(&self) -> Option<Winner> {
        match self {
            Status::Won(winner) => Some(*winner),
            _ => None,
        }
    }

    /// Check if the game is over (won or drawn).
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Status::NextPlayer(_))
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Won(winner) => write!(f, "Winner: {}", winner.mark),
            Status::Draw => write!(f, "DRAW"),
            Status::NextPlayer(mark) => write!(f, "Next player: {}", mark),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(u8, Mark)]) -> Board {
        marks
            .iter()
            .fold(Board::empty(), |b, &(i, m)| b.with_mark(Cell::new(i), m))
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        assert_eq!(evaluate_winner(&Board::empty()), None);
    }

    #[test]
    fn test_row_win() {
        let board = board_with(&[(3, Mark::X), (4, Mark::X), (5, Mark::X)]);
        let winner = evaluate_winner(&board).unwrap();

        assert_eq!(winner.mark, Mark::X);
        assert_eq!(winner.cells, [Cell::new(3), Cell::new(4), Cell::new(5)]);
    }

    #[test]
    fn test_column_win() {
        let board = board_with(&[(1, Mark::O), (4, Mark::O), (7, Mark::O)]);
        let winner = evaluate_winner(&board).unwrap();

        assert_eq!(winner.mark, Mark::O);
        assert_eq!(winner.cells, [Cell::new(1), Cell::new(4), Cell::new(7)]);
    }

    #[test]
    fn test_diagonal_wins() {
        let main = board_with(&[(0, Mark::X), (4, Mark::X), (8, Mark::X)]);
        assert_eq!(
            evaluate_winner(&main).unwrap().cells,
            [Cell::new(0), Cell::new(4), Cell::new(8)]
        );

        let anti = board_with(&[(2, Mark::O), (4, Mark::O), (6, Mark::O)]);
        assert_eq!(
            evaluate_winner(&anti).unwrap().cells,
            [Cell::new(2), Cell::new(4), Cell::new(6)]
        );
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[(0, Mark::X), (1, Mark::O), (2, Mark::X)]);
        assert_eq!(evaluate_winner(&board), None);
    }

    #[test]
    fn test_first_match_wins_on_multi_line_board() {
        // Impossible under play: X holds both the top row and left column.
        let board = board_with(&[
            (0, Mark::X),
            (1, Mark::X),
            (2, Mark::X),
            (3, Mark::X),
            (6, Mark::X),
        ]);

        let winner = evaluate_winner(&board).unwrap();
        assert_eq!(winner.cells, [Cell::new(0), Cell::new(1), Cell::new(2)]);
    }

    #[test]
    fn test_winner_contains() {
        let board = board_with(&[(0, Mark::X), (4, Mark::X), (8, Mark::X)]);
        let winner = evaluate_winner(&board).unwrap();

        assert!(winner.contains(Cell::new(4)));
        assert!(!winner.contains(Cell::new(1)));
    }

    #[test]
    fn test_status_display() {
        let winner = Winner {
            mark: Mark::X,
            cells: [Cell::new(0), Cell::new(1), Cell::new(2)],
        };

        assert_eq!(format!("{}", Status::Won(winner)), "Winner: X");
        assert_eq!(format!("{}", Status::Draw), "DRAW");
        assert_eq!(format!("{}", Status::NextPlayer(Mark::O)), "Next player: O");
    }

    #[test]
    fn test_status_helpers() {
        let winner = Winner {
            mark: Mark::O,
            cells: [Cell::new(2), Cell::new(4), Cell::new(6)],
        };

        assert!(Status::Won(winner).is_terminal());
        assert!(Status::Draw.is_terminal());
        assert!(!Status::NextPlayer(Mark::X).is_terminal());
        assert_eq!(Status::Won(winner).winner(), Some(winner));
        assert_eq!(Status::Draw.winner(), None);
    }
}
