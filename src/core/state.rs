//! Game state: move history, time travel, and the transition function.
//!
//! ## MoveRecord
//!
//! One history entry: the board reached and the cell placed to reach it.
//!
//! ## GameState
//!
//! The complete engine state:
//! - History of board snapshots (index 0 is the empty board)
//! - Current step (which snapshot is displayed)
//! - Move-list display order flag
//!
//! All transitions are pure: `(&GameState, Event) -> GameState`. The
//! history uses `im::Vector`, so the "new" state shares structure with the
//! old one and a transition is O(1) in history length.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::Board;
use super::cell::Cell;
use super::event::Event;
use super::mark::Mark;
use crate::rules::{evaluate_winner, Status};

/// A recorded move: the board snapshot plus the cell that produced it.
///
/// The cell is `None` only for the initial (empty-board) record. It is
/// retained so the move list can show the placement's row and column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The board after this move.
    pub board: Board,

    /// The cell placed to reach this board (`None` at game start).
    pub placed: Option<Cell>,
}

impl MoveRecord {
    /// The initial record: empty board, no placement.
    #[must_use]
    pub const fn initial() -> Self {
        Self {
            board: Board::empty(),
            placed: None,
        }
    }

    /// Create a record for a placement.
    #[must_use]
    pub const fn new(board: Board, placed: Cell) -> Self {
        Self {
            board,
            placed: Some(placed),
        }
    }
}

/// Complete game state with time travel.
///
/// ## Invariants
///
/// - `history` is never empty; `history[0]` is the empty board.
/// - `current_step < history.len()` at all times.
/// - `history[k]` differs from `history[k - 1]` in exactly the recorded
///   cell, and the mark placed to reach step `k` is `X` iff `k - 1` is
///   even (strict alternation, X first).
///
/// ## Example
///
/// ```
/// use rust_ttt::{Cell, GameState, Mark};
///
/// let state = GameState::new().apply_move(Cell::new(4));
/// assert_eq!(state.current_board().get(Cell::new(4)), Some(Mark::X));
/// assert_eq!(state.next_mark(), Mark::O);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Move history. Index 0 is the empty board.
    history: Vector<MoveRecord>,

    /// Index of the displayed snapshot.
    current_step: usize,

    /// Move-list display order (ascending = game start first).
    ascending: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create a fresh game: empty board, X to move, ascending move list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            history: Vector::unit(MoveRecord::initial()),
            current_step: 0,
            ascending: true,
        }
    }

    // === Read access ===

    /// The full move history.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Index of the displayed snapshot.
    #[must_use]
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Move-list display order flag.
    #[must_use]
    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    /// The board at the current step.
    #[must_use]
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_step].board
    }

    /// The mark that moves next from the current step.
    ///
    /// Derived, never stored: `X` iff the current step is even.
    #[must_use]
    pub fn next_mark(&self) -> Mark {
        Mark::for_step(self.current_step)
    }

    /// Derived game status at the current step.
    #[must_use]
    pub fn status(&self) -> Status {
        if let Some(winner) = evaluate_winner(self.current_board()) {
            Status::Won(winner)
        } else if self.current_step == Cell::COUNT {
            // 9 placements made and no line completed.
            Status::Draw
        } else {
            Status::NextPlayer(self.next_mark())
        }
    }

    /// Cells a move request would currently succeed on.
    ///
    /// Empty once a winner exists at the current step.
    #[must_use]
    pub fn legal_moves(&self) -> SmallVec<[Cell; Cell::COUNT]> {
        if evaluate_winner(self.current_board()).is_some() {
            SmallVec::new()
        } else {
            self.current_board().open_cells()
        }
    }

    // === Transitions ===

    /// Dispatch a presentation-layer event to its transition.
    #[must_use]
    pub fn transition(&self, event: Event) -> Self {
        match event {
            Event::CellClick(cell) => self.apply_move(cell),
            Event::JumpClick(step) => self.jump_to(step),
            Event::ToggleClick => self.toggle_order(),
        }
    }

    /// Place the next mark at `cell`.
    ///
    /// Silently returns the state unchanged if the current board already
    /// has a winner or the cell is occupied. Otherwise truncates any
    /// forward history past the current step (undo-then-branch), appends
    /// the new snapshot, and advances to it.
    #[must_use]
    pub fn apply_move(&self, cell: Cell) -> Self {
        let board = self.current_board();
        if evaluate_winner(board).is_some() || board.is_occupied(cell) {
            return self.clone();
        }

        let next_board = board.with_mark(cell, self.next_mark());
        let mut history = self.history.take(self.current_step + 1);
        history.push_back(MoveRecord::new(next_board, cell));

        Self {
            current_step: history.len() - 1,
            history,
            ascending: self.ascending,
        }
    }

    /// Jump to a prior (or later) history step.
    ///
    /// The presentation layer only offers valid steps; out-of-range input
    /// is clamped to the last snapshot so `current_step` stays in bounds.
    #[must_use]
    pub fn jump_to(&self, step: usize) -> Self {
        Self {
            history: self.history.clone(),
            current_step: step.min(self.history.len() - 1),
            ascending: self.ascending,
        }
    }

    /// Flip the move-list display order. Display-only, history untouched.
    #[must_use]
    pub fn toggle_order(&self) -> Self {
        Self {
            history: self.history.clone(),
            current_step: self.current_step,
            ascending: !self.ascending,
        }
    }
}
