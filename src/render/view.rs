//! Render boundary: a pure projection from game state to display data.
//!
//! The presentation layer is a dumb consumer: it draws a [`GameView`] and
//! forwards clicks back as [`Event`](crate::core::Event)s. Nothing here
//! mutates state, so the engine is fully testable without a UI harness.

use serde::{Deserialize, Serialize};

use crate::core::cell::Cell;
use crate::core::mark::Mark;
use crate::core::state::GameState;

/// One board cell as the UI should draw it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    /// The mark to draw, if any.
    pub mark: Option<Mark>,

    /// Whether this cell is part of the winning line.
    pub highlight: bool,
}

/// One entry in the move list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// History step this entry jumps to.
    pub step: usize,

    /// Button label.
    pub label: String,

    /// Whether this is the displayed step (drawn bold).
    pub is_current: bool,
}

/// Everything the presentation layer needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// The 9 cells, row-major, with highlight flags.
    pub board: [CellView; Cell::COUNT],

    /// Move list, ordered per the state's display-order flag.
    pub moves: Vec<MoveEntry>,

    /// Status line text.
    pub status: String,

    /// Label for the order-toggle button.
    pub toggle_label: String,

    /// The displayed history step.
    pub current_step: usize,
}

/// Project a game state into display data.
///
/// ```
/// use rust_ttt::{render, Cell, GameState};
///
/// let state = GameState::new().apply_move(Cell::new(0));
/// let view = render(&state);
///
/// assert_eq!(view.status, "Next player: O");
/// assert_eq!(view.moves[1].label, "Go to move #1 in col: 0 row: 0");
/// ```
#[must_use]
pub fn render(state: &GameState) -> GameView {
    let status = state.status();
    let winner = status.winner();

    let mut board = [CellView {
        mark: None,
        highlight: false,
    }; Cell::COUNT];
    for cell in Cell::all() {
        board[cell.index()] = CellView {
            mark: state.current_board().get(cell),
            highlight: winner.is_some_and(|w| w.contains(cell)),
        };
    }

    let mut moves: Vec<MoveEntry> = state
        .history()
        .iter()
        .enumerate()
        .map(|(step, record)| MoveEntry {
            step,
            label: move_label(step, record.placed),
            is_current: step == state.current_step(),
        })
        .collect();
    if !state.is_ascending() {
        moves.reverse();
    }

    GameView {
        board,
        moves,
        status: status.to_string(),
        toggle_label: if state.is_ascending() {
            "ASC toggle".to_string()
        } else {
            "DESC toggle".to_string()
        },
        current_step: state.current_step(),
    }
}

fn move_label(step: usize, placed: Option<Cell>) -> String {
    match placed {
        Some(cell) => format!(
            "Go to move #{} in col: {} row: {}",
            step,
            cell.col(),
            cell.row()
        ),
        None => "Go to game start".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_fresh_game() {
        let view = render(&GameState::new());

        assert_eq!(view.status, "Next player: X");
        assert_eq!(view.toggle_label, "ASC toggle");
        assert_eq!(view.current_step, 0);
        assert_eq!(view.moves.len(), 1);
        assert_eq!(view.moves[0].label, "Go to game start");
        assert!(view.moves[0].is_current);
        assert!(view.board.iter().all(|c| c.mark.is_none() && !c.highlight));
    }

    #[test]
    fn test_move_labels_carry_row_and_col() {
        let state = GameState::new()
            .apply_move(Cell::new(0))
            .apply_move(Cell::new(5));
        let view = render(&state);

        assert_eq!(view.moves[1].label, "Go to move #1 in col: 0 row: 0");
        assert_eq!(view.moves[2].label, "Go to move #2 in col: 2 row: 1");
        assert!(view.moves[2].is_current);
        assert!(!view.moves[1].is_current);
    }

    #[test]
    fn test_descending_order_reverses_moves() {
        let state = GameState::new()
            .apply_move(Cell::new(0))
            .apply_move(Cell::new(1))
            .toggle_order();
        let view = render(&state);

        assert_eq!(view.toggle_label, "DESC toggle");
        let steps: Vec<_> = view.moves.iter().map(|m| m.step).collect();
        assert_eq!(steps, vec![2, 1, 0]);
    }

    #[test]
    fn test_winner_highlights_line() {
        // X takes the left column: 0, 3, 6.
        let state = GameState::new()
            .apply_move(Cell::new(0))
            .apply_move(Cell::new(1))
            .apply_move(Cell::new(3))
            .apply_move(Cell::new(4))
            .apply_move(Cell::new(6));
        let view = render(&state);

        assert_eq!(view.status, "Winner: X");
        for cell in Cell::all() {
            let expected = matches!(cell.index(), 0 | 3 | 6);
            assert_eq!(view.board[cell.index()].highlight, expected);
        }
    }

    #[test]
    fn test_jump_renders_earlier_snapshot() {
        let state = GameState::new()
            .apply_move(Cell::new(0))
            .apply_move(Cell::new(1))
            .jump_to(1);
        let view = render(&state);

        assert_eq!(view.current_step, 1);
        assert_eq!(view.board[0].mark, Some(Mark::X));
        assert_eq!(view.board[1].mark, None);
        assert!(view.moves[1].is_current);
        assert_eq!(view.moves.len(), 3); // Full history still listed.
    }

    #[test]
    fn test_view_serialization() {
        let view = render(&GameState::new().apply_move(Cell::new(4)));
        let json = serde_json::to_string(&view).unwrap();
        let deserialized: GameView = serde_json::from_str(&json).unwrap();
        assert_eq!(view, deserialized);
    }
}
