//! # rust-ttt
//!
//! A tic-tac-toe game engine with move history and time travel.
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: Every input is an `Event`, every transition is
//!    `(&GameState, Event) -> GameState`. No in-place mutation API, so
//!    history snapshots can never alias each other.
//!
//! 2. **Derived, Not Stored**: The next mark, the winner, and the status
//!    line are all computed from the current snapshot. Only the history,
//!    the current step, and the display-order flag are state.
//!
//! 3. **UI-Free Core**: The presentation layer consumes a `GameView` (plain
//!    data) and forwards clicks back as `Event`s. The engine is testable
//!    without any rendering harness.
//!
//! ## Architecture
//!
//! - **Persistent History**: `im::Vector` snapshots make time travel and
//!   undo-then-branch truncation O(1) structural-sharing operations.
//!
//! - **Silent Guards**: Clicking an occupied cell or moving after a win is
//!   a no-op, not an error. There is no error taxonomy at this scale.
//!
//! ## Modules
//!
//! - `core`: Cells, marks, boards, input events, game state
//! - `rules`: Win detection and derived status
//! - `render`: Pure projection from state to display data

pub mod core;
pub mod render;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{Board, Cell, Event, GameState, Mark, MoveRecord};

pub use crate::rules::{evaluate_winner, Status, Winner, WIN_LINES};

pub use crate::render::{render, CellView, GameView, MoveEntry};
