//! Input boundary: the events a presentation layer can send.
//!
//! The engine consumes exactly three kinds of input. Each one maps to a
//! pure state transition on [`GameState`](super::state::GameState); the
//! presentation layer never touches state directly.

use serde::{Deserialize, Serialize};

use super::cell::Cell;

/// A user interaction forwarded by the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Event {
    /// A board cell was clicked: request a move there.
    CellClick(Cell),
    /// A move-list entry was clicked: jump to that history step.
    JumpClick(usize),
    /// The order toggle was clicked: flip the move-list direction.
    ToggleClick,
}
