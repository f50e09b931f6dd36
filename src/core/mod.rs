//! Core engine types: cells, marks, boards, events, game state.
//!
//! This module contains the fundamental building blocks. Everything here
//! is a plain value; the win/status rules live in `rules` and the render
//! projection in `render`.

pub mod board;
pub mod cell;
pub mod event;
pub mod mark;
pub mod state;

pub use board::Board;
pub use cell::Cell;
pub use event::Event;
pub use mark::Mark;
pub use state::{GameState, MoveRecord};
