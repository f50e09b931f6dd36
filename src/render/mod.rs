//! Render boundary: state-to-display projection for presentation layers.

pub mod view;

pub use view::{render, CellView, GameView, MoveEntry};
