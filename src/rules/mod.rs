//! Game rules: win detection and derived status.
//!
//! Nothing in here mutates state. `evaluate_winner` is a pure function of
//! a board snapshot; `Status` is derived from the current step on demand.

pub mod winner;

pub use winner::{evaluate_winner, Status, Winner, WIN_LINES};
