//! Player marks.
//!
//! Two marks, `X` and `O`. `X` always moves first, so the mark to place
//! at any history step is derived from the step index rather than stored.

use serde::{Deserialize, Serialize};

/// A player mark on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Get the opposing mark.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// The mark that moves at the given history step.
    ///
    /// `X` moves first, so even steps are `X` and odd steps are `O`.
    ///
    /// ```
    /// use rust_ttt::Mark;
    ///
    /// assert_eq!(Mark::for_step(0), Mark::X);
    /// assert_eq!(Mark::for_step(1), Mark::O);
    /// assert_eq!(Mark::for_step(2), Mark::X);
    /// ```
    #[must_use]
    pub const fn for_step(step: usize) -> Self {
        if step % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}
