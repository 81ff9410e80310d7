//! Tap events and rejection reasons.
//!
//! A tap is the engine's only input: the index of a cell the user
//! touched. Accepted taps are reported as [`Tap`] events; illegal taps
//! come back as a [`TapError`] and leave the engine unchanged.

use crate::cell::Cell;
use serde::{Deserialize, Serialize};

/// An accepted interaction and its effect on the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tap {
    /// A stone was placed on an empty cell.
    Placed(Cell),
    /// A stone was selected as the source of a move.
    Selected(Cell),
    /// A stone was relocated to an adjacent empty cell.
    Moved {
        /// Source cell, now empty.
        from: Cell,
        /// Destination cell, now holding the moved stone.
        to: Cell,
    },
}

impl std::fmt::Display for Tap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tap::Placed(cell) => write!(f, "placed at {}", cell.label()),
            Tap::Selected(cell) => write!(f, "selected {}", cell.label()),
            Tap::Moved { from, to } => write!(f, "moved {} -> {}", from.label(), to.label()),
        }
    }
}

/// Reason a tap was rejected.
///
/// Whenever one of these is returned, engine state is unchanged. Callers
/// wanting a silent no-op surface simply discard the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum TapError {
    /// The game already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// Placement target is occupied.
    #[display("{} is already occupied", _0)]
    CellOccupied(Cell),

    /// First click must land on the active player's own stone.
    #[display("{} does not hold your stone", _0)]
    NotYourPiece(Cell),

    /// The center rule forbids selecting this stone: it cannot win in one
    /// step, and only the center stone may move otherwise.
    #[display("{} cannot win in one step; move the center stone instead", _0)]
    CenterRestricted(Cell),

    /// Move destination is occupied. The selection is retained.
    #[display("Destination {} is occupied", _0)]
    DestinationOccupied(Cell),

    /// Move destination is not adjacent to the selected stone. The
    /// selection is retained.
    #[display("{} is not adjacent to {}", to, from)]
    NotAdjacent {
        /// The selected source cell.
        from: Cell,
        /// The rejected destination cell.
        to: Cell,
    },
}

impl std::error::Error for TapError {}
