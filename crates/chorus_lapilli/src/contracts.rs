//! Precondition checks for tap handling.
//!
//! Each legality rule is a named check; the engine composes them per
//! tap kind before mutating any state, so a failed check always leaves
//! the game untouched.

use crate::action::TapError;
use crate::cell::Cell;
use crate::engine::GameEngine;
use crate::invariants::{ChorusInvariants, InvariantSet};
use crate::rules::{adjacency, movement};
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// Precondition: the tapped cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects taps on occupied cells.
    pub fn check(board: &Board, cell: Cell) -> Result<(), TapError> {
        if board.is_empty(cell) {
            Ok(())
        } else {
            Err(TapError::CellOccupied(cell))
        }
    }
}

/// Precondition: the tapped cell holds the active player's own stone.
pub struct OwnPiece;

impl OwnPiece {
    /// Rejects taps on empty cells and on opponent stones.
    pub fn check(board: &Board, player: Player, cell: Cell) -> Result<(), TapError> {
        if board.get(cell) == Square::Occupied(player) {
            Ok(())
        } else {
            Err(TapError::NotYourPiece(cell))
        }
    }
}

/// Precondition: the center rule permits selecting this stone.
///
/// A player holding the center must either win in one step or vacate
/// it: the tapped stone is selectable only if some adjacent relocation
/// wins immediately, or if it is the center stone itself. Players not
/// holding the center may select any of their stones.
pub struct CenterRule;

impl CenterRule {
    /// Applies the win-or-vacate restriction while the center is held.
    pub fn check(board: &Board, player: Player, cell: Cell) -> Result<(), TapError> {
        if board.get(Cell::Center) != Square::Occupied(player) {
            return Ok(());
        }
        if cell.is_center() || movement::can_win_by_moving(board, player, cell) {
            Ok(())
        } else {
            Err(TapError::CenterRestricted(cell))
        }
    }
}

/// Precondition: the destination is adjacent to the selected source.
pub struct AdjacentDestination;

impl AdjacentDestination {
    /// Rejects destinations outside the source's one-step reach.
    pub fn check(from: Cell, to: Cell) -> Result<(), TapError> {
        if adjacency::is_adjacent(from, to) {
            Ok(())
        } else {
            Err(TapError::NotAdjacent { from, to })
        }
    }
}

/// Composite precondition: a placement is legal on any empty cell.
pub struct LegalPlacement;

impl LegalPlacement {
    /// Validates all preconditions for placing a stone.
    #[instrument(skip(board))]
    pub fn check(board: &Board, cell: Cell) -> Result<(), TapError> {
        CellIsEmpty::check(board, cell)
    }
}

/// Composite precondition: selecting a movement source.
pub struct LegalSelection;

impl LegalSelection {
    /// Validates all preconditions for selecting a stone to move.
    #[instrument(skip(board))]
    pub fn check(board: &Board, player: Player, cell: Cell) -> Result<(), TapError> {
        OwnPiece::check(board, player, cell)?;
        CenterRule::check(board, player, cell)?;
        Ok(())
    }
}

/// Composite precondition: completing a move to a destination.
pub struct LegalDestination;

impl LegalDestination {
    /// Validates all preconditions for the destination of a move.
    #[instrument(skip(board))]
    pub fn check(board: &Board, from: Cell, to: Cell) -> Result<(), TapError> {
        if !board.is_empty(to) {
            return Err(TapError::DestinationOccupied(to));
        }
        AdjacentDestination::check(from, to)
    }
}

/// Asserts that all engine invariants hold after an accepted tap.
///
/// Checked in debug builds only.
#[instrument(skip(engine))]
pub fn assert_invariants(engine: &GameEngine) {
    if cfg!(debug_assertions) {
        if let Err(violations) = ChorusInvariants::check_all(engine) {
            let summary = violations
                .iter()
                .map(|violation| violation.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            panic!("invariant violation after accepted tap: {summary}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(x: &[Cell], o: &[Cell]) -> Board {
        let mut board = Board::new();
        for &cell in x {
            board.set(cell, Square::Occupied(Player::X));
        }
        for &cell in o {
            board.set(cell, Square::Occupied(Player::O));
        }
        board
    }

    #[test]
    fn placement_requires_an_empty_cell() {
        let board = board_with(&[Cell::Center], &[]);
        assert!(LegalPlacement::check(&board, Cell::TopLeft).is_ok());
        assert_eq!(
            LegalPlacement::check(&board, Cell::Center),
            Err(TapError::CellOccupied(Cell::Center))
        );
    }

    #[test]
    fn selection_requires_own_stone() {
        let board = board_with(&[Cell::TopLeft], &[Cell::TopRight]);
        assert!(OwnPiece::check(&board, Player::X, Cell::TopLeft).is_ok());
        assert_eq!(
            OwnPiece::check(&board, Player::X, Cell::TopRight),
            Err(TapError::NotYourPiece(Cell::TopRight))
        );
        assert_eq!(
            OwnPiece::check(&board, Player::X, Cell::Center),
            Err(TapError::NotYourPiece(Cell::Center))
        );
    }

    #[test]
    fn center_rule_is_inert_while_center_is_free() {
        let board = board_with(
            &[Cell::TopLeft, Cell::TopRight, Cell::BottomCenter],
            &[Cell::TopCenter, Cell::MiddleLeft, Cell::MiddleRight],
        );
        for cell in [Cell::TopLeft, Cell::TopRight, Cell::BottomCenter] {
            assert!(CenterRule::check(&board, Player::X, cell).is_ok());
        }
    }

    #[test]
    fn center_rule_pins_stones_that_cannot_win() {
        // X holds the center with no winning one-step relocation.
        let board = board_with(
            &[Cell::Center, Cell::TopCenter, Cell::MiddleLeft],
            &[Cell::TopRight, Cell::MiddleRight, Cell::BottomCenter],
        );
        assert_eq!(
            CenterRule::check(&board, Player::X, Cell::TopCenter),
            Err(TapError::CenterRestricted(Cell::TopCenter))
        );
        assert!(CenterRule::check(&board, Player::X, Cell::Center).is_ok());
    }

    #[test]
    fn destination_must_be_adjacent_and_empty() {
        let board = board_with(&[Cell::TopLeft], &[Cell::TopCenter]);
        assert!(LegalDestination::check(&board, Cell::TopLeft, Cell::MiddleLeft).is_ok());
        assert_eq!(
            LegalDestination::check(&board, Cell::TopLeft, Cell::TopCenter),
            Err(TapError::DestinationOccupied(Cell::TopCenter))
        );
        assert_eq!(
            LegalDestination::check(&board, Cell::TopLeft, Cell::BottomRight),
            Err(TapError::NotAdjacent {
                from: Cell::TopLeft,
                to: Cell::BottomRight
            })
        );
    }
}
