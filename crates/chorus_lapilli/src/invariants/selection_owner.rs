//! Selection ownership invariant.

use super::Invariant;
use crate::engine::GameEngine;
use crate::types::{Phase, Square};

/// Invariant: a pending selection belongs to the active player.
///
/// Whenever a source is selected, the selected cell holds the active
/// player's stone and the active player is in the movement phase. A
/// selection never survives a completed move or a reset.
pub struct SelectionOwnerInvariant;

impl Invariant<GameEngine> for SelectionOwnerInvariant {
    fn holds(engine: &GameEngine) -> bool {
        match engine.selected() {
            None => true,
            Some(cell) => {
                engine.board().get(cell) == Square::Occupied(engine.to_move())
                    && engine.phase() == Phase::Movement
            }
        }
    }

    fn description() -> &'static str {
        "A pending selection holds the active player's stone in the movement phase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;
    use crate::types::Player;

    fn engine_in_movement() -> GameEngine {
        let mut engine = GameEngine::new();
        // X: 0, 2, 7 / O: 1, 3, 5 - nobody holds the center.
        for cell in [
            Cell::TopLeft,
            Cell::TopCenter,
            Cell::TopRight,
            Cell::MiddleLeft,
            Cell::BottomCenter,
            Cell::MiddleRight,
        ] {
            engine.interact(cell).unwrap();
        }
        engine
    }

    #[test]
    fn no_selection_trivially_holds() {
        assert!(SelectionOwnerInvariant::holds(&GameEngine::new()));
    }

    #[test]
    fn holds_after_a_selection() {
        let mut engine = engine_in_movement();
        engine.interact(Cell::TopLeft).unwrap();
        assert_eq!(engine.selected(), Some(Cell::TopLeft));
        assert!(SelectionOwnerInvariant::holds(&engine));
    }

    #[test]
    fn foreign_selection_violates() {
        let mut engine = engine_in_movement();
        // O's stone recorded as X's selection.
        engine.selected = Some(Cell::TopCenter);
        assert_eq!(engine.to_move(), Player::X);
        assert!(!SelectionOwnerInvariant::holds(&engine));
    }
}
