//! Stone ledger invariant: board contents match the placement counts.

use super::Invariant;
use crate::engine::GameEngine;
use crate::types::{Player, STONES_PER_PLAYER};

/// Invariant: each player's on-board stone count equals the number of
/// placements recorded for them, never exceeding three.
///
/// Placement adds a stone and a ledger entry together; movement
/// relocates a stone without touching either count.
pub struct StoneLedgerInvariant;

impl Invariant<GameEngine> for StoneLedgerInvariant {
    fn holds(engine: &GameEngine) -> bool {
        [Player::X, Player::O].into_iter().all(|player| {
            let placed = engine.placements().count(player);
            placed <= STONES_PER_PLAYER && engine.board().count(player) == placed as usize
        })
    }

    fn description() -> &'static str {
        "On-board stones match the placement counts (at most three per player)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;
    use crate::types::Square;

    #[test]
    fn fresh_engine_holds() {
        assert!(StoneLedgerInvariant::holds(&GameEngine::new()));
    }

    #[test]
    fn holds_through_placement_and_movement() {
        let mut engine = GameEngine::new();
        for cell in [
            Cell::TopLeft,
            Cell::TopCenter,
            Cell::TopRight,
            Cell::MiddleLeft,
            Cell::BottomCenter,
            Cell::MiddleRight,
        ] {
            engine.interact(cell).unwrap();
            assert!(StoneLedgerInvariant::holds(&engine));
        }

        // X slides 0 to 4: stone counts stay 3-3.
        engine.interact(Cell::TopLeft).unwrap();
        engine.interact(Cell::Center).unwrap();
        assert!(StoneLedgerInvariant::holds(&engine));
    }

    #[test]
    fn planted_stone_violates() {
        let mut engine = GameEngine::new();
        engine.interact(Cell::TopLeft).unwrap();

        engine.board.set(Cell::BottomRight, Square::Occupied(Player::X));
        assert!(!StoneLedgerInvariant::holds(&engine));
    }
}
