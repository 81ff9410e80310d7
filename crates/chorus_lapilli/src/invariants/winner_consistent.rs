//! Winner cache consistency invariant.

use super::Invariant;
use crate::engine::GameEngine;
use crate::rules::win::check_winner;

/// Invariant: the cached winner agrees with fresh win detection.
///
/// The engine recomputes the winner from scratch after every accepted
/// interaction; nothing else may write the cache.
pub struct WinnerConsistentInvariant;

impl Invariant<GameEngine> for WinnerConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.winner() == check_winner(engine.board())
    }

    fn description() -> &'static str {
        "The cached winner equals win detection run fresh on the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;
    use crate::types::Player;

    #[test]
    fn fresh_engine_holds() {
        assert!(WinnerConsistentInvariant::holds(&GameEngine::new()));
    }

    #[test]
    fn holds_after_a_placement_win() {
        let mut engine = GameEngine::new();
        // X takes the top row while O places below it.
        for cell in [
            Cell::TopLeft,
            Cell::MiddleLeft,
            Cell::TopCenter,
            Cell::Center,
            Cell::TopRight,
        ] {
            engine.interact(cell).unwrap();
        }
        assert_eq!(engine.winner(), Some(Player::X));
        assert!(WinnerConsistentInvariant::holds(&engine));
    }

    #[test]
    fn stale_cache_violates() {
        let mut engine = GameEngine::new();
        engine.interact(Cell::TopLeft).unwrap();

        engine.winner = Some(Player::O);
        assert!(!WinnerConsistentInvariant::holds(&engine));
    }
}
