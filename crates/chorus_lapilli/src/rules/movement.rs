//! Movement-phase legality: hypothetical one-step relocations.

use super::adjacency::neighbors;
use super::win::check_winner;
use crate::cell::Cell;
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// Adjacent empty destinations of `from` whose relocation immediately
/// wins for `player`.
///
/// Each candidate is evaluated on a scratch board: lift the stone, drop
/// it on the destination, run win detection.
#[instrument(skip(board))]
pub fn winning_destinations(board: &Board, player: Player, from: Cell) -> Vec<Cell> {
    neighbors(from)
        .iter()
        .copied()
        .filter(|&to| board.is_empty(to))
        .filter(|&to| {
            let mut trial = board.clone();
            trial.set(from, Square::Empty);
            trial.set(to, Square::Occupied(player));
            check_winner(&trial) == Some(player)
        })
        .collect()
}

/// Whether relocating `from` one step can immediately win for `player`.
///
/// This is the center-escape search: a player holding the center may
/// only select a stone that passes this test, or the center stone
/// itself.
#[instrument(skip(board))]
pub fn can_win_by_moving(board: &Board, player: Player, from: Cell) -> bool {
    !winning_destinations(board, player, from).is_empty()
}
