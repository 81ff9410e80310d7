//! The chorus lapilli game engine.
//!
//! Holds the authoritative board state, accepts a stream of cell taps,
//! and reports status after each accepted interaction. Legality lives
//! in `contracts` and `rules`; this module sequences them and owns all
//! mutation.

use crate::action::{Tap, TapError};
use crate::cell::Cell;
use crate::contracts::{self, LegalDestination, LegalPlacement, LegalSelection};
use crate::rules::{adjacency, win};
use crate::types::{Board, GameStatus, Phase, PlacementCounts, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Rules engine for chorus lapilli.
///
/// Exactly one writer mutates the state: [`GameEngine::interact`].
/// Every rejected tap leaves the engine bit-for-bit unchanged, so a
/// frontend may treat rejections as silent no-ops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEngine {
    pub(crate) board: Board,
    pub(crate) to_move: Player,
    pub(crate) placements: PlacementCounts,
    pub(crate) selected: Option<Cell>,
    pub(crate) winner: Option<Player>,
}

impl GameEngine {
    /// Creates a fresh engine: empty board, X to place first.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            placements: PlacementCounts::new(),
            selected: None,
            winner: None,
        }
    }

    /// Processes one cell tap.
    ///
    /// During a player's placement phase a tap places a stone on an
    /// empty cell. During their movement phase the first tap selects one
    /// of their stones and the second relocates it to an adjacent empty
    /// cell; a rejected destination keeps the selection so the player
    /// can retry another cell.
    ///
    /// Returns what happened on success. On rejection, returns the
    /// reason and changes nothing.
    #[instrument(skip(self), fields(player = ?self.to_move))]
    pub fn interact(&mut self, cell: Cell) -> Result<Tap, TapError> {
        if self.winner.is_some() {
            return Err(TapError::GameOver);
        }
        let player = self.to_move;
        let tap = match self.phase_of(player) {
            Phase::Placement => self.place(player, cell)?,
            Phase::Movement => match self.selected {
                None => self.select(player, cell)?,
                Some(from) => self.relocate(player, from, cell)?,
            },
        };
        debug!(%tap, "tap accepted");
        contracts::assert_invariants(self);
        Ok(tap)
    }

    fn place(&mut self, player: Player, cell: Cell) -> Result<Tap, TapError> {
        LegalPlacement::check(&self.board, cell)?;
        self.board.set(cell, Square::Occupied(player));
        self.placements.record(player);
        self.winner = win::check_winner(&self.board);
        self.to_move = player.opponent();
        Ok(Tap::Placed(cell))
    }

    fn select(&mut self, player: Player, cell: Cell) -> Result<Tap, TapError> {
        LegalSelection::check(&self.board, player, cell)?;
        self.selected = Some(cell);
        Ok(Tap::Selected(cell))
    }

    fn relocate(&mut self, player: Player, from: Cell, to: Cell) -> Result<Tap, TapError> {
        LegalDestination::check(&self.board, from, to)?;
        self.board.set(from, Square::Empty);
        self.board.set(to, Square::Occupied(player));
        self.winner = win::check_winner(&self.board);
        self.selected = None;
        self.to_move = player.opponent();
        Ok(Tap::Moved { from, to })
    }

    /// Restores the initial state. Always available, even mid-game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// The board, read-only.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The active player.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// The winner, if the game is over.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// The pending movement source, if the active player has selected
    /// a stone but not yet a destination.
    pub fn selected(&self) -> Option<Cell> {
        self.selected
    }

    /// The placement ledger.
    pub fn placements(&self) -> PlacementCounts {
        self.placements
    }

    /// Current game status.
    pub fn status(&self) -> GameStatus {
        match self.winner {
            Some(player) => GameStatus::Won(player),
            None => GameStatus::InProgress,
        }
    }

    /// The active player's phase.
    pub fn phase(&self) -> Phase {
        self.phase_of(self.to_move)
    }

    /// The given player's phase. The two players may be in different
    /// phases at the same time.
    pub fn phase_of(&self, player: Player) -> Phase {
        self.placements.phase_of(player)
    }

    /// Cells the active player may usefully tap right now: empty cells
    /// while placing, selectable stones while moving. Empty once the
    /// game is over.
    #[instrument(skip(self))]
    pub fn valid_selections(&self) -> Vec<Cell> {
        if self.winner.is_some() {
            return Vec::new();
        }
        let player = self.to_move;
        match self.phase() {
            Phase::Placement => Cell::ALL
                .iter()
                .copied()
                .filter(|&cell| self.board.is_empty(cell))
                .collect(),
            Phase::Movement => Cell::ALL
                .iter()
                .copied()
                .filter(|&cell| LegalSelection::check(&self.board, player, cell).is_ok())
                .collect(),
        }
    }

    /// Adjacent empty destinations of the pending selection, to drive
    /// "choose a destination" prompts. Empty when nothing is selected.
    #[instrument(skip(self))]
    pub fn valid_destinations(&self) -> Vec<Cell> {
        match self.selected {
            Some(from) if self.winner.is_none() => adjacency::neighbors(from)
                .iter()
                .copied()
                .filter(|&cell| self.board.is_empty(cell))
                .collect(),
            _ => Vec::new(),
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
