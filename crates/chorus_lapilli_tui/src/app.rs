//! Application state: engine, cursor, and status line.

use chorus_lapilli::{Cell, GameEngine, GameStatus, Phase};
use crossterm::event::KeyCode;
use tracing::debug;

use crate::input;

/// Main application state.
pub struct App {
    engine: GameEngine,
    cursor: Cell,
    status: String,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        let mut app = Self {
            engine: GameEngine::new(),
            cursor: Cell::Center,
            status: String::new(),
        };
        app.refresh_status();
        app
    }

    /// The engine, read-only for rendering.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Current cursor cell.
    pub fn cursor(&self) -> Cell {
        self.cursor
    }

    /// Current status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Taps the cell under the cursor.
    pub fn tap_cursor(&mut self) {
        self.tap(self.cursor);
    }

    /// Taps a cell by digit key, `'1'`..=`'9'` mapping to cells 0-8.
    pub fn tap_digit(&mut self, digit: char) {
        let Some(number) = digit.to_digit(10) else {
            return;
        };
        if number == 0 {
            return;
        }
        if let Some(cell) = Cell::from_index(number as usize - 1) {
            self.cursor = cell;
            self.tap(cell);
        }
    }

    /// Moves the cursor with an arrow key.
    pub fn move_cursor(&mut self, key: KeyCode) {
        self.cursor = input::move_cursor(self.cursor, key);
    }

    /// Resets the game.
    pub fn reset(&mut self) {
        debug!("resetting game");
        self.engine.reset();
        self.refresh_status();
    }

    fn tap(&mut self, cell: Cell) {
        match self.engine.interact(cell) {
            Ok(tap) => {
                debug!(%tap, "tap accepted");
                self.refresh_status();
            }
            Err(err) => {
                // The engine rejected the tap and changed nothing;
                // surface the reason in the status line.
                debug!(%err, "tap rejected");
                self.status = format!("{err}.");
            }
        }
    }

    fn refresh_status(&mut self) {
        self.status = match self.engine.status() {
            GameStatus::Won(player) => {
                format!("Winner: {player:?}! Press 'r' to restart or 'q' to quit.")
            }
            GameStatus::InProgress => {
                let player = self.engine.to_move();
                match self.engine.phase() {
                    Phase::Placement => format!("Next player: {player:?}"),
                    Phase::Movement => format!("Next player: {player:?} (move a piece)"),
                }
            }
        };
    }
}
