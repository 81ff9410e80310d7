//! Cursor movement for keyboard navigation.

use chorus_lapilli::Cell;
use crossterm::event::KeyCode;

/// Moves the cursor one step on the grid, clamping at the edges.
pub fn move_cursor(cursor: Cell, key: KeyCode) -> Cell {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        _ => (row, col),
    };
    Cell::from_row_col(row, col).unwrap_or(cursor)
}
