//! Game rules for chorus lapilli.
//!
//! This module contains pure functions for evaluating board state:
//! the fixed adjacency graph, win detection, and the hypothetical-move
//! search behind the center rule. Rules are separated from board
//! storage so the precondition checks in `contracts` can compose them.

pub mod adjacency;
pub mod movement;
pub mod win;

pub use adjacency::{is_adjacent, neighbors};
pub use movement::{can_win_by_moving, winning_destinations};
pub use win::{WIN_LINES, check_winner};
