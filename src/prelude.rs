//! Commonly used types and utilities for ease of import.

pub use crate::{Board, Game, GameStatus, Mark, MoveError};

#[cfg(feature = "std")]
pub use crate::{render_board, render_move_list, status_line};
