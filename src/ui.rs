#![cfg(feature = "std")]

//! Rendering helpers for the CLI: board grid, status line, move list.

use crate::board::Board;
use crate::common::{GameStatus, Mark};
use crate::config::BOARD_SIZE;
use crate::game::Game;
use std::fmt::Write as _;

/// Render the grid with letter columns and numbered rows, in the form
/// the input parser accepts (`a1` is the top-left cell).
pub fn render_board(board: &Board) -> String {
    let mut out = String::from("  ");
    for c in 0..BOARD_SIZE {
        let ch = (b'a' + c as u8) as char;
        let _ = write!(out, " {}", ch);
    }
    out.push('\n');
    for r in 0..BOARD_SIZE {
        let _ = write!(out, "{} ", r + 1);
        for c in 0..BOARD_SIZE {
            let glyph = match board.cells()[r * BOARD_SIZE + c] {
                Some(Mark::X) => 'X',
                Some(Mark::O) => 'O',
                None => '.',
            };
            let _ = write!(out, " {}", glyph);
        }
        out.push('\n');
    }
    out
}

/// Derived status text: the winner if one exists, otherwise whose turn it is.
pub fn status_line(game: &Game) -> String {
    match game.status() {
        GameStatus::Won(mark) => format!("Winner: {}", mark),
        GameStatus::InProgress => format!("Next player: {}", game.turn()),
    }
}

/// One line per history entry, marking the entry currently displayed.
pub fn render_move_list(game: &Game) -> String {
    let mut out = String::new();
    for (index, label) in game.move_list() {
        if index == game.current_index() {
            let _ = writeln!(out, "{}: {} (you are here)", index, label);
        } else {
            let _ = writeln!(out, "{}: {}", index, label);
        }
    }
    out
}
