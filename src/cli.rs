#![cfg(feature = "std")]

//! Interactive terminal session: input parsing and the game loop.

use crate::common::GameStatus;
use crate::game::Game;
use crate::ui::{render_board, render_move_list, status_line};
use std::io::{BufRead, Write};

use crate::config::{BOARD_SIZE, NUM_CELLS};

/// One line of user input, parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Mark the cell at this row-major index.
    Move(usize),
    /// Jump to this history entry.
    Jump(usize),
    /// Print the move list.
    Moves,
    /// Reprint the board and status.
    Board,
    /// Print the command summary.
    Help,
    /// End the session.
    Quit,
}

/// Parse a cell reference: a letter-column coordinate (`a1`..`c3`) or a bare
/// row-major index (`0`..`8`).
pub fn parse_cell(input: &str) -> Option<usize> {
    if let Ok(index) = input.parse::<usize>() {
        return if index < NUM_CELLS { Some(index) } else { None };
    }
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_lowercase();
    let col = (col_ch as u8).wrapping_sub(b'a') as usize;
    let row: usize = chars.as_str().parse().ok()?;
    if col >= BOARD_SIZE || row == 0 || row > BOARD_SIZE {
        return None;
    }
    Some((row - 1) * BOARD_SIZE + col)
}

/// Parse one trimmed input line into a [`Command`].
pub fn parse_command(input: &str) -> Option<Command> {
    let input = input.trim();
    match input {
        "moves" => return Some(Command::Moves),
        "board" => return Some(Command::Board),
        "help" => return Some(Command::Help),
        "quit" | "exit" => return Some(Command::Quit),
        _ => {}
    }
    if let Some(rest) = input.strip_prefix("jump") {
        let index: usize = rest.trim().parse().ok()?;
        return Some(Command::Jump(index));
    }
    parse_cell(input).map(Command::Move)
}

const HELP: &str = "\
commands:
  a1..c3 or 0..8   mark a cell
  jump N           go to history entry N
  moves            list history entries
  board            reprint the board
  help             this summary
  quit             end the session
";

/// Drive a game session over the given reader and writer until `quit` or EOF.
///
/// Rejected moves print their reason and change nothing; a win is announced
/// but the session stays open so the player can still jump through history.
pub fn run<R: BufRead, W: Write>(game: &mut Game, reader: R, writer: &mut W) -> std::io::Result<()> {
    write!(writer, "{}", render_board(game.board()))?;
    writeln!(writer, "{}", status_line(game))?;

    for line in reader.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Some(command) => command,
            None => {
                writeln!(writer, "Unrecognized input: {:?} (try 'help')", line.trim())?;
                continue;
            }
        };
        match command {
            Command::Move(index) => match game.play(index) {
                Ok(()) => {
                    write!(writer, "{}", render_board(game.board()))?;
                    writeln!(writer, "{}", status_line(game))?;
                    if let GameStatus::Won(mark) = game.status() {
                        log::info!("game won by {}", mark);
                    }
                }
                Err(err) => writeln!(writer, "Move rejected: {}", err)?,
            },
            Command::Jump(index) => match game.jump_to(index) {
                Ok(()) => {
                    write!(writer, "{}", render_board(game.board()))?;
                    writeln!(writer, "{}", status_line(game))?;
                }
                Err(err) => writeln!(writer, "Jump rejected: {}", err)?,
            },
            Command::Moves => write!(writer, "{}", render_move_list(game))?,
            Command::Board => {
                write!(writer, "{}", render_board(game.board()))?;
                writeln!(writer, "{}", status_line(game))?;
            }
            Command::Help => write!(writer, "{}", HELP)?,
            Command::Quit => break,
        }
    }
    Ok(())
}
