//! Game history controller: an ordered sequence of board snapshots plus a
//! pointer selecting the one currently displayed.

use crate::board::Board;
use crate::common::{GameStatus, Mark, MoveError};

use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use log::debug;

/// Core game state: the move history and the current-snapshot pointer.
///
/// The history starts with the all-empty board and grows by one snapshot per
/// accepted move. Jumping to an earlier snapshot and then playing prunes the
/// abandoned future before appending, so the history is always a single line
/// of play. Stored snapshots are never mutated.
pub struct Game {
    history: Vec<Board>,
    current: usize,
}

impl Game {
    /// Fresh game: history holds only the empty board, X to move.
    pub fn new() -> Self {
        Game {
            history: vec![Board::empty()],
            current: 0,
        }
    }

    /// The currently displayed snapshot, `history[current]`.
    pub fn board(&self) -> &Board {
        &self.history[self.current]
    }

    /// Whose turn it is at the current snapshot. X moves first, so an even
    /// pointer index means X, odd means O.
    pub fn turn(&self) -> Mark {
        if self.current % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }

    /// All recorded snapshots, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Index of the displayed snapshot within the history.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Number of recorded snapshots (always at least 1).
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Status derived from the displayed snapshot.
    pub fn status(&self) -> GameStatus {
        match self.board().winner() {
            Some(mark) => GameStatus::Won(mark),
            None => GameStatus::InProgress,
        }
    }

    /// Attempt to mark `index` for the player whose turn it is.
    ///
    /// Rejected without state change when the current board already has a
    /// winner, the index is out of range, or the cell is occupied. On
    /// success any snapshots after the current one are discarded, the new
    /// snapshot is appended and the pointer moves to it.
    pub fn play(&mut self, index: usize) -> Result<(), MoveError> {
        if self.board().winner().is_some() {
            return Err(MoveError::GameOver);
        }
        let mark = self.turn();
        let next = self.board().with_mark(index, mark)?;
        self.history.truncate(self.current + 1);
        self.history.push(next);
        self.current = self.history.len() - 1;
        debug!(
            "move {} by {}, history length {}",
            index,
            mark,
            self.history.len()
        );
        Ok(())
    }

    /// Move the pointer to snapshot `index` without touching the history.
    pub fn jump_to(&mut self, index: usize) -> Result<(), MoveError> {
        if index >= self.history.len() {
            return Err(MoveError::OutOfRange);
        }
        self.current = index;
        debug!("jumped to snapshot {}", index);
        Ok(())
    }

    /// History entries paired with their display labels, for UI enumeration.
    pub fn move_list(&self) -> Vec<(usize, String)> {
        self.history
            .iter()
            .enumerate()
            .map(|(i, _)| {
                let label = if i == 0 {
                    String::from("game start")
                } else {
                    format!("move #{}", i)
                };
                (i, label)
            })
            .collect()
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
