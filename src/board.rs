//! Board snapshot: one immutable state of the 9-cell grid.

use crate::common::{Cell, Mark, MoveError};
use crate::config::{BOARD_SIZE, NUM_CELLS, WINNING_LINES};
use core::fmt;

/// An immutable snapshot of the 3×3 grid, indexed 0–8 in row-major order.
///
/// A move never mutates a snapshot; [`Board::with_mark`] returns a new one,
/// so snapshots already recorded in a game history cannot change
/// retroactively.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; NUM_CELLS],
}

impl Board {
    /// The all-empty board.
    pub fn empty() -> Self {
        Board {
            cells: [None; NUM_CELLS],
        }
    }

    /// Cell at `index`, or `OutOfRange` for indices past the grid.
    pub fn cell(&self, index: usize) -> Result<Cell, MoveError> {
        self.cells.get(index).copied().ok_or(MoveError::OutOfRange)
    }

    /// All 9 cells in row-major order.
    pub fn cells(&self) -> &[Cell; NUM_CELLS] {
        &self.cells
    }

    /// New snapshot equal to `self` except `index` holds `mark`.
    /// Rejects out-of-range indices and occupied cells without side effects.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Result<Board, MoveError> {
        if index >= NUM_CELLS {
            return Err(MoveError::OutOfRange);
        }
        if self.cells[index].is_some() {
            return Err(MoveError::CellOccupied);
        }
        let mut next = *self;
        next.cells[index] = Some(mark);
        Ok(next)
    }

    /// Winner of this snapshot, if any line is complete.
    ///
    /// Scans the fixed winning lines in order and returns the mark of the
    /// first triple whose three cells hold the same non-empty mark. Returns
    /// `None` otherwise, whether or not the board is full.
    pub fn winner(&self) -> Option<Mark> {
        for [a, b, c] in WINNING_LINES {
            if let Some(mark) = self.cells[a] {
                if self.cells[b] == Some(mark) && self.cells[c] == Some(mark) {
                    return Some(mark);
                }
            }
        }
        None
    }

    /// Returns `true` when every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let glyph = match self.cells[row * BOARD_SIZE + col] {
                    Some(Mark::X) => 'X',
                    Some(Mark::O) => 'O',
                    None => '.',
                };
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
