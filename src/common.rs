//! Common types for tic-tac-toe: marks, cells, move errors and game status.

/// One of the two player marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The mark that moves after this one.
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl core::fmt::Display for Mark {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// A single grid cell; `None` is an empty cell.
pub type Cell = Option<Mark>;

/// Errors returned by board and game operations. Every error leaves the
/// state untouched; a rejected move is a no-op, not a failure mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Cell or history index is out of range.
    OutOfRange,
    /// Target cell already holds a mark.
    CellOccupied,
    /// The current board has a winner; no further moves are accepted.
    GameOver,
}

impl core::fmt::Display for MoveError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MoveError::OutOfRange => write!(f, "Index is out of range"),
            MoveError::CellOccupied => write!(f, "Cell is already occupied"),
            MoveError::GameOver => write!(f, "Game is already won"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MoveError {}

/// Current status of a game, derived from the displayed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// No winning line on the current board; includes the full-board draw.
    InProgress,
    /// The carried mark owns a complete winning line.
    Won(Mark),
}
