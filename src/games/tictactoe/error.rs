/// Errors raised by board operations
use thiserror::Error;

/// Rejected board access.
///
/// `OutOfRange` can only come from a caller bug since the board is fixed at
/// nine cells. `CellOccupied` is the normal outcome of clicking a cell that
/// already holds a symbol and is recovered by ignoring the attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("cell index {0} is outside the board (0-8)")]
    OutOfRange(usize),
    #[error("cell {0} is already occupied")]
    CellOccupied(usize),
}

/// Failure to read a board from its text layout
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBoardError {
    #[error("expected 9 cells, found {0}")]
    WrongLength(usize),
    #[error("unexpected character '{0}' in board layout")]
    UnknownSymbol(char),
}
