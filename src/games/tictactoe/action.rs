//! Errors raised when a move cannot be placed on the board.

use super::Move;

/// Error that can occur when applying a move.
///
/// Either variant reaching the driver after enumeration through
/// `Board::empty_cells` is a programming error, not a recoverable condition.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The target cell is already occupied.
    #[display("Invalid move: cell {} is already occupied", _0)]
    InvalidMove(Move),

    /// The coordinate lies outside the 3x3 grid.
    #[display("Invalid move: {} is off the board", _0)]
    OutOfBounds(Move),
}

impl std::error::Error for MoveError {}
