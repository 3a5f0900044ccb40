//! Terminal-state evaluation: is the game over, and what is it worth.

use super::super::{Board, GameStatus, Mark};
use super::win::winner;

/// Game-theoretic value of a position from the computer's point of view.
pub type Score = i32;

/// The computer holds a line of three.
pub const COMPUTER_WIN: Score = 1;
/// No winner.
pub const DRAW: Score = 0;
/// The human holds a line of three.
pub const HUMAN_WIN: Score = -1;

/// True if a line of three exists or no empty cells remain.
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || board.is_full()
}

/// Scores a board: `+1` computer win, `-1` human win, `0` otherwise.
///
/// All wins score the same regardless of how many plies it took to reach them.
pub fn score(board: &Board) -> Score {
    match winner(board) {
        Some(Mark::Computer) => COMPUTER_WIN,
        Some(Mark::Human) => HUMAN_WIN,
        None => DRAW,
    }
}

/// Current status of the game on `board`.
pub fn status(board: &Board) -> GameStatus {
    match winner(board) {
        Some(mark) => GameStatus::Won(mark),
        None if board.is_full() => GameStatus::Draw,
        None => GameStatus::InProgress,
    }
}
