//! Alternating-turn invariant: the two marks are placed in turn.

use super::super::{Board, Mark};

/// True if neither mark has been placed more than once ahead of the other.
pub fn marks_alternate(board: &Board) -> bool {
    board
        .cell_count(Mark::Computer)
        .abs_diff(board.cell_count(Mark::Human))
        <= 1
}

/// The mark to play next on `board` when `first` opened the game.
///
/// Returns `None` when the counts could not arise from alternating play
/// started by `first`.
pub fn side_to_move(board: &Board, first: Mark) -> Option<Mark> {
    let opened = board.cell_count(first);
    let replied = board.cell_count(first.opponent());
    match opened.checked_sub(replied) {
        Some(0) => Some(first),
        Some(1) => Some(first.opponent()),
        _ => None,
    }
}
