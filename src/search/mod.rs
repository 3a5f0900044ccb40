//! Exhaustive game-tree search for the computer's move.
//!
//! Contains:
//! - `SearchMode`: plain minimax or alpha-beta pruning
//! - `SearchStats`: node counters for comparing the two modes
//! - `Searcher`: the shared recursive tree walk and root move selection

mod minimax;
mod mode;
mod stats;

pub use minimax::{INF, SearchResult, Searcher};
pub use mode::SearchMode;
pub use stats::SearchStats;

use crate::games::tictactoe::{Board, Move};

/// Picks the computer's move on `board` with a fresh searcher.
///
/// Returns `None` when the board has no empty cells.
pub fn computer_move(board: &mut Board, mode: SearchMode) -> Option<Move> {
    Searcher::new(mode).best_move(board)
}
