//! Minimax search with optional alpha-beta pruning.
//!
//! Both modes walk the same tree in the same order: every empty cell in
//! row-major order, placing the mark of the side to move, recursing with the
//! other side, and restoring the cell before looking at the next sibling. The
//! walk stops only at terminal positions; there is no depth cutoff.
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Board, Move, SearchMode, Searcher};
//!
//! let mut board: Board = "XX./OO./...".parse().unwrap();
//! let mut searcher = Searcher::new(SearchMode::AlphaBeta);
//!
//! assert_eq!(searcher.best_move(&mut board), Some(Move::new(0, 2)));
//! ```

use super::{SearchMode, SearchStats};
use crate::games::tictactoe::rules::{Score, is_terminal, score};
use crate::games::tictactoe::{Board, Mark, Move};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Bound outside every reachable score, used for the initial window.
pub const INF: Score = 2;

/// Result of a root search for one side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The side the search chose a move for.
    pub mark: Mark,
    /// Best move found, `None` on a full board.
    pub best_move: Option<Move>,
    /// Value of the position after the best move (or of the board itself
    /// when no move exists).
    pub score: Score,
    /// Every legal root move with its full-window value, row-major.
    pub move_scores: Vec<(Move, Score)>,
    /// Counters for this search.
    pub stats: SearchStats,
}

/// Game-tree searcher.
///
/// The searcher borrows the board mutably for the duration of one call and
/// hands it back unchanged.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    mode: SearchMode,
    stats: SearchStats,
}

impl Searcher {
    /// Creates a searcher in the given mode.
    pub fn new(mode: SearchMode) -> Self {
        Self {
            mode,
            stats: SearchStats::default(),
        }
    }

    /// The mode this searcher runs in.
    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Counters accumulated since the last reset.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Clears the counters.
    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    /// Picks the computer's move. `None` when no empty cell remains.
    pub fn best_move(&mut self, board: &mut Board) -> Option<Move> {
        self.best_move_for(board, Mark::Computer)
    }

    /// Picks the best move for `mark`: highest value for the computer,
    /// lowest for the human. Ties go to the first move in row-major order.
    pub fn best_move_for(&mut self, board: &mut Board, mark: Mark) -> Option<Move> {
        self.search_root(board, mark).best_move
    }

    /// Scores every legal move for `mark` and selects the best one.
    #[instrument(skip(self, board), fields(mode = %self.mode))]
    pub fn search_root(&mut self, board: &mut Board, mark: Mark) -> SearchResult {
        self.reset_stats();

        let move_scores = self.score_moves(board, mark);

        let mut best: Option<(Move, Score)> = None;
        for &(mv, value) in &move_scores {
            let improves = match best {
                None => true,
                Some((_, best_value)) if mark.is_maximizing() => value > best_value,
                Some((_, best_value)) => value < best_value,
            };
            if improves {
                best = Some((mv, value));
            }
        }

        let (best_move, value) = match best {
            Some((mv, value)) => (Some(mv), value),
            None => (None, score(board)),
        };

        debug!(
            ?mark,
            ?best_move,
            score = value,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            "Root search complete"
        );

        SearchResult {
            mark,
            best_move,
            score: value,
            move_scores,
            stats: self.stats,
        }
    }

    /// Values every legal move for `mark`, row-major, each with a full window.
    pub fn score_moves(&mut self, board: &mut Board, mark: Mark) -> Vec<(Move, Score)> {
        let reply_maximizing = mark.opponent().is_maximizing();
        board
            .empty_cells()
            .into_iter()
            .map(|mv| {
                board.place(mv, mark);
                let value = self.walk(board, reply_maximizing, -INF, INF, 1);
                board.undo(mv);
                (mv, value)
            })
            .collect()
    }

    /// Game-theoretic value of `board` with `to_move` to play.
    pub fn evaluate(&mut self, board: &mut Board, to_move: Mark) -> Score {
        self.search(board, to_move.is_maximizing(), -INF, INF)
    }

    /// Value of `board` within the `[alpha, beta]` window.
    ///
    /// With a full window (`-INF`, `INF`) the result is exact in both modes.
    pub fn search(
        &mut self,
        board: &mut Board,
        maximizing: bool,
        alpha: Score,
        beta: Score,
    ) -> Score {
        self.walk(board, maximizing, alpha, beta, 0)
    }

    fn walk(
        &mut self,
        board: &mut Board,
        maximizing: bool,
        mut alpha: Score,
        mut beta: Score,
        depth: u8,
    ) -> Score {
        self.stats.nodes += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        if is_terminal(board) {
            self.stats.leaves += 1;
            return score(board);
        }

        let mark = Mark::to_move(maximizing);
        let mut best = if maximizing { -INF } else { INF };

        for mv in board.empty_cells() {
            board.place(mv, mark);
            let value = self.walk(board, !maximizing, alpha, beta, depth + 1);
            // Restore before any cutoff so the caller gets its board back.
            board.undo(mv);

            if maximizing {
                best = best.max(value);
                alpha = alpha.max(value);
            } else {
                best = best.min(value);
                beta = beta.min(value);
            }

            if self.mode.prunes() && alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::rules::{COMPUTER_WIN, DRAW, HUMAN_WIN};

    fn board(notation: &str) -> Board {
        notation.parse().unwrap()
    }

    #[test]
    fn test_terminal_board_scores_immediately() {
        let mut b = board("XXX/OO./...");
        let mut searcher = Searcher::new(SearchMode::Minimax);
        assert_eq!(searcher.evaluate(&mut b, Mark::Human), COMPUTER_WIN);
        assert_eq!(searcher.stats().nodes, 1);
        assert_eq!(searcher.stats().leaves, 1);
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let mut b = Board::new();
        let mut searcher = Searcher::new(SearchMode::AlphaBeta);
        assert_eq!(searcher.evaluate(&mut b, Mark::Computer), DRAW);
        assert_eq!(searcher.evaluate(&mut b, Mark::Human), DRAW);
        assert_eq!(b, Board::new());
    }

    #[test]
    fn test_full_tree_counts() {
        let mut b = Board::new();
        let mut searcher = Searcher::new(SearchMode::Minimax);
        let result = searcher.search_root(&mut b, Mark::Computer);
        // Every node of the tic-tac-toe game tree below the empty board.
        assert_eq!(result.stats.nodes, 549_945);
        assert_eq!(result.stats.leaves, 255_168);
        assert_eq!(result.stats.cutoffs, 0);
        assert_eq!(result.stats.max_depth, 9);
    }

    #[test]
    fn test_pruning_visits_fewer_nodes() {
        let mut b = Board::new();
        let full = Searcher::new(SearchMode::Minimax).search_root(&mut b, Mark::Computer);
        let pruned = Searcher::new(SearchMode::AlphaBeta).search_root(&mut b, Mark::Computer);
        assert_eq!(full.move_scores, pruned.move_scores);
        assert_eq!(full.best_move, pruned.best_move);
        assert!(pruned.stats.nodes < full.stats.nodes);
        assert!(pruned.stats.cutoffs > 0);
    }

    #[test]
    fn test_empty_board_ties_to_first_cell() {
        // Every opening is a draw under perfect play, so the strict
        // comparison keeps the first cell.
        let mut b = Board::new();
        let result = Searcher::new(SearchMode::AlphaBeta).search_root(&mut b, Mark::Computer);
        assert_eq!(result.score, DRAW);
        assert_eq!(result.best_move, Some(Move::new(0, 0)));
        assert!(result.move_scores.iter().all(|&(_, s)| s == DRAW));
    }

    #[test]
    fn test_human_side_minimizes() {
        // O to move wins at (1, 2).
        let mut b = board("XX./OO./X..");
        let mut searcher = Searcher::new(SearchMode::AlphaBeta);
        let result = searcher.search_root(&mut b, Mark::Human);
        assert_eq!(result.best_move, Some(Move::new(1, 2)));
        assert_eq!(result.score, HUMAN_WIN);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut b = board("XOX/XOO/OXX");
        let mut searcher = Searcher::new(SearchMode::AlphaBeta);
        let result = searcher.search_root(&mut b, Mark::Computer);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, DRAW);
        assert!(result.move_scores.is_empty());
    }

    #[test]
    fn test_board_restored_after_cutoffs() {
        let mut b = board("X../.O./...");
        let before = b.clone();
        let mut searcher = Searcher::new(SearchMode::AlphaBeta);
        searcher.search(&mut b, true, -INF, INF);
        assert!(searcher.stats().cutoffs > 0);
        assert_eq!(b, before);
    }
}
