//! Side-by-side comparison of the search modes on one position.

use crate::games::tictactoe::rules::Score;
use crate::games::tictactoe::{Board, Mark, Move};
use crate::search::{SearchMode, SearchResult, SearchStats, Searcher};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::IntoEnumIterator;
use tracing::instrument;

/// Root search outcome for one mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeReport {
    /// The mode searched with.
    pub mode: SearchMode,
    /// Side to move.
    pub to_move: Mark,
    /// Best move, `None` on a full board.
    pub best_move: Option<Move>,
    /// Value after the best move.
    pub score: Score,
    /// Every root move with its value.
    pub move_scores: Vec<(Move, Score)>,
    /// Node counters.
    pub stats: SearchStats,
}

impl ModeReport {
    fn from_result(mode: SearchMode, result: SearchResult) -> Self {
        Self {
            mode,
            to_move: result.mark,
            best_move: result.best_move,
            score: result.score,
            move_scores: result.move_scores,
            stats: result.stats,
        }
    }
}

impl fmt::Display for ModeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}] {} to move", self.mode, self.to_move)?;
        match self.best_move {
            Some(mv) => writeln!(
                f,
                "  best move: {} (cell {}), value {:+}",
                mv,
                mv.cell_number(),
                self.score
            )?,
            None => writeln!(f, "  no legal move, value {:+}", self.score)?,
        }
        for (mv, value) in &self.move_scores {
            writeln!(f, "  cell {}: {:+}", mv.cell_number(), value)?;
        }
        writeln!(f, "  {}", self.stats)
    }
}

/// Runs a root search for `to_move` in every mode.
///
/// The board is restored after each search.
#[instrument(skip(board))]
pub fn compare_modes(board: &mut Board, to_move: Mark) -> Vec<ModeReport> {
    SearchMode::iter()
        .map(|mode| {
            let result = Searcher::new(mode).search_root(board, to_move);
            ModeReport::from_result(mode, result)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modes_agree_on_move_and_value() {
        let mut board: Board = "O../.X./...".parse().unwrap();
        let reports = compare_modes(&mut board, Mark::Human);
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].mode, SearchMode::Minimax);
        assert_eq!(reports[1].mode, SearchMode::AlphaBeta);
        assert_eq!(reports[0].best_move, reports[1].best_move);
        assert_eq!(reports[0].move_scores, reports[1].move_scores);
        assert!(reports[1].stats.nodes <= reports[0].stats.nodes);
        assert_eq!(board, "O../.X./...".parse::<Board>().unwrap());
    }

    #[test]
    fn test_report_lists_cells() {
        let mut board: Board = "XX./OO./...".parse().unwrap();
        let reports = compare_modes(&mut board, Mark::Computer);
        let text = reports[1].to_string();
        assert!(text.contains("best move: (0, 2) (cell 3), value +1"));
        assert!(text.contains("cell 9:"));
    }
}
