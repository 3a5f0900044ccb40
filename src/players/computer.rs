//! Computer player backed by the game-tree searcher.

use super::Player;
use crate::games::tictactoe::{Board, Mark, Move};
use crate::search::{SearchMode, Searcher};
use anyhow::{Result, anyhow};
use tracing::{debug, instrument};

/// Plays `mark` by exhaustive search.
pub struct ComputerPlayer {
    name: String,
    mark: Mark,
    searcher: Searcher,
}

impl ComputerPlayer {
    /// Creates a computer player for `mark`.
    pub fn new(name: impl Into<String>, mark: Mark, mode: SearchMode) -> Self {
        Self {
            name: name.into(),
            mark,
            searcher: Searcher::new(mode),
        }
    }
}

impl Player for ComputerPlayer {
    #[instrument(skip_all, fields(player = %self.name, mode = %self.searcher.mode()))]
    fn choose_move(&mut self, board: &mut Board) -> Result<Move> {
        let mv = self
            .searcher
            .best_move_for(board, self.mark)
            .ok_or_else(|| anyhow!("{} has no legal move", self.name))?;
        debug!(%mv, stats = %self.searcher.stats(), "Computer chose move");
        Ok(mv)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
