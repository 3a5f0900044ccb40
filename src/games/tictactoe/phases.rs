//! Game status and final outcome.

use super::Mark;
use serde::{Deserialize, Serialize};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Mark),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// The final outcome, or `None` while the game is in progress.
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(mark) => Some(Outcome::Winner(mark)),
            GameStatus::Draw => Some(Outcome::Draw),
        }
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A mark completed a line of three.
    Winner(Mark),
    /// Board filled with no line of three.
    Draw,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(mark) => write!(f, "Game over! Winner: {}", mark),
            Outcome::Draw => write!(f, "Game over! It's a draw!"),
        }
    }
}
