//! Player trait and implementations.

mod computer;
mod human;
mod input;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;
pub use input::{InputError, parse_move};

use crate::games::tictactoe::{Board, Move};
use anyhow::Result;

/// Trait for players that can make moves.
pub trait Player {
    /// Chooses the next move on `board`.
    ///
    /// The board is lent for the duration of the call; implementations may
    /// mutate it while deciding but must hand it back unchanged.
    fn choose_move(&mut self, board: &mut Board) -> Result<Move>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
