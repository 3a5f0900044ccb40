//! Tic-tac-toe board model and rules.

mod action;
mod phases;
pub mod rules;
mod types;

pub use action::MoveError;
pub use phases::{GameStatus, Outcome};
pub use types::{BOARD_SIZE, Board, BoardParseError, Cell, Mark, Move};
