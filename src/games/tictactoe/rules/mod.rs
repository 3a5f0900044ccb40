//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the search and the driver share one definition of
//! "game over".

pub mod alternation;
pub mod terminal;
pub mod win;

pub use alternation::{marks_alternate, side_to_move};
pub use terminal::{COMPUTER_WIN, DRAW, HUMAN_WIN, Score, is_terminal, score, status};
pub use win::winner;
