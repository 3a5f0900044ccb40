//! Strictly Minimax library - tic-tac-toe against an exhaustive search
//!
//! The computer chooses its moves by walking the complete game tree, either
//! with plain minimax or with alpha-beta pruning. Both modes return the same
//! values; pruning only skips branches that cannot change the result.
//!
//! # Architecture
//!
//! - **Board model**: 3x3 grid of cells, moves, marks
//! - **Rules**: win detection, terminal test, scoring
//! - **Search**: the shared minimax / alpha-beta tree walk
//! - **Players / Orchestrator**: the console game loop
//! - **Analysis**: side-by-side comparison of the two search modes
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Board, Mark, Move, SearchMode, computer_move};
//!
//! let mut board = Board::new();
//! board.apply(Move::new(1, 1), Mark::Human).unwrap();
//!
//! let reply = computer_move(&mut board, SearchMode::AlphaBeta);
//! assert_eq!(reply, Some(Move::new(0, 0)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod analysis;
mod config;
mod games;
mod orchestrator;
mod players;
mod search;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    BOARD_SIZE, Board, BoardParseError, Cell, GameStatus, Mark, Move, MoveError, Outcome,
};

// Crate-level exports - Rules
pub use games::tictactoe::rules;
pub use games::tictactoe::rules::{Score, is_terminal, score, status, winner};

// Crate-level exports - Search
pub use search::{INF, SearchMode, SearchResult, SearchStats, Searcher, computer_move};

// Crate-level exports - Players and game loop
pub use orchestrator::Orchestrator;
pub use players::{ComputerPlayer, HumanPlayer, InputError, Player, parse_move};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Analysis
pub use analysis::{ModeReport, compare_modes};
