//! Game orchestration between the human and the computer.

use crate::games::tictactoe::rules::{marks_alternate, side_to_move, status};
use crate::games::tictactoe::{Board, Mark, Outcome};
use crate::players::Player;
use anyhow::{Context, Result, anyhow};
use std::io::Write;
use tracing::{debug, info, instrument};

/// Runs one game, alternating two players and reporting to `output`.
///
/// The orchestrator owns the board. Each player borrows it only while
/// choosing a move.
pub struct Orchestrator<W> {
    board: Board,
    human: Box<dyn Player>,
    computer: Box<dyn Player>,
    first: Mark,
    output: W,
}

impl<W: Write> Orchestrator<W> {
    /// Creates a new orchestrator with an empty board.
    pub fn new(
        human: Box<dyn Player>,
        computer: Box<dyn Player>,
        first: Mark,
        output: W,
    ) -> Self {
        Self {
            board: Board::new(),
            human,
            computer,
            first,
            output,
        }
    }

    /// Starts from `board` instead of an empty one.
    ///
    /// The board must look like a game opened by the configured first
    /// player; `run` rejects it otherwise.
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Runs the game loop until a line of three or a full board.
    ///
    /// # Errors
    ///
    /// Fails if the starting board could not have been reached from the
    /// configured opener, if a player cannot produce a move (e.g. input
    /// closed), if a chosen move targets an occupied cell, or if writing
    /// output fails.
    #[instrument(skip(self), fields(first = %self.first))]
    pub fn run(&mut self) -> Result<Outcome> {
        info!("Starting game");
        writeln!(self.output, "Welcome to Tic Tac Toe!")?;
        write!(self.output, "{}", self.board)?;

        let first = self.first;
        let mut to_move = side_to_move(&self.board, first).ok_or_else(|| {
            anyhow!("Board was not reached by alternating play opened by {first}")
        })?;
        loop {
            if let Some(outcome) = status(&self.board).outcome() {
                info!(?outcome, "Game over");
                writeln!(self.output, "{outcome}")?;
                return Ok(outcome);
            }

            let player = match to_move {
                Mark::Human => &mut self.human,
                Mark::Computer => {
                    writeln!(self.output, "Computer's turn...")?;
                    &mut self.computer
                }
            };

            debug!(player = %player.name(), "Waiting for move");
            let mv = player.choose_move(&mut self.board)?;
            self.board
                .apply(mv, to_move)
                .with_context(|| format!("{} chose an illegal move", player.name()))?;
            info!(%mv, mark = %to_move, "Move made");
            debug_assert!(marks_alternate(&self.board));

            write!(self.output, "{}", self.board)?;
            to_move = to_move.opponent();
        }
    }
}
