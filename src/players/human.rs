//! Human player reading cell numbers from a line-oriented console.

use super::{Player, parse_move};
use crate::games::tictactoe::{Board, Move};
use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Human player prompting on `output` and reading from `input`.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    fn prompt(&mut self) -> Result<Option<String>> {
        write!(self.output, "Enter a move (1-9): ")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read move")?;
        Ok((read > 0).then_some(line))
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    #[instrument(skip_all, fields(player = %self.name))]
    fn choose_move(&mut self, board: &mut Board) -> Result<Move> {
        // Retry until the input names an empty cell.
        loop {
            let Some(line) = self.prompt()? else {
                bail!("Input closed before {} chose a move", self.name);
            };

            match parse_move(&line, board) {
                Ok(mv) => {
                    debug!(%mv, "Human chose move");
                    return Ok(mv);
                }
                Err(e) => {
                    debug!(error = %e, "Rejected input");
                    writeln!(self.output, "{e}")?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
