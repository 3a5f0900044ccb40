//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_minimax::{Mark, SearchMode};

/// Strictly Minimax - tic-tac-toe against an exhaustive search
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Play tic-tac-toe against a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play one game at the console
    Play {
        /// Search mode used by the computer
        #[arg(short, long, value_enum)]
        mode: Option<SearchMode>,

        /// Let the computer make the first move
        #[arg(long)]
        computer_first: bool,

        /// Path to a TOML game config
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Compare both search modes on a position
    Analyze {
        /// Board in compact notation, e.g. "XX./O../O.." (X computer, O human)
        #[arg(short, long, default_value = ".../.../...")]
        board: String,

        /// Side to move
        #[arg(short, long, value_enum, default_value = "computer")]
        to_move: Mark,

        /// Print the reports as JSON
        #[arg(long)]
        json: bool,
    },
}
