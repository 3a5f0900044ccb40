//! Strictly Minimax - console tic-tac-toe against a minimax opponent.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use strictly_minimax::{
    Board, ComputerPlayer, GameConfig, HumanPlayer, Mark, Orchestrator, SearchMode,
    compare_modes,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    match cli.command.unwrap_or(Command::Play {
        mode: None,
        computer_first: false,
        config: None,
    }) {
        Command::Play {
            mode,
            computer_first,
            config,
        } => run_game(mode, computer_first, config),
        Command::Analyze {
            board,
            to_move,
            json,
        } => run_analysis(&board, to_move, json),
    }
}

/// Sends logs to stderr, or to a file so the console board stays clean.
fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::sync::Arc::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
    }
    Ok(())
}

/// Play one console game
#[instrument]
fn run_game(
    mode: Option<SearchMode>,
    computer_first: bool,
    config: Option<PathBuf>,
) -> Result<()> {
    let config = match config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    }
    .with_search_mode(mode)
    .with_first_player(computer_first.then_some(Mark::Computer));

    info!(?config, "Starting console game");

    let human = HumanPlayer::new("Human", io::stdin().lock(), io::stdout());
    let computer = ComputerPlayer::new("Computer", Mark::Computer, *config.search_mode());

    let mut game = Orchestrator::new(
        Box::new(human),
        Box::new(computer),
        *config.first_player(),
        io::stdout(),
    );
    game.run()?;
    Ok(())
}

/// Compare both search modes on one position
#[instrument]
fn run_analysis(notation: &str, to_move: Mark, json: bool) -> Result<()> {
    let mut board: Board = notation
        .parse()
        .with_context(|| format!("Invalid board {notation:?}"))?;

    let reports = compare_modes(&mut board, to_move);

    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &reports)?;
        writeln!(out)?;
    } else {
        write!(out, "{board}")?;
        for report in &reports {
            write!(out, "{report}")?;
        }
    }
    Ok(())
}
