//! Retrace - Unified CLI
//!
//! Tic-tac-toe with move history and time travel.

use anyhow::{Context, Result};
use clap::Parser;
use retrace::{AppConfig, Cli, Command, GameView, MoveOrder, OutputFormat};
use std::path::PathBuf;
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, descending } => run_play(config, descending),
        Command::Replay {
            moves,
            jump,
            descending,
            format,
        } => run_replay(moves, jump, descending, format),
    }
}

/// Run the terminal UI
fn run_play(config: Option<PathBuf>, descending: bool) -> Result<()> {
    let mut config = AppConfig::load(config.as_deref()).context("Failed to load config")?;
    if descending {
        config = config.with_move_order(MoveOrder::Descending);
    }
    retrace::run_tui(&config)
}

/// Replay moves and print the result
fn run_replay(
    moves: Vec<u8>,
    jump: Option<usize>,
    descending: bool,
    format: OutputFormat,
) -> Result<()> {
    retrace::init_stderr_logging("warn");
    info!(moves = moves.len(), ?jump, "Replaying moves");

    let order = if descending {
        MoveOrder::Descending
    } else {
        MoveOrder::Ascending
    };
    let timeline = retrace::replay(&moves, jump, order)?;
    let output = retrace::render(&GameView::from_timeline(&timeline), format)?;
    println!("{}", output);
    Ok(())
}
