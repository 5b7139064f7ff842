//! Heuristic tic-tac-toe - unified CLI
//!
//! Serves the game page, or evaluates a single submission from the
//! command line.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use heuristic_server::{ServerConfig, serve};
use heuristic_tictactoe::{RawBoard, Submission, evaluate};
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Serve { config, host, port } => run_server(config, host, port).await,
        Command::Turn { board } => run_turn(board),
    }
}

/// Run the HTTP game server
#[instrument]
async fn run_server(
    config: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    let mut config = match config {
        Some(path) => ServerConfig::from_file(path)?,
        None => ServerConfig::default(),
    };
    if let Some(host) = host {
        config = config.with_host(host);
    }
    if let Some(port) = port {
        config = config.with_port(port);
    }

    info!(host = %config.host(), port = config.port(), "Starting heuristic tic-tac-toe server");
    serve(config).await?;
    Ok(())
}

/// Evaluate a single submission and print it
#[instrument]
fn run_turn(board: Option<String>) -> Result<()> {
    let submission = match board {
        Some(json) => {
            let raw: RawBoard =
                serde_json::from_str(&json).context("Board must be a JSON row -> col -> value map")?;
            Submission::from_board(raw)
        }
        None => Submission::fresh(),
    };

    let turn = evaluate(&submission);
    println!("{}", serde_json::to_string_pretty(&turn)?);
    Ok(())
}
