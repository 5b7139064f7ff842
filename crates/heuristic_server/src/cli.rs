//! Command-line interface for heuristic_server.

use clap::{Parser, Subcommand};

/// Heuristic tic-tac-toe - play against a fixed-strategy machine
#[derive(Parser, Debug)]
#[command(name = "heuristic_server")]
#[command(about = "Stateless tic-tac-toe against a heuristic machine player", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the game page over HTTP
    Serve {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Host to bind to (overrides the config file)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides the config file)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Evaluate one submission and print the resulting turn as JSON
    Turn {
        /// Submitted board as JSON, e.g. '{"0": {"0": 1}, "1": {"1": -1}}'.
        /// Omit for a fresh game.
        #[arg(long)]
        board: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::parse_from(["heuristic_server", "serve", "--port", "8080"]);
        match cli.command {
            Command::Serve { config, host, port } => {
                assert!(config.is_none());
                assert!(host.is_none());
                assert_eq!(port, Some(8080));
            }
            Command::Turn { .. } => panic!("expected serve"),
        }
    }

    #[test]
    fn test_parse_turn() {
        let cli = Cli::parse_from(["heuristic_server", "turn", "--board", "{}"]);
        assert!(matches!(cli.command, Command::Turn { board: Some(b) } if b == "{}"));
    }
}
