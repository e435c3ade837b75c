//! Command-line interface for retrace.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Retrace - tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "retrace")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Path to a TOML config file (defaults to ./retrace.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// List moves newest first
        #[arg(long)]
        descending: bool,
    },

    /// Replay a sequence of moves and print the resulting position
    Replay {
        /// Board indices 0-8, row-major; illegal moves are ignored
        #[arg(value_parser = clap::value_parser!(u8).range(0..=8))]
        moves: Vec<u8>,

        /// Jump to this history step after replaying
        #[arg(short, long)]
        jump: Option<usize>,

        /// List moves newest first
        #[arg(long)]
        descending: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// How `replay` prints its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Board, status and move list as plain text
    #[default]
    Text,
    /// The full view as JSON
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_replay() {
        let cli = Cli::try_parse_from(["retrace", "replay", "0", "4", "8", "--jump", "1"])
            .expect("valid args");
        match cli.command {
            Command::Replay {
                moves,
                jump,
                descending,
                format,
            } => {
                assert_eq!(moves, vec![0, 4, 8]);
                assert_eq!(jump, Some(1));
                assert!(!descending);
                assert_eq!(format, OutputFormat::Text);
            }
            Command::Play { .. } => panic!("expected replay"),
        }
    }

    #[test]
    fn test_replay_rejects_out_of_range_index() {
        assert!(Cli::try_parse_from(["retrace", "replay", "9"]).is_err());
    }

    #[test]
    fn test_parse_play() {
        let cli = Cli::try_parse_from(["retrace", "play", "--descending"]).expect("valid args");
        assert!(matches!(
            cli.command,
            Command::Play {
                config: None,
                descending: true
            }
        ));
    }
}
