//! Command-line interface for rewind.

use clap::{Parser, Subcommand};
use rewind_tictactoe::HighlightMode;
use std::path::PathBuf;

/// Rewind - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with a rewindable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it does not exist)
    #[arg(long, default_value = "rewind.toml")]
    pub config: PathBuf,

    /// Highlight mode: winning-line or last-move
    #[arg(long)]
    pub highlight: Option<HighlightMode>,

    /// Log file for the terminal UI
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to play)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal
    Play,

    /// Apply cell clicks without a terminal UI and print the result
    Replay {
        /// Comma-separated cell indices (0-8), X first
        #[arg(long, value_delimiter = ',')]
        moves: Vec<usize>,

        /// Step to jump to after the moves are applied
        #[arg(long)]
        jump: Option<usize>,

        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },
}
