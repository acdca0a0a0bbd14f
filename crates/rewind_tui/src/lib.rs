//! Terminal front end for rewind tic-tac-toe.
//!
//! - **play**: interactive board and move list (crossterm + ratatui)
//! - **replay**: headless text or JSON rendering of a move sequence

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod play;
pub mod replay;
pub mod ui;

use anyhow::Result;
use cli::{Cli, Command};
use config::TuiConfig;
use tracing::debug;

/// Runs the command selected on the command line.
pub fn run(cli: Cli) -> Result<()> {
    let config = TuiConfig::load(&cli.config)?.with_overrides(cli.highlight, cli.log_file);

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            logging::init_file(&config)?;
            debug!(?config, "Configuration resolved");
            play::run(&config)
        }
        Command::Replay { moves, jump, json } => {
            logging::init_stderr(&config);
            debug!(?config, "Configuration resolved");
            let out = replay::render(
                &moves,
                jump,
                json,
                *config.highlight(),
                *config.show_move_details(),
            )?;
            print!("{}", out);
            Ok(())
        }
    }
}
