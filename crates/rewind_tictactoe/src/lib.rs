//! Tic-tac-toe with a rewindable move history.
//!
//! Two pieces carry all the logic:
//!
//! - [`evaluate`] decides whether a board is won, drawn or still in play.
//! - [`GameHistory`] records every board of the game and lets the player
//!   jump back to any of them and play on from there.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameHistory, HighlightMode, Player};
//!
//! let game = GameHistory::new().apply_move(4)?.apply_move(0)?;
//! assert_eq!(game.next_player(), Player::X);
//!
//! let rewound = game.jump_to(1)?;
//! assert_eq!(rewound.view(HighlightMode::default()).status_text, "Next player: O");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod history;
pub mod invariants;
#[cfg(kani)]
mod kani_support;
mod outcome;
mod position;
pub mod rules;
mod types;
mod view;

pub use action::{JumpError, Move, MoveError};
pub use history::GameHistory;
pub use invariants::{HistoryInvariants, Invariant, InvariantSet, InvariantViolation};
pub use outcome::Outcome;
pub use position::Position;
pub use rules::{LINES, Line, evaluate};
pub use types::{Board, Player, Square};
pub use view::{GameView, Highlight, HighlightMode, HistoryEntry, Status};
