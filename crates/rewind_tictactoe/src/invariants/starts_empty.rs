//! Start invariant: the timeline opens with the empty board.

use super::Invariant;
use crate::{Board, GameHistory};

/// Invariant: snapshot 0 is the empty board.
pub struct StartsEmptyInvariant;

impl Invariant<GameHistory> for StartsEmptyInvariant {
    fn holds(game: &GameHistory) -> bool {
        game.snapshots.first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}
