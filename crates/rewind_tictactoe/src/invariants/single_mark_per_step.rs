//! Step invariant: every snapshot adds exactly one mark, X and O alternating.

use super::Invariant;
use crate::{Board, GameHistory, Player, Position, Square};

/// Invariant: `snapshots[k + 1]` equals `snapshots[k]` plus one mark.
///
/// The mark belongs to X when `k` is even and to O when `k` is odd, and
/// no existing mark ever changes.
pub struct SingleMarkPerStepInvariant;

fn is_single_mark(before: &Board, after: &Board, player: Player) -> bool {
    let mut added = 0;
    for pos in Position::ALL {
        match (before.get(pos), after.get(pos)) {
            (b, a) if b == a => {}
            (Square::Empty, Square::Occupied(p)) if p == player => added += 1,
            _ => return false,
        }
    }
    added == 1
}

impl Invariant<GameHistory> for SingleMarkPerStepInvariant {
    fn holds(game: &GameHistory) -> bool {
        game.snapshots
            .windows(2)
            .enumerate()
            .all(|(k, pair)| is_single_mark(&pair[0], &pair[1], Player::for_step(k)))
    }

    fn description() -> &'static str {
        "Each step adds exactly one mark, alternating X then O"
    }
}
