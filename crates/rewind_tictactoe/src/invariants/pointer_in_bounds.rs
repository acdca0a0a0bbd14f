//! Pointer invariant: the displayed step is a recorded step.

use super::Invariant;
use crate::GameHistory;

/// Invariant: the timeline is non-empty and `step < len`.
pub struct PointerInBoundsInvariant;

impl Invariant<GameHistory> for PointerInBoundsInvariant {
    fn holds(game: &GameHistory) -> bool {
        game.step < game.snapshots.len()
    }

    fn description() -> &'static str {
        "Current step points at a recorded snapshot"
    }
}
