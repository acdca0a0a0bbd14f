//! Kani proof harnesses for the evaluator and the transitions.
//!
//! Run with `cargo kani -p rewind_tictactoe`.

use super::{HistoryInvariants, InvariantSet};
use crate::{Board, GameHistory, Outcome, Square, evaluate};

/// A winning line is always three squares held by the winner.
#[kani::proof]
fn verify_win_line_is_held_by_winner() {
    let board: Board = kani::any();

    if let Outcome::Win { player, line } = evaluate(&board) {
        for pos in line.positions() {
            assert!(board.get(pos) == Square::Occupied(player));
        }
    }
}

/// A draw is only reported on a full board.
#[kani::proof]
fn verify_draw_requires_full_board() {
    let board: Board = kani::any();

    if evaluate(&board) == Outcome::Draw {
        assert!(board.occupied_count() == 9);
    }
}

/// Any two accepted moves keep every invariant.
#[kani::proof]
#[kani::unwind(10)]
fn verify_moves_preserve_invariants() {
    let first: usize = kani::any();
    let second: usize = kani::any();
    kani::assume(first < 9 && second < 9);

    let game = GameHistory::new();
    if let Ok(game) = game.apply_move(first)
        && let Ok(game) = game.apply_move(second)
    {
        assert!(HistoryInvariants::check_all(&game).is_ok());
        assert!(game.len() == 3);
    }
}
