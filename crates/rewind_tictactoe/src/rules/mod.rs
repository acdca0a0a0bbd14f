//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. Nothing here knows about
//! history or turns; the outcome of a position depends on its squares alone.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, Line, check_winner, winning_line};

use crate::Board;
use crate::outcome::Outcome;
use tracing::{instrument, trace};

/// Evaluates a board snapshot.
///
/// The first completed line in [`LINES`] order wins; otherwise a full board
/// is a draw and anything else is still in progress.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    let outcome = match winning_line(board) {
        Some((player, line)) => Outcome::Win { player, line },
        None if is_full(board) => Outcome::Draw,
        None => Outcome::InProgress,
    };
    trace!(?outcome, "Evaluated board");
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Square};

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        use Player::{O, X};
        let board = Board::from_squares(
            [X, O, X, O, X, X, O, X, O].map(Square::Occupied),
        );
        assert_eq!(evaluate(&board), Outcome::Draw);
    }

    #[test]
    fn test_not_draw_if_winner_on_full_board() {
        use Player::{O, X};
        // X X X / O O X / X O O
        let board = Board::from_squares(
            [X, X, X, O, O, X, X, O, O].map(Square::Occupied),
        );
        assert_eq!(
            evaluate(&board),
            Outcome::Win {
                player: X,
                line: LINES[0],
            }
        );
    }

    #[test]
    fn test_evaluate_does_not_mutate() {
        let board = Board::new().with_mark(Position::Center, Player::X);
        let copy = board;
        let _ = evaluate(&board);
        assert_eq!(board, copy);
    }
}
