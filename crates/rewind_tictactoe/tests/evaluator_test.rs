//! Tests for board evaluation.

use rewind_tictactoe::{Board, LINES, Outcome, Player, Position, Square, evaluate};

fn fill(line: [usize; 3], player: Player) -> Board {
    line.iter()
        .fold(Board::new(), |board, &i| board.with_mark(Position::ALL[i], player))
}

#[test]
fn test_line_order_is_fixed() {
    let indices: Vec<[usize; 3]> = LINES.iter().map(|line| line.indices()).collect();
    assert_eq!(
        indices,
        [
            [0, 1, 2],
            [3, 4, 5],
            [6, 7, 8],
            [0, 3, 6],
            [1, 4, 7],
            [2, 5, 8],
            [0, 4, 8],
            [2, 4, 6],
        ]
    );
}

#[test]
fn test_each_line_wins_for_both_players() {
    for line in LINES {
        for player in [Player::X, Player::O] {
            let board = fill(line.indices(), player);
            assert_eq!(evaluate(&board), Outcome::Win { player, line });
        }
    }
}

#[test]
fn test_line_wins_with_other_marks_around() {
    // O holds the middle column; X marks are scattered elsewhere.
    let board = fill([1, 4, 7], Player::O)
        .with_mark(Position::TopLeft, Player::X)
        .with_mark(Position::BottomRight, Player::X);
    assert_eq!(
        evaluate(&board),
        Outcome::Win {
            player: Player::O,
            line: LINES[4],
        }
    );
}

#[test]
fn test_first_line_in_order_wins() {
    // Bottom row and both diagonals through the right corner share cells.
    let board = [6, 7, 8, 4, 0, 2]
        .iter()
        .fold(Board::new(), |b, &i| b.with_mark(Position::ALL[i], Player::X));
    assert_eq!(evaluate(&board).line(), Some(LINES[2]));
}

#[test]
fn test_empty_board_in_progress() {
    let outcome = evaluate(&Board::new());
    assert_eq!(outcome, Outcome::InProgress);
    assert!(!outcome.is_terminal());
    assert_eq!(outcome.winner(), None);
}

#[test]
fn test_full_board_without_line_is_draw() {
    use Player::{O, X};
    // O X O / O X X / X O X
    let board = Board::from_squares([O, X, O, O, X, X, X, O, X].map(Square::Occupied));
    let outcome = evaluate(&board);
    assert_eq!(outcome, Outcome::Draw);
    assert!(outcome.is_terminal());
}

#[test]
fn test_partial_board_without_line_in_progress() {
    let board = Board::new()
        .with_mark(Position::Center, Player::X)
        .with_mark(Position::TopLeft, Player::O);
    assert_eq!(evaluate(&board), Outcome::InProgress);
}
