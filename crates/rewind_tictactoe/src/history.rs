//! Rewindable game history.
//!
//! [`GameHistory`] is the whole game: a timeline of board snapshots and a
//! pointer to the one being displayed. Transitions take `&self` and return
//! a new value, so the previous state is still around when a transition is
//! refused. Everything else (outcome, whose turn, highlight, status) is
//! projected from the snapshot under the pointer.

use super::action::{JumpError, Move, MoveError};
use super::invariants::assert_invariants;
use super::view::{GameView, Highlight, HighlightMode, Status};
use super::{Board, Outcome, Player, Position, Square, evaluate};
use tracing::{debug, instrument};

/// Snapshot timeline plus the current step.
///
/// Invariants (checked in debug builds after every transition):
/// - the timeline is never empty and starts with the empty board
/// - each snapshot adds exactly one mark to the previous one, X first
/// - `step < len()`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameHistory {
    pub(crate) snapshots: Vec<Board>,
    pub(crate) step: usize,
}

impl GameHistory {
    /// Starts a fresh game at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            step: 0,
        }
    }

    /// Replays cell clicks from a fresh game.
    ///
    /// Unlike interactive play, the first refused click aborts the replay.
    #[instrument]
    pub fn replay(indices: &[usize]) -> Result<Self, MoveError> {
        indices
            .iter()
            .try_fold(Self::new(), |game, &index| game.apply_move(index))
    }

    /// Places the next player's mark at `index`.
    ///
    /// Checks, in order, that the index names a cell, that the displayed
    /// position is not won or drawn, and that the cell is empty. Any
    /// snapshots after the current step are discarded before the new one is
    /// appended.
    ///
    /// # Errors
    ///
    /// Returns the first failed check; `self` is never modified.
    #[instrument(skip(self), fields(step = self.step, len = self.snapshots.len()))]
    pub fn apply_move(&self, index: usize) -> Result<Self, MoveError> {
        let position = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;

        let outcome = self.outcome();
        if outcome.is_terminal() {
            debug!(%outcome, "Move refused, game over");
            return Err(MoveError::GameOver(outcome));
        }

        let board = self.current_board();
        if !board.is_empty(position) {
            debug!(%position, "Move refused, square occupied");
            return Err(MoveError::SquareOccupied(position));
        }

        let player = self.next_player();
        let next_board = board.with_mark(position, player);

        let mut snapshots = self.snapshots[..=self.step].to_vec();
        let discarded = self.snapshots.len() - snapshots.len();
        snapshots.push(next_board);

        let next = Self {
            step: snapshots.len() - 1,
            snapshots,
        };
        debug!(%player, %position, discarded, new_step = next.step, "Move applied");

        assert_invariants(&next);
        Ok(next)
    }

    /// Moves the pointer to `step` without touching the timeline.
    ///
    /// Later snapshots stay available until the next accepted move.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::StepOutOfRange`] if `step` is not a recorded step.
    #[instrument(skip(self), fields(from = self.step, len = self.snapshots.len()))]
    pub fn jump_to(&self, step: usize) -> Result<Self, JumpError> {
        let len = self.snapshots.len();
        if step >= len {
            debug!("Jump refused, step out of range");
            return Err(JumpError::StepOutOfRange { step, len });
        }

        let next = Self {
            snapshots: self.snapshots.clone(),
            step,
        };
        debug!(outcome = %next.outcome(), "Jumped");

        assert_invariants(&next);
        Ok(next)
    }

    /// Index of the displayed snapshot.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Number of recorded snapshots, including the empty start.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; the empty start board is always recorded.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Index of the last recorded snapshot.
    pub fn last_step(&self) -> usize {
        self.snapshots.len() - 1
    }

    /// All recorded snapshots.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// The displayed snapshot.
    pub fn current_board(&self) -> &Board {
        &self.snapshots[self.step]
    }

    /// Outcome of the displayed snapshot.
    pub fn outcome(&self) -> Outcome {
        evaluate(self.current_board())
    }

    /// True when the displayed snapshot is won or drawn.
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_terminal()
    }

    /// Whose mark the next accepted move places, by step parity.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.step)
    }

    /// The move that produced snapshot `step`, `None` for the start or an
    /// unrecorded step.
    pub fn move_at(&self, step: usize) -> Option<Move> {
        let previous = self.snapshots.get(step.checked_sub(1)?)?;
        let current = self.snapshots.get(step)?;
        Position::ALL
            .into_iter()
            .find_map(|pos| match (previous.get(pos), current.get(pos)) {
                (Square::Empty, Square::Occupied(player)) => Some(Move::new(player, pos)),
                _ => None,
            })
    }

    /// The move that produced the displayed snapshot.
    pub fn last_move(&self) -> Option<Move> {
        self.move_at(self.step)
    }

    /// Cells to distinguish when rendering the displayed snapshot.
    pub fn highlight(&self, mode: HighlightMode) -> Highlight {
        Highlight::for_history(self, mode)
    }

    /// Status line for the displayed snapshot.
    pub fn status(&self) -> Status {
        Status::for_history(self)
    }

    /// Everything a renderer needs for one frame.
    pub fn view(&self, mode: HighlightMode) -> GameView {
        GameView::new(self, mode)
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}
