//! Render-facing projections of a [`GameHistory`].
//!
//! Renderers never look inside the history; they get a [`GameView`] per
//! frame and send back cell indices and history steps.

use super::action::Move;
use super::{Board, GameHistory, Outcome, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Which cells to distinguish when drawing the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum HighlightMode {
    /// Only the cell played to reach the displayed step, even after a win.
    LastMove,
    /// The three winning cells on a win, nothing on a draw, otherwise the
    /// last played cell.
    #[default]
    WinningLine,
}

impl HighlightMode {
    /// Switches to the other mode.
    pub fn toggle(self) -> Self {
        match self {
            Self::LastMove => Self::WinningLine,
            Self::WinningLine => Self::LastMove,
        }
    }
}

/// Set of cells to distinguish, in board order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Highlight(Vec<Position>);

impl Highlight {
    /// Highlight for the snapshot under the history's pointer.
    #[instrument(skip(history))]
    pub fn for_history(history: &GameHistory, mode: HighlightMode) -> Self {
        let last = history.last_move().map(|m| m.position);
        let mut cells: Vec<Position> = match (mode, history.outcome()) {
            (HighlightMode::LastMove, _) | (HighlightMode::WinningLine, Outcome::InProgress) => {
                last.into_iter().collect()
            }
            (HighlightMode::WinningLine, Outcome::Win { line, .. }) => line.positions().to_vec(),
            (HighlightMode::WinningLine, Outcome::Draw) => Vec::new(),
        };
        cells.sort();
        Self(cells)
    }

    /// Whether `pos` is highlighted.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    /// Highlighted positions in board order.
    pub fn positions(&self) -> &[Position] {
        &self.0
    }

    /// True when nothing is highlighted.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One-line game status shown next to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// The game continues.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
    /// The displayed position is won.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// The displayed position is drawn.
    #[display("Draw")]
    Draw,
}

impl Status {
    /// Status of the snapshot under the history's pointer.
    pub fn for_history(history: &GameHistory) -> Self {
        match history.outcome() {
            Outcome::InProgress => Status::NextPlayer(history.next_player()),
            Outcome::Win { player, .. } => Status::Winner(player),
            Outcome::Draw => Status::Draw,
        }
    }
}

/// A selectable entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Step selected by this entry.
    pub step: usize,
    /// "Go to game start" or "Go to move #n".
    pub label: String,
    /// The move that produced this step.
    pub played: Option<Move>,
    /// Whether this is the displayed step.
    pub current: bool,
}

impl HistoryEntry {
    /// Label the move list shows for `step`.
    pub fn label_for(step: usize) -> String {
        if step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", step)
        }
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// The displayed snapshot.
    pub board: Board,
    /// Index of the displayed snapshot.
    pub step: usize,
    /// Number of recorded snapshots.
    pub history_len: usize,
    /// Structured status.
    pub status: Status,
    /// Status as shown to the player.
    pub status_text: String,
    /// Cells to distinguish.
    pub highlight: Highlight,
    /// Move list, one entry per recorded snapshot.
    pub entries: Vec<HistoryEntry>,
}

impl GameView {
    /// Projects `history` for rendering.
    #[instrument(skip(history), fields(step = history.step(), len = history.len()))]
    pub fn new(history: &GameHistory, mode: HighlightMode) -> Self {
        let status = history.status();
        let entries = (0..history.len())
            .map(|step| HistoryEntry {
                step,
                label: HistoryEntry::label_for(step),
                played: history.move_at(step),
                current: step == history.step(),
            })
            .collect();

        Self {
            board: *history.current_board(),
            step: history.step(),
            history_len: history.len(),
            status,
            status_text: status.to_string(),
            highlight: history.highlight(mode),
            entries,
        }
    }
}
