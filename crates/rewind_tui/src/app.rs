//! Application state and event handling.
//!
//! `App` owns the single [`GameHistory`] value and swaps it for whatever a
//! transition returns. Refused transitions leave it untouched.

use crate::config::TuiConfig;
use crate::input::{digit_cell, move_cursor};
use crate::ui::HitMap;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use rewind_tictactoe::{GameHistory, GameView, HighlightMode, Position};
use tracing::{debug, info, instrument};

/// Which panel receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 grid.
    #[default]
    Board,
    /// The move list.
    History,
}

/// Whether the event loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: GameHistory,
    highlight: HighlightMode,
    show_move_details: bool,
    cursor: Position,
    focus: Focus,
    selected: usize,
    hits: HitMap,
}

impl App {
    /// Creates an application with a fresh game.
    pub fn new(config: &TuiConfig) -> Self {
        Self {
            game: GameHistory::new(),
            highlight: *config.highlight(),
            show_move_details: *config.show_move_details(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            hits: HitMap::default(),
        }
    }

    /// The game state.
    pub fn game(&self) -> &GameHistory {
        &self.game
    }

    /// Projection of the game for the next frame.
    pub fn view(&self) -> GameView {
        self.game.view(self.highlight)
    }

    /// Active highlight mode.
    pub fn highlight(&self) -> HighlightMode {
        self.highlight
    }

    /// Whether history entries show the move that produced them.
    pub fn show_move_details(&self) -> bool {
        self.show_move_details
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected move-list entry.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Hit regions from the last rendered frame.
    pub fn hits(&self) -> &HitMap {
        &self.hits
    }

    /// Records where the last frame put cells and history entries.
    pub fn set_hits(&mut self, hits: HitMap) {
        self.hits = hits;
    }

    /// A board cell was clicked.
    #[instrument(skip(self), fields(step = self.game.step()))]
    pub fn on_cell_click(&mut self, index: usize) {
        match self.game.apply_move(index) {
            Ok(next) => {
                self.game = next;
                self.selected = self.game.step();
                if let Some(position) = Position::from_index(index) {
                    self.cursor = position;
                }
                debug!(status = %self.game.status(), "Cell click applied");
            }
            Err(e) => debug!(error = %e, "Cell click ignored"),
        }
    }

    /// A move-list entry was selected.
    #[instrument(skip(self), fields(from = self.game.step()))]
    pub fn on_history_select(&mut self, step: usize) {
        match self.game.jump_to(step) {
            Ok(next) => {
                self.game = next;
                self.selected = step;
                debug!(status = %self.game.status(), "Jumped to step");
            }
            Err(e) => debug!(error = %e, "History selection ignored"),
        }
    }

    /// Starts a fresh game.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.game = GameHistory::new();
        self.selected = 0;
        self.cursor = Position::Center;
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        if key.kind != KeyEventKind::Press {
            return Control::Continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Control::Quit;
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char('h') => {
                self.highlight = self.highlight.toggle();
                debug!(highlight = %self.highlight, "Highlight mode changed");
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Board => Focus::History,
                    Focus::History => Focus::Board,
                };
                self.selected = self.game.step();
            }
            KeyCode::Char('[') => {
                if let Some(step) = self.game.step().checked_sub(1) {
                    self.on_history_select(step);
                }
            }
            KeyCode::Char(']') => self.on_history_select(self.game.step() + 1),
            KeyCode::Home => self.on_history_select(0),
            KeyCode::End => self.on_history_select(self.game.last_step()),
            code => {
                if let Some(index) = digit_cell(code) {
                    self.on_cell_click(index);
                } else {
                    self.handle_focused_key(code);
                }
            }
        }
        Control::Continue
    }

    fn handle_focused_key(&mut self, code: KeyCode) {
        match (self.focus, code) {
            (Focus::Board, KeyCode::Enter | KeyCode::Char(' ')) => {
                self.on_cell_click(self.cursor.to_index());
            }
            (Focus::Board, _) => self.cursor = move_cursor(self.cursor, code),
            (Focus::History, KeyCode::Up) => self.selected = self.selected.saturating_sub(1),
            (Focus::History, KeyCode::Down) => {
                self.selected = (self.selected + 1).min(self.game.last_step());
            }
            (Focus::History, KeyCode::Enter | KeyCode::Char(' ')) => {
                self.on_history_select(self.selected);
            }
            (Focus::History, _) => {}
        }
    }

    /// Handles a mouse event, routing left clicks through the last frame's
    /// hit regions.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        if let Some(index) = self.hits.cell_at(mouse.column, mouse.row) {
            self.focus = Focus::Board;
            self.on_cell_click(index);
        } else if let Some(step) = self.hits.entry_at(mouse.column, mouse.row) {
            self.focus = Focus::History;
            self.on_history_select(step);
        }
    }
}
