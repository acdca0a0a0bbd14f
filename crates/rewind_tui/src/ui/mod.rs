//! Stateless UI rendering.
//!
//! Drawing returns a [`HitMap`] so mouse clicks can be mapped back onto the
//! cell or history entry that was on screen.

mod board;
mod history;

use crate::app::{App, Focus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

pub use board::render_board;
pub use history::render_history;

/// Screen regions of clickable elements from one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    /// Board cells and their indices.
    pub cells: Vec<(Rect, usize)>,
    /// History entries and their steps.
    pub entries: Vec<(Rect, usize)>,
}

fn contains(rect: &Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

impl HitMap {
    /// Cell index under the given terminal coordinates.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<usize> {
        self.cells
            .iter()
            .find(|(rect, _)| contains(rect, column, row))
            .map(|(_, index)| *index)
    }

    /// History step under the given terminal coordinates.
    pub fn entry_at(&self, column: u16, row: u16) -> Option<usize> {
        self.entries
            .iter()
            .find(|(rect, _)| contains(rect, column, row))
            .map(|(_, step)| *step)
    }
}

/// Draws the whole UI and returns the clickable regions.
pub fn draw(frame: &mut Frame, app: &App) -> HitMap {
    let view = app.view();
    let mut hits = HitMap::default();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Min(13),    // Board and history
            Constraint::Length(3),  // Status
            Constraint::Length(3),  // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(27), Constraint::Length(38)])
        .split(chunks[1]);

    let cursor = (app.focus() == Focus::Board).then_some(app.cursor());
    hits.cells = render_board(frame, body[0], &view, cursor);

    let selected = (app.focus() == Focus::History).then_some(app.selected());
    hits.entries = render_history(frame, body[1], &view, selected, app.show_move_details());

    let status = Paragraph::new(view.status_text.as_str())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Status (highlight: {})", app.highlight())),
        );
    frame.render_widget(status, chunks[2]);

    let help = "1-9: move | Tab: history | [ ]: step | h: highlight | r: restart | q: quit";
    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);

    hits
}

/// Centers a `width` x `height` rectangle inside `area`.
pub(crate) fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut hits = HitMap::default();
        terminal.draw(|f| hits = draw(f, app)).unwrap();
        app.set_hits(hits);

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn click(app: &mut App, rect: Rect) {
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: rect.x + rect.width / 2,
            row: rect.y + rect.height / 2,
            modifiers: KeyModifiers::NONE,
        });
    }

    #[test]
    fn test_initial_frame() {
        let mut app = App::new(&TuiConfig::default());
        let screen = render(&mut app);
        assert!(screen.contains("Rewind - Tic Tac Toe"));
        assert!(screen.contains("Next player: X"));
        assert!(screen.contains("Go to game start"));
        assert_eq!(app.hits().cells.len(), 9);
        assert_eq!(app.hits().entries.len(), 1);
    }

    #[test]
    fn test_winner_and_move_list_rendered() {
        let mut app = App::new(&TuiConfig::default());
        for index in [0, 3, 1, 4, 2] {
            app.on_cell_click(index);
        }
        let screen = render(&mut app);
        assert!(screen.contains("Winner: X"));
        assert!(screen.contains("Go to move #5"));
        assert!(screen.contains("X at Top-right"));
        assert_eq!(app.hits().entries.len(), 6);
    }

    #[test]
    fn test_mouse_clicks_follow_hit_map() {
        let mut app = App::new(&TuiConfig::default());
        render(&mut app);

        let (rect, index) = app.hits().cells[4];
        assert_eq!(index, 4);
        click(&mut app, rect);
        assert_eq!(app.game().len(), 2);

        render(&mut app);
        let (rect, step) = app.hits().entries[0];
        assert_eq!(step, 0);
        click(&mut app, rect);
        assert_eq!(app.game().step(), 0);
        assert_eq!(app.focus(), Focus::History);
    }

    #[test]
    fn test_hit_map_misses_outside() {
        let hits = HitMap {
            cells: vec![(Rect::new(10, 10, 5, 3), 0)],
            entries: Vec::new(),
        };
        assert_eq!(hits.cell_at(10, 10), Some(0));
        assert_eq!(hits.cell_at(14, 12), Some(0));
        assert_eq!(hits.cell_at(15, 12), None);
        assert_eq!(hits.entry_at(10, 10), None);
    }
}
