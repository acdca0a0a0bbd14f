//! Move list rendering.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use rewind_tictactoe::{GameView, HistoryEntry};

/// Renders one row per history entry and returns each row's area with its
/// step. Rows that do not fit are skipped.
pub fn render_history(
    f: &mut Frame,
    area: Rect,
    view: &GameView,
    selected: Option<usize>,
    show_move_details: bool,
) -> Vec<(Rect, usize)> {
    let border_style = if selected.is_some() {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title("History");
    let inner = block.inner(area);
    f.render_widget(block, area);

    view.entries
        .iter()
        .zip(inner.y..inner.bottom())
        .map(|(entry, y)| {
            let row = Rect::new(inner.x, y, inner.width, 1);
            let line = Paragraph::new(entry_text(entry, show_move_details))
                .style(entry_style(entry, selected == Some(entry.step)));
            f.render_widget(line, row);
            (row, entry.step)
        })
        .collect()
}

fn entry_text(entry: &HistoryEntry, show_move_details: bool) -> String {
    let marker = if entry.current { "▶ " } else { "  " };
    match entry.played.filter(|_| show_move_details) {
        Some(played) => format!("{}{:<16}{}", marker, entry.label, played),
        None => format!("{}{}", marker, entry.label),
    }
}

fn entry_style(entry: &HistoryEntry, selected: bool) -> Style {
    let style = if entry.current {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    if selected {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}
