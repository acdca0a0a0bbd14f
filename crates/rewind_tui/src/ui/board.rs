//! Tic-tac-toe board rendering.

use super::center_rect;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use rewind_tictactoe::{GameView, Player, Position, Square};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const HIGHLIGHT: Color = Color::Rgb(255, 165, 0);

/// Renders the board and returns each cell's screen area with its index.
pub fn render_board(
    f: &mut Frame,
    area: Rect,
    view: &GameView,
    cursor: Option<Position>,
) -> Vec<(Rect, usize)> {
    let block = Block::default().borders(Borders::ALL).title("Board");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let board_area = center_rect(inner, CELL_WIDTH * 3 + 2, CELL_HEIGHT * 3 + 2);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    let mut cells = Vec::with_capacity(9);
    for (row, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        cells.extend(render_row(f, row_area, view, cursor, row));
    }
    render_separator(f, rows[1]);
    render_separator(f, rows[3]);
    cells
}

fn render_row(
    f: &mut Frame,
    area: Rect,
    view: &GameView,
    cursor: Option<Position>,
    row: usize,
) -> Vec<(Rect, usize)> {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(area);

    render_vertical_sep(f, cols[1]);
    render_vertical_sep(f, cols[3]);

    [cols[0], cols[2], cols[4]]
        .into_iter()
        .enumerate()
        .filter_map(|(col, cell_area)| {
            let pos = Position::from_row_col(row, col)?;
            render_square(f, cell_area, view, cursor, pos);
            Some((cell_area, pos.to_index()))
        })
        .collect()
}

fn render_square(
    f: &mut Frame,
    area: Rect,
    view: &GameView,
    cursor: Option<Position>,
    pos: Position,
) {
    let (text, mark_style) = match view.board.get(pos) {
        Square::Empty => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let highlighted = view.highlight.contains(pos);
    let is_cursor = cursor == Some(pos);
    let cell_style = match (highlighted, is_cursor) {
        (true, true) => Style::default()
            .bg(HIGHLIGHT)
            .fg(Color::Black)
            .add_modifier(Modifier::UNDERLINED),
        (true, false) => Style::default().bg(HIGHLIGHT).fg(Color::Black),
        (false, true) => Style::default().bg(Color::White).fg(Color::Black),
        (false, false) => Style::default(),
    };
    let mark_style = if highlighted || is_cursor {
        mark_style.fg(Color::Black)
    } else {
        mark_style
    };

    let lines = vec![
        Line::raw(""),
        Line::styled(text, mark_style),
        Line::raw(""),
    ];
    let paragraph = Paragraph::new(lines)
        .style(cell_style)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let lines = vec![Line::raw("│"); area.height as usize];
    let sep = Paragraph::new(lines).style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}
