//! Headless renderer.
//!
//! Applies a list of cell clicks, optionally jumps, and renders the
//! resulting view as plain text or JSON.

use anyhow::{Context, Result};
use rewind_tictactoe::{GameHistory, GameView, HighlightMode};
use std::fmt::Write;
use tracing::{info, instrument};

/// Replays `moves`, jumps to `jump` if given, and renders the view.
///
/// A refused click or jump is an error here, unlike in the interactive UI.
#[instrument]
pub fn render(
    moves: &[usize],
    jump: Option<usize>,
    json: bool,
    highlight: HighlightMode,
    show_move_details: bool,
) -> Result<String> {
    let mut game = GameHistory::replay(moves).context("Failed to replay moves")?;
    if let Some(step) = jump {
        game = game
            .jump_to(step)
            .with_context(|| format!("Failed to jump to step {}", step))?;
    }
    info!(step = game.step(), len = game.len(), "Replay finished");

    let view = game.view(highlight);
    if json {
        let mut out = serde_json::to_string_pretty(&view).context("Failed to serialize view")?;
        out.push('\n');
        Ok(out)
    } else {
        Ok(render_text(&view, show_move_details))
    }
}

fn render_text(view: &GameView, show_move_details: bool) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{}\n", view.board);
    let _ = writeln!(out, "{}", view.status_text);

    if !view.highlight.is_empty() {
        let cells: Vec<_> = view
            .highlight
            .positions()
            .iter()
            .map(|p| p.label())
            .collect();
        let _ = writeln!(out, "Highlight: {}", cells.join(", "));
    }

    out.push('\n');
    for entry in &view.entries {
        let marker = if entry.current { '>' } else { ' ' };
        match entry.played.filter(|_| show_move_details) {
            Some(played) => {
                let _ = writeln!(out, "{} {} ({})", marker, entry.label, played);
            }
            None => {
                let _ = writeln!(out, "{} {}", marker, entry.label);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_output_after_win() {
        let out = render(&[0, 3, 1, 4, 2], None, false, HighlightMode::WinningLine, true).unwrap();
        assert_eq!(
            out,
            "X|X|X\n-+-+-\nO|O|6\n-+-+-\n7|8|9\n\n\
             Winner: X\n\
             Highlight: Top-left, Top-center, Top-right\n\
             \n  Go to game start\n\
             \u{20} Go to move #1 (X at Top-left)\n\
             \u{20} Go to move #2 (O at Middle-left)\n\
             \u{20} Go to move #3 (X at Top-center)\n\
             \u{20} Go to move #4 (O at Center)\n\
             > Go to move #5 (X at Top-right)\n"
        );
    }

    #[test]
    fn test_jump_marks_current_entry() {
        let out = render(&[0, 3, 1, 4, 2], Some(2), false, HighlightMode::LastMove, false).unwrap();
        assert!(out.contains("Next player: X"));
        assert!(out.contains("Highlight: Middle-left"));
        assert!(out.contains("> Go to move #2\n"));
        assert!(out.contains("  Go to move #5\n"));
    }

    #[test]
    fn test_json_output() {
        let out = render(&[4], None, true, HighlightMode::WinningLine, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["status_text"], "Next player: O");
        assert_eq!(value["entries"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_refused_moves_are_errors() {
        assert!(render(&[4, 4], None, false, HighlightMode::WinningLine, true).is_err());
        assert!(render(&[4], Some(5), false, HighlightMode::WinningLine, true).is_err());
    }
}
