//! Canvas pane: the 32×32 screen drawn with half-block glyphs
//!
//! Each character cell shows two vertically stacked grid cells: `▀` takes the
//! upper cell's color as foreground and the lower cell's as background. Every
//! grid column is two characters wide so cells come out roughly square.

use crate::interpreter::constants::GRID_SIZE;
use crate::memory::grid::Grid;
use crate::ui::theme::{cell_color, DEFAULT_THEME};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const UPPER_HALF: &str = "▀▀";

/// Width of the canvas including its border
pub const CANVAS_WIDTH: u16 = (GRID_SIZE * 2) as u16 + 2;

/// Height of the canvas including its border
pub const CANVAS_HEIGHT: u16 = (GRID_SIZE / 2) as u16 + 2;

/// Lines of half-block spans for `screen`
pub fn canvas_lines(screen: &Grid) -> Vec<Line<'static>> {
    (0..GRID_SIZE)
        .step_by(2)
        .map(|y| {
            let spans: Vec<Span> = (0..GRID_SIZE)
                .map(|x| {
                    Span::styled(
                        UPPER_HALF,
                        Style::default()
                            .fg(cell_color(screen.get(x, y)))
                            .bg(cell_color(screen.get(x, y + 1))),
                    )
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

/// Render the canvas pane
pub fn render_canvas_pane(frame: &mut Frame, area: Rect, screen: &Grid) {
    let block = Block::default()
        .title(" Loom ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let paragraph = Paragraph::new(canvas_lines(screen)).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::cursor::Cursor;
    use ratatui::style::Color;

    #[test]
    fn test_half_block_pairs_rows() {
        let mut screen = Grid::initial_screen();
        screen.set(Cursor::new(0, 0), 8);
        screen.set(Cursor::new(0, 1), 0);

        let lines = canvas_lines(&screen);
        assert_eq!(lines.len(), 16);
        assert_eq!(lines[0].spans.len(), 32);

        let first = &lines[0].spans[0];
        assert_eq!(first.content, UPPER_HALF);
        assert_eq!(first.style.fg, Some(Color::Rgb(255, 0, 77)));
        assert_eq!(first.style.bg, Some(Color::Rgb(0, 0, 0)));

        let untouched = &lines[0].spans[1];
        assert_eq!(untouched.style.fg, Some(Color::Rgb(41, 173, 255)));
    }

    #[test]
    fn test_canvas_dimensions() {
        assert_eq!(CANVAS_WIDTH, 66);
        assert_eq!(CANVAS_HEIGHT, 18);
    }
}
