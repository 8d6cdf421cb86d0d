//! Diagnostics pane: breakpoint and error reports

use crate::display::ErrorReport;
use crate::interpreter::engine::Breakpoint;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// One line of the diagnostics pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEntry {
    Breakpoint(Breakpoint),
    Error(ErrorReport),
}

impl LogEntry {
    fn to_line(&self) -> Line<'static> {
        match self {
            LogEntry::Breakpoint(report) => Line::from(vec![
                Span::styled("* ", Style::default().fg(DEFAULT_THEME.secondary)),
                Span::styled(
                    format!("pc {:<5}", report.pc),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(
                    format!(" x {:>2} y {:>2}", report.cursor.x, report.cursor.y),
                    Style::default().fg(DEFAULT_THEME.fg),
                ),
                Span::styled(
                    format!("  cell {:>2}", report.cell),
                    Style::default().fg(DEFAULT_THEME.number),
                ),
            ]),
            LogEntry::Error(report) => Line::from(Span::styled(
                format!("! {report}"),
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::BOLD),
            )),
        }
    }
}

/// Render the diagnostics pane
pub fn render_log_pane(
    frame: &mut Frame,
    area: Rect,
    entries: &[LogEntry],
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Diagnostics ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    if entries.is_empty() {
        let paragraph = Paragraph::new("(no breakpoints)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let total_items = entries.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    // Clamp scroll offset only if content exceeds visible area
    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = entries
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|entry| ListItem::new(entry.to_line()))
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::ErrorKind;
    use crate::memory::cursor::Cursor;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_breakpoint_line() {
        let entry = LogEntry::Breakpoint(Breakpoint {
            cursor: Cursor::new(3, 14),
            pc: 42,
            cell: 9,
        });
        let text: String = entry
            .to_line()
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(text, "* pc 42    x  3 y 14  cell  9");
    }

    #[test]
    fn test_error_line() {
        let entry = LogEntry::Error(ErrorReport {
            kind: ErrorKind::UnexpectedCharacter,
            position: Some(2),
            detail: "Unexpected character 'q' at PC 2".to_string(),
        });
        let line = entry.to_line();
        assert_eq!(
            line.spans[0].content,
            "! unexpected character at 2: Unexpected character 'q' at PC 2"
        );
    }

    #[test]
    fn test_scroll_offset_is_clamped() {
        let mut terminal = Terminal::new(TestBackend::new(40, 5)).unwrap();
        let entries: Vec<LogEntry> = (0..10)
            .map(|pc| {
                LogEntry::Breakpoint(Breakpoint {
                    cursor: Cursor::ORIGIN,
                    pc,
                    cell: 0,
                })
            })
            .collect();

        // Three visible rows inside the border
        let mut scroll = usize::MAX;
        terminal
            .draw(|f| render_log_pane(f, f.area(), &entries, &mut scroll))
            .unwrap();
        assert_eq!(scroll, 7);

        let mut scroll = 3;
        terminal
            .draw(|f| render_log_pane(f, f.area(), &entries[..2], &mut scroll))
            .unwrap();
        assert_eq!(scroll, 0);
    }
}
