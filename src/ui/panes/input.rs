//! Command input line rendering

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the typed command line with a block cursor at the end.
pub fn render_input_pane(frame: &mut Frame, area: Rect, buffer: &str) {
    let block = Block::default()
        .title(" Command ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.primary));

    let line = Line::from(vec![
        Span::styled("> ", Style::default().fg(DEFAULT_THEME.primary)),
        Span::styled(buffer.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
        Span::styled("▌", Style::default().fg(DEFAULT_THEME.secondary)),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}
