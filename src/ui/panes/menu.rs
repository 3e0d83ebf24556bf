//! Command menu pane rendering
//!
//! Lists the commands available on the current screen.  Stacks get the
//! push/pop/peek verbs, lists and trees the add/remove verbs.

use crate::structures::StructureKind;
use crate::ui::app::Screen;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Render the menu of commands available on the current screen.
pub fn render_menu_pane(frame: &mut Frame, area: Rect, screen: Screen, kind: StructureKind) {
    let block = Block::default()
        .title(" Commands ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 0, 0));

    let mut lines = Vec::new();
    match screen {
        Screen::Choose => {
            lines.push(header("Choose a data structure:"));
            lines.push(Line::default());
            lines.push(entry("1", "Linked List"));
            lines.push(entry("2", "Stack"));
            lines.push(entry("3", "Binary Tree"));
            lines.push(Line::default());
            lines.push(entry("help", "Show available commands"));
            lines.push(entry("exit", "Quit"));
        }
        Screen::Operate => {
            lines.push(header("Operations:"));
            lines.push(Line::default());
            match kind {
                StructureKind::Stack => {
                    lines.push(entry("push <value>", "Push an element onto the stack"));
                    lines.push(entry("pop", "Pop the top element"));
                    lines.push(entry("peek", "Show the top element"));
                }
                _ => {
                    lines.push(entry("add <value>", "Add a node"));
                    lines.push(entry("remove <value>", "Remove a node"));
                }
            }
            lines.push(entry("traverse", "Visit every value in order"));
            lines.push(entry("display", "Print rendering to the output"));
            lines.push(Line::default());
            lines.push(entry("back", "Choose another structure"));
            lines.push(entry("exit", "Quit"));
        }
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn header(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(DEFAULT_THEME.fg)))
}

fn entry(command: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:<16}", command),
            Style::default().fg(DEFAULT_THEME.primary),
        ),
        Span::styled(description, Style::default().fg(DEFAULT_THEME.fg)),
    ])
}
