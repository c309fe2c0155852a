//! Task detail panel widget.
//!
//! The right-hand panel shows the selected task: its title, its tag
//! chips, and the formatted description. With nothing selected it shows
//! a placeholder inviting the user to pick or add a task.

use delo_model::Task;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use super::chip::chip_line;
use super::richtext::styled_lines;

/// Placeholder shown while no task is selected.
const PLACEHOLDER: &str = "Select a task on the left or add a new one";

/// Renders the detail panel to the buffer.
///
/// `task` is the selected task, or `None` for the placeholder state.
pub fn render_detail_panel(task: Option<&Task>, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .title(Span::styled(
            " Details ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let inner = block.inner(area);
    block.render(area, buf);

    let Some(task) = task else {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            PLACEHOLDER,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )))
        .wrap(Wrap { trim: true });
        placeholder.render(inner, buf);
        return;
    };

    // Title (1) + tags (1) + separator (1) + description (flex)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(inner);

    let title = Paragraph::new(Line::from(Span::styled(
        task.title.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    title.render(chunks[0], buf);

    if !task.tags.is_empty() {
        Paragraph::new(chip_line(&task.tags)).render(chunks[1], buf);
    }

    render_separator(chunks[2], buf);

    let description = task.description_rich();
    if description.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No description",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )));
        empty.render(chunks[3], buf);
    } else {
        Paragraph::new(styled_lines(&description))
            .wrap(Wrap { trim: false })
            .render(chunks[3], buf);
    }
}

/// Renders a horizontal separator line.
fn render_separator(area: Rect, buf: &mut Buffer) {
    let line = "─".repeat(area.width as usize);
    let separator = Paragraph::new(Line::from(Span::styled(
        line,
        Style::default().fg(Color::DarkGray),
    )));
    separator.render(area, buf);
}
