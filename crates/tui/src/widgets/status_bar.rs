//! Status bar widget.
//!
//! The single footer row of keybinding hints. The application passes
//! the hints for whatever currently has input focus.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Hints shown while browsing the task list.
pub const LIST_HINTS: &[(&str, &str)] = &[
    ("↑↓", "move"),
    ("a", "add"),
    ("e", "edit"),
    ("d", "delete"),
    ("y", "confirm"),
    ("Ctrl+C", "quit"),
];

/// Hints shown while the editor overlay is open.
pub const EDITOR_HINTS: &[(&str, &str)] = &[
    ("Ctrl+B/I/U", "format"),
    ("Ctrl+K", "color"),
    ("Ctrl+T", "tag"),
    ("Ctrl+S", "save"),
    ("Esc", "cancel"),
];

/// Hints shown while a prompt is open.
pub const PROMPT_HINTS: &[(&str, &str)] = &[("Enter", "accept"), ("Esc", "cancel")];

/// Renders the status bar with the given `(key, action)` hints.
pub fn render_status_bar(hints: &[(&str, &str)], area: Rect, buf: &mut Buffer) {
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (key, action) in hints {
        spans.push(Span::styled(
            format!(" {key} "),
            Style::default().fg(Color::Green),
        ));
        spans.push(Span::styled(
            (*action).to_string(),
            Style::default().fg(Color::DarkGray),
        ));
        spans.push(Span::raw(" "));
    }
    Paragraph::new(Line::from(spans)).render(area, buf);
}
