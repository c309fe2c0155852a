//! Task editor overlay widget.
//!
//! Renders the modal editor: the title field, the format toolbar, the
//! rich-text description with its caret and selection, the draft's tag
//! chips, and a footer of keybinding hints. The caret is drawn by
//! reversing the cell it sits on, so it needs no terminal cursor
//! support.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::editor::{EditorField, EditorState};
use crate::layout::{EDITOR_HEIGHT, EDITOR_WIDTH};

use super::centered_rect;
use super::chip::chip_line;
use super::richtext::run_style;

/// Renders the editor overlay centered in `area`.
pub fn render_editor(editor: &EditorState, area: Rect, buf: &mut Buffer) {
    let popup_area = centered_rect(EDITOR_WIDTH, EDITOR_HEIGHT, area);
    Clear.render(popup_area, buf);

    let heading = if editor.target().is_some() {
        " Edit task "
    } else {
        " New task "
    };
    let block = Block::default()
        .title(Span::styled(
            heading,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(popup_area);
    block.render(popup_area, buf);

    // Title (1) + toolbar (1) + description (flex) + tags (1) + footer (1)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    Paragraph::new(title_line(editor)).render(chunks[0], buf);
    Paragraph::new(toolbar_line(editor)).render(chunks[1], buf);
    Paragraph::new(description_lines(editor)).render(chunks[2], buf);
    Paragraph::new(chip_line(editor.tags())).render(chunks[3], buf);
    Paragraph::new(footer_line()).render(chunks[4], buf);
}

/// Builds the title field line with its caret.
fn title_line(editor: &EditorState) -> Line<'static> {
    let focused = editor.focus() == EditorField::Title && !editor.is_prompting();
    let cursor = editor.title().cursor();

    let mut spans = vec![Span::styled(
        "Title: ",
        Style::default().fg(Color::DarkGray),
    )];
    for (offset, ch) in editor.title().value().chars().enumerate() {
        let mut style = Style::default();
        if focused && offset == cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        spans.push(Span::styled(ch.to_string(), style));
    }
    if focused && cursor == editor.title().value().chars().count() {
        spans.push(Span::styled(
            " ",
            Style::default().add_modifier(Modifier::REVERSED),
        ));
    }
    Line::from(spans)
}

/// Builds the format toolbar line. Active toggles render reversed, the
/// way checked toolbar buttons look pressed.
fn toolbar_line(editor: &EditorState) -> Line<'static> {
    let button = |label: &str, active: bool| {
        let mut style = Style::default().fg(Color::DarkGray);
        if active {
            style = Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        Span::styled(format!("[{label}]"), style)
    };

    Line::from(vec![
        button("B", editor.bold()),
        Span::raw(" "),
        button("I", editor.italic()),
        Span::raw(" "),
        button("U", editor.underline()),
        Span::raw("  "),
        Span::styled("^K color  ^T tag", Style::default().fg(Color::DarkGray)),
    ])
}

/// Builds the description lines with selection highlight and caret.
///
/// Works per character so the selection can cut through runs without
/// changing them: the highlight is a render-time `REVERSED` modifier on
/// top of the run style.
fn description_lines(editor: &EditorState) -> Vec<Line<'static>> {
    let focused = editor.focus() == EditorField::Description && !editor.is_prompting();
    let selection = editor.selection();
    let cursor = editor.cursor();

    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut offset = 0usize;

    for run in editor.description().runs() {
        let base = run_style(&run.style);
        for ch in run.text.chars() {
            let selected = selection.is_some_and(|s| offset >= s.start && offset < s.end);
            let at_cursor = focused && selection.is_none() && offset == cursor;
            let mut style = base;
            if selected || at_cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }

            if ch == '\n' {
                if at_cursor {
                    // Make the caret visible at a line end
                    current.push(Span::styled(" ", style));
                }
                lines.push(Line::from(std::mem::take(&mut current)));
            } else {
                current.push(Span::styled(ch.to_string(), style));
            }
            offset += 1;
        }
    }

    if focused && selection.is_none() && cursor >= offset {
        current.push(Span::styled(
            " ",
            Style::default().add_modifier(Modifier::REVERSED),
        ));
    }
    lines.push(Line::from(current));
    lines
}

fn footer_line() -> Line<'static> {
    Line::from(vec![
        Span::styled("Ctrl+S", Style::default().fg(Color::Green)),
        Span::styled(" save  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Green)),
        Span::styled(" cancel  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Tab", Style::default().fg(Color::Green)),
        Span::styled(" switch field", Style::default().fg(Color::DarkGray)),
    ])
}
