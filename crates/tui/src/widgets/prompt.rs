//! Prompt overlay widgets.
//!
//! The small centered prompts stacked on top of the editor: the tag
//! name input and the two color pickers (tag color and text color).

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::editor::{ColorPicker, PALETTE};
use crate::input::InputLine;
use crate::layout::{PROMPT_HEIGHT, PROMPT_WIDTH};

use super::centered_rect;
use super::chip::chip_color;

/// Renders the tag name prompt centered in `area`.
pub fn render_tag_name_prompt(line: &InputLine, area: Rect, buf: &mut Buffer) {
    let inner = prompt_block(" New tag ", area, buf);

    let mut spans = vec![Span::styled(
        "Name: ",
        Style::default().fg(Color::DarkGray),
    )];
    for (offset, ch) in line.value().chars().enumerate() {
        let mut style = Style::default();
        if offset == line.cursor() {
            style = style.add_modifier(Modifier::REVERSED);
        }
        spans.push(Span::styled(ch.to_string(), style));
    }
    if line.cursor() == line.value().chars().count() {
        spans.push(Span::styled(
            " ",
            Style::default().add_modifier(Modifier::REVERSED),
        ));
    }

    let chunks = prompt_rows(inner);
    Paragraph::new(Line::from(spans)).render(chunks[0], buf);
    Paragraph::new(prompt_footer("next")).render(chunks[2], buf);
}

/// Renders a color picker prompt centered in `area`. `title` names the
/// step, e.g. `" Tag color "` or `" Text color "`.
pub fn render_color_prompt(title: &str, picker: &ColorPicker, area: Rect, buf: &mut Buffer) {
    let inner = prompt_block(title, area, buf);

    let mut swatches = Vec::with_capacity(PALETTE.len() * 2);
    for (index, color) in PALETTE.iter().enumerate() {
        let selected = index == picker.selected();
        let marker_style = if selected {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Reset)
        };
        swatches.push(Span::styled(
            if selected { "[" } else { " " }.to_string(),
            marker_style,
        ));
        swatches.push(Span::styled(
            "██",
            Style::default().fg(chip_color(*color)),
        ));
        swatches.push(Span::styled(
            if selected { "]" } else { " " }.to_string(),
            marker_style,
        ));
    }

    let chunks = prompt_rows(inner);
    Paragraph::new(Line::from(swatches)).render(chunks[0], buf);
    Paragraph::new(Line::from(Span::styled(
        picker.color().to_string(),
        Style::default().fg(Color::DarkGray),
    )))
    .render(chunks[1], buf);
    Paragraph::new(prompt_footer("accept")).render(chunks[2], buf);
}

/// Clears and frames the prompt area, returning its inner rect.
fn prompt_block(title: &str, area: Rect, buf: &mut Buffer) -> Rect {
    let popup_area = centered_rect(PROMPT_WIDTH, PROMPT_HEIGHT, area);
    Clear.render(popup_area, buf);

    let block = Block::default()
        .title(Span::styled(
            title.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Yellow));

    let inner = block.inner(popup_area);
    block.render(popup_area, buf);
    inner
}

fn prompt_rows(inner: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner)
}

fn prompt_footer(confirm_verb: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled("Enter", Style::default().fg(Color::Green)),
        Span::styled(format!(" {confirm_verb}  "), Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Green)),
        Span::styled(" cancel", Style::default().fg(Color::DarkGray)),
    ])
}
