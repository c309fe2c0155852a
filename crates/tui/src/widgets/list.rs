//! Task list panel widget.
//!
//! Renders the left-hand panel: one row per task showing its tag chips
//! followed by its title. The selected row is highlighted, and the row whose delete
//! affordance is armed shows a delete marker at its end. Click
//! hit-testing shares this module's row geometry through
//! [`list_row_at`].

use delo_model::TaskList;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::chip::chip_span;

/// Marker shown at the end of the row whose delete affordance is armed.
const DELETE_MARKER: &str = "[y: delete]";

/// Renders the task list panel to the buffer.
///
/// Each task occupies one row: a selection marker, the tag chips, and
/// then the title. The armed row additionally shows [`DELETE_MARKER`]
/// in red. An empty list shows a hint for the add key instead.
pub fn render_task_list(list: &TaskList, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .title(Span::styled(
            " Tasks ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let inner = block.inner(area);
    block.render(area, buf);

    if list.is_empty() {
        let hint = Paragraph::new(Line::from(Span::styled(
            "No tasks yet. Press a to add one.",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )));
        hint.render(inner, buf);
        return;
    }

    for (index, task) in list.tasks().iter().enumerate() {
        let Ok(offset) = u16::try_from(index) else {
            break;
        };
        if offset >= inner.height {
            break;
        }
        let row_area = Rect {
            x: inner.x,
            y: inner.y + offset,
            width: inner.width,
            height: 1,
        };

        let selected = list.selected() == Some(index);
        let marker = if selected { "> " } else { "  " };
        let title_style = if selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let mut spans = vec![Span::styled(marker.to_string(), title_style)];
        for tag in &task.tags {
            spans.push(chip_span(tag));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(task.title.clone(), title_style));
        if list.pending_delete() == Some(index) {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                DELETE_MARKER,
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        Paragraph::new(Line::from(spans)).render(row_area, buf);
    }
}

/// Maps a terminal coordinate to a row index of the list panel.
///
/// Returns `None` for coordinates outside the panel's inner area. The
/// returned index is geometric; callers must check it against the list
/// length.
#[must_use]
pub fn list_row_at(list_area: Rect, column: u16, row: u16) -> Option<usize> {
    // Shrink past the border
    let inner = Rect {
        x: list_area.x + 1,
        y: list_area.y + 1,
        width: list_area.width.saturating_sub(2),
        height: list_area.height.saturating_sub(2),
    };
    if !inner.contains((column, row).into()) {
        return None;
    }
    Some(usize::from(row - inner.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_at_maps_inner_rows() {
        let area = Rect::new(0, 3, 30, 10);
        // First inner row is y = 4
        assert_eq!(list_row_at(area, 5, 4), Some(0));
        assert_eq!(list_row_at(area, 5, 7), Some(3));
    }

    #[test]
    fn row_at_rejects_borders_and_outside() {
        let area = Rect::new(0, 3, 30, 10);
        assert_eq!(list_row_at(area, 5, 3), None); // top border
        assert_eq!(list_row_at(area, 5, 12), None); // bottom border
        assert_eq!(list_row_at(area, 0, 5), None); // left border
        assert_eq!(list_row_at(area, 40, 5), None); // outside
    }

    #[test]
    fn row_at_handles_degenerate_areas() {
        assert_eq!(list_row_at(Rect::new(0, 0, 1, 1), 0, 0), None);
        assert_eq!(list_row_at(Rect::new(0, 0, 0, 0), 0, 0), None);
    }
}
