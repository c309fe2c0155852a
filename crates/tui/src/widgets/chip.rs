//! Tag chip rendering.
//!
//! Tags render as small colored chips: the tag name on its tag's
//! background color, with white text. Chips appear in two places, the
//! task rows in the list panel and the tag line of the detail panel and
//! editor, and both build their spans here.

use delo_model::{HexColor, Tag};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

/// Converts a tag color to a terminal color.
#[must_use]
pub fn chip_color(color: HexColor) -> Color {
    let (r, g, b) = color.rgb();
    Color::Rgb(r, g, b)
}

/// Builds the spans for one chip.
#[must_use]
pub fn chip_span(tag: &Tag) -> Span<'static> {
    Span::styled(
        format!(" {} ", tag.name),
        Style::default().fg(Color::White).bg(chip_color(tag.color)),
    )
}

/// Builds a line of chips in insertion order, separated by one blank
/// cell. An empty tag list yields an empty line.
#[must_use]
pub fn chip_line(tags: &[Tag]) -> Line<'static> {
    let mut spans = Vec::with_capacity(tags.len() * 2);
    for (i, tag) in tags.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(chip_span(tag));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chip_color_maps_components() {
        let color = chip_color(HexColor::new(0xff, 0x00, 0x80));
        assert_eq!(color, Color::Rgb(0xff, 0x00, 0x80));
    }

    #[test]
    fn chip_span_pads_the_name() {
        let span = chip_span(&Tag::new("urgent", HexColor::new(255, 0, 0)));
        assert_eq!(span.content, " urgent ");
        assert_eq!(span.style.bg, Some(Color::Rgb(255, 0, 0)));
        assert_eq!(span.style.fg, Some(Color::White));
    }

    #[test]
    fn chip_line_keeps_insertion_order() {
        let tags = vec![
            Tag::new("first", HexColor::new(1, 1, 1)),
            Tag::new("second", HexColor::new(2, 2, 2)),
        ];
        let line = chip_line(&tags);

        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, " first   second ");
    }

    #[test]
    fn empty_tags_give_an_empty_line() {
        assert!(chip_line(&[]).spans.is_empty());
    }
}
