//! Rich text to terminal style conversion.
//!
//! Maps the run-based description format onto ratatui lines: bold,
//! italic, and underline become modifiers, the foreground color becomes
//! an RGB terminal color, and line breaks inside runs split the output
//! into separate lines.

use delo_model::{RichText, TextStyle};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::chip::chip_color;

/// Converts a run style to a terminal style.
#[must_use]
pub fn run_style(style: &TextStyle) -> Style {
    let mut out = Style::default();
    if style.bold {
        out = out.add_modifier(Modifier::BOLD);
    }
    if style.italic {
        out = out.add_modifier(Modifier::ITALIC);
    }
    if style.underline {
        out = out.add_modifier(Modifier::UNDERLINED);
    }
    if let Some(color) = style.color {
        out = out.fg(chip_color(color));
    }
    out
}

/// Converts a document to display lines, one per text line.
///
/// A run containing line breaks contributes a span to each of the lines
/// it crosses. The empty document yields a single empty line so callers
/// always have something to render.
#[must_use]
pub fn styled_lines(text: &RichText) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();

    for run in text.runs() {
        let style = run_style(&run.style);
        let mut pieces = run.text.split('\n');
        if let Some(first) = pieces.next() {
            if !first.is_empty() {
                current.push(Span::styled(first.to_string(), style));
            }
        }
        for piece in pieces {
            lines.push(Line::from(std::mem::take(&mut current)));
            if !piece.is_empty() {
                current.push(Span::styled(piece.to_string(), style));
            }
        }
    }
    lines.push(Line::from(current));
    lines
}

#[cfg(test)]
mod tests {
    use delo_model::{FormatOp, HexColor, Selection};

    use super::*;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn plain_text_is_one_line_one_span() {
        let lines = styled_lines(&RichText::from_plain("hello"));
        assert_eq!(lines.len(), 1);
        assert_eq!(line_text(&lines[0]), "hello");
    }

    #[test]
    fn empty_document_yields_one_empty_line() {
        let lines = styled_lines(&RichText::new());
        assert_eq!(lines.len(), 1);
        assert!(lines[0].spans.is_empty());
    }

    #[test]
    fn formatting_becomes_modifiers() {
        let mut text = RichText::from_plain("hello world");
        text.apply(Selection::new(0, 5), FormatOp::Bold(true));
        text.apply(Selection::new(0, 5), FormatOp::Underline(true));

        let lines = styled_lines(&text);
        let first = &lines[0].spans[0];
        assert!(first.style.add_modifier.contains(Modifier::BOLD));
        assert!(first.style.add_modifier.contains(Modifier::UNDERLINED));
        assert!(!lines[0].spans[1].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn foreground_becomes_rgb() {
        let mut text = RichText::from_plain("hi");
        text.apply(
            Selection::new(0, 2),
            FormatOp::Foreground(HexColor::new(0x11, 0x22, 0x33)),
        );

        let lines = styled_lines(&text);
        assert_eq!(
            lines[0].spans[0].style.fg,
            Some(ratatui::style::Color::Rgb(0x11, 0x22, 0x33))
        );
    }

    #[test]
    fn line_breaks_split_runs_across_lines() {
        let mut text = RichText::from_plain("one\ntwo\nthree");
        text.apply(Selection::new(0, 13), FormatOp::Italic(true));

        let lines = styled_lines(&text);
        assert_eq!(lines.len(), 3);
        assert_eq!(line_text(&lines[0]), "one");
        assert_eq!(line_text(&lines[1]), "two");
        assert_eq!(line_text(&lines[2]), "three");
        assert!(lines[2].spans[0].style.add_modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn trailing_line_break_yields_a_final_empty_line() {
        let lines = styled_lines(&RichText::from_plain("end\n"));
        assert_eq!(lines.len(), 2);
        assert!(lines[1].spans.is_empty());
    }
}
