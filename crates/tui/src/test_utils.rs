//! Test utilities for the TUI crate.
//!
//! Common helpers used across test modules for rendering verification.

use ratatui::buffer::Buffer;

/// Converts a ratatui [`Buffer`] to a string, one line per buffer row,
/// with trailing whitespace trimmed so assertions read cleanly.
#[must_use]
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            if let Some(cell) = buf.cell((x, y)) {
                result.push_str(cell.symbol());
            }
        }
        let trimmed = result.trim_end_matches(' ');
        result.truncate(trimmed.len());
        result.push('\n');
    }
    result
}
