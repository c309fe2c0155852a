//! Widget components for the delo TUI.
//!
//! This module provides rendering functions for the task list UI,
//! organized into focused submodules for each visual component.
//!
//! # Overview
//!
//! The widget system follows a functional rendering approach where each
//! widget is a pure function that renders state to a buffer. This
//! enables easy testing and composition.
//!
//! # Modules
//!
//! - [`list`]: The task list panel with selection and delete affordance
//! - [`detail`]: The detail panel for the selected task
//! - [`chip`]: Colored tag chips
//! - [`richtext`]: Run-based rich text to terminal styles
//! - [`editor`]: The modal task editor overlay
//! - [`prompt`]: The tag name and color picker prompts
//! - [`status_bar`]: The footer with keybinding hints

pub mod chip;
pub mod detail;
pub mod editor;
pub mod list;
pub mod prompt;
pub mod richtext;
pub mod status_bar;

// Re-export primary rendering functions for convenience
pub use chip::{chip_color, chip_line, chip_span};
pub use detail::render_detail_panel;
pub use editor::render_editor;
pub use list::{list_row_at, render_task_list};
pub use prompt::{render_color_prompt, render_tag_name_prompt};
pub use richtext::{run_style, styled_lines};
pub use status_bar::{EDITOR_HINTS, LIST_HINTS, PROMPT_HINTS, render_status_bar};

use ratatui::layout::Rect;

/// Centers a `width` by `height` rect inside `area`, clamping to fit.
#[must_use]
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests;
