//! Centralized layout measurements for the TUI.
//!
//! Shared constants for layout dimensions used across rendering
//! components, so the list panel, detail panel, and overlays stay in
//! agreement with the click hit-testing in the application.

/// Height of the header bar in rows.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the status bar at the bottom.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Percentage of the content width given to the task list panel; the
/// detail panel takes the rest.
pub const LIST_PANEL_PERCENT: u16 = 35;

/// Minimum terminal height for useful rendering.
///
/// Below this height, we display a "terminal too small" message. The
/// tightest screen is the editor overlay: borders, title field, a few
/// description rows, the toolbar, and the footer.
pub const MIN_HEIGHT: u16 = 12;

/// Minimum terminal height for rendering with header.
///
/// When terminal height is between `MIN_HEIGHT` and
/// `MIN_HEIGHT_WITH_HEADER`, we hide the header to reclaim rows.
pub const MIN_HEIGHT_WITH_HEADER: u16 = MIN_HEIGHT + HEADER_HEIGHT;

/// Minimum terminal width for useful rendering.
///
/// The list panel needs room for a truncated title plus a chip or two,
/// and the prompts are 40 columns wide.
pub const MIN_WIDTH: u16 = 44;

/// Width of the editor overlay.
pub const EDITOR_WIDTH: u16 = 60;

/// Height of the editor overlay.
pub const EDITOR_HEIGHT: u16 = 16;

/// Width of the prompt overlays.
pub const PROMPT_WIDTH: u16 = 40;

/// Height of the prompt overlays.
pub const PROMPT_HEIGHT: u16 = 5;
