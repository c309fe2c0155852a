//! Terminal UI for the delo application.
//!
//! This crate provides a Ratatui-based terminal interface for managing
//! a to-do list: a task list panel, a detail panel for the selected
//! task, and a modal editor with rich-text formatting and tags.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`app`]: Main application struct and run loop
//! - [`editor`]: Task editor overlay state management
//! - [`input`]: Single-line text input state
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`event`]: Event handling and per-mode key mappings
//! - [`layout`]: Shared layout measurements
//! - [`widgets`]: Rendering functions for each visual component
//!
//! # Example
//!
//! ```no_run
//! use delo_model::TaskList;
//! use delo_tui::{App, terminal};
//!
//! fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let mut app = App::new(TaskList::new());
//!     let result = app.run(&mut terminal);
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod editor;
pub mod event;
pub mod input;
pub mod layout;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::App;
pub use editor::{EditorField, EditorState, PromptState};
pub use input::InputLine;
