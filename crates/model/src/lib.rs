//! Shared model types for the delo application.
//!
//! This crate defines the core types used across all delo components:
//! tasks, colored tags, the run-based rich text that backs task
//! descriptions, the task list, and the messages driving the UI loop.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`task`]: The `Task` struct
//! - [`tag`]: Colored tags rendered as chips
//! - [`color`]: `#rrggbb` color values
//! - [`richtext`]: Styled runs, selections, and formatting operations
//! - [`list`]: The ordered task list and its selection state
//! - [`message`]: TUI event messages
//! - [`error`]: Error types for model operations
//!
//! # Examples
//!
//! Building a task with a formatted description:
//!
//! ```
//! use delo_model::{FormatOp, HexColor, RichText, Selection, Tag, Task, TaskList};
//!
//! // Write the description and bold its first word
//! let mut description = RichText::from_plain("hello world");
//! description.apply(Selection::new(0, 5), FormatOp::Bold(true));
//!
//! // Assemble the task and put it on the list
//! let task = Task::new(
//!     "Greet",
//!     description.to_markup(),
//!     vec![Tag::new("urgent", HexColor::new(0xff, 0, 0))],
//! );
//! let mut list = TaskList::new();
//! let row = list.push(task);
//! list.select(row)?;
//!
//! assert_eq!(list.selected_task().unwrap().title, "Greet");
//! # Ok::<(), delo_model::ModelError>(())
//! ```

pub mod color;
pub mod error;
pub mod list;
pub mod message;
pub mod richtext;
pub mod tag;
pub mod task;

// Re-export primary types at crate root for convenience
pub use color::HexColor;
pub use error::{ModelError, Result};
pub use list::TaskList;
pub use message::Message;
pub use richtext::{FormatOp, RichText, Selection, StyledRun, TextStyle};
pub use tag::Tag;
pub use task::Task;
