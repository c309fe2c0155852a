//! Error types for model operations.

use thiserror::Error;

/// Errors produced by model operations.
///
/// The taxonomy is deliberately narrow: there is no I/O anywhere in the
/// model, so everything here is either a programmer precondition
/// (`OutOfRange`) or a malformed value crossing a construction boundary.
/// User cancellation of a dialog or prompt is *not* an error and never
/// appears here; it is expressed as the `None`/cancelled arm of an outcome.
#[derive(Debug, Error)]
pub enum ModelError {
    /// An index-based operation was called with an index that is not a
    /// live row of the task list. The UI layer must never issue such a
    /// call; reaching this indicates a UI-state desync bug.
    #[error("index {index} out of bounds for task list of length {len}")]
    OutOfRange {
        /// The offending index.
        index: usize,
        /// The length of the list at the time of the call.
        len: usize,
    },

    /// A color string did not match the `#rrggbb` form.
    #[error("invalid hex color {input:?}: expected \"#rrggbb\"")]
    InvalidColor {
        /// The rejected input.
        input: String,
    },

    /// A rich-text markup string could not be decoded into runs.
    #[error("invalid rich-text markup: {0}")]
    Markup(#[from] serde_json::Error),
}

/// Convenience result alias for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
