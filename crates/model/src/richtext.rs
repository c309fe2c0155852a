//! Run-based rich text for task descriptions.
//!
//! A description is a sequence of styled runs: maximal stretches of
//! characters sharing one [`TextStyle`]. All editing happens through
//! character offsets into the concatenated text, never through run
//! indices, so callers reason about "characters 0 to 5" and the run
//! structure stays an internal detail.
//!
//! # Canonical form
//!
//! A `RichText` value always holds its runs in canonical form:
//!
//! - no run has empty text;
//! - no two adjacent runs share the same style.
//!
//! Every mutating operation restores this form before returning, which
//! makes structural equality meaningful and makes the markup emitted by
//! [`RichText::to_markup`] deterministic: equal documents always produce
//! byte-identical markup.
//!
//! # Markup
//!
//! The persistent form is a JSON array of run objects, with style flags
//! omitted when false and the foreground color omitted when absent:
//!
//! ```text
//! [{"text":"hello","bold":true},{"text":" world"}]
//! ```
//!
//! The empty document maps to the empty string in both directions.

use serde::{Deserialize, Serialize};

use crate::color::HexColor;
use crate::error::Result;

/// Character formatting applied to a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TextStyle {
    /// Bold weight.
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,

    /// Italic slant.
    #[serde(default, skip_serializing_if = "is_false")]
    pub italic: bool,

    /// Underline.
    #[serde(default, skip_serializing_if = "is_false")]
    pub underline: bool,

    /// Foreground color, or `None` for the default foreground.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<HexColor>,
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

impl TextStyle {
    /// Returns `true` when no formatting is set.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }
}

/// A single formatting change to apply over a selection.
///
/// Boolean ops carry the state to *set* rather than toggling in place:
/// the editor decides the target state once (from its own toggle button)
/// and the whole selection ends up uniform, even when it previously mixed
/// styled and unstyled stretches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatOp {
    /// Set or clear bold.
    Bold(bool),
    /// Set or clear italic.
    Italic(bool),
    /// Set or clear underline.
    Underline(bool),
    /// Set the foreground color.
    Foreground(HexColor),
}

impl FormatOp {
    fn apply_to(self, style: &mut TextStyle) {
        match self {
            Self::Bold(on) => style.bold = on,
            Self::Italic(on) => style.italic = on,
            Self::Underline(on) => style.underline = on,
            Self::Foreground(color) => style.color = Some(color),
        }
    }
}

/// A stretch of characters sharing one style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledRun {
    /// The run's text.
    pub text: String,

    /// The style shared by every character of the run.
    #[serde(flatten)]
    pub style: TextStyle,
}

impl StyledRun {
    /// Creates a run.
    #[must_use]
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// A half-open character range `[start, end)` over a document.
///
/// Always normalized so `start <= end`; construct one with
/// [`Selection::new`] and the endpoints may be given in either order.
/// An empty range means "no selection".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// First selected character.
    pub start: usize,
    /// One past the last selected character.
    pub end: usize,
}

impl Selection {
    /// Creates a selection from two endpoints in either order.
    #[must_use]
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// Returns `true` when the range covers no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Number of characters covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}

/// A styled document: the ordered runs of a task description.
///
/// # Examples
///
/// ```
/// use delo_model::{FormatOp, RichText, Selection};
///
/// let mut text = RichText::from_plain("hello world");
/// text.apply(Selection::new(0, 5), FormatOp::Bold(true));
///
/// assert_eq!(text.plain_text(), "hello world");
/// assert_eq!(
///     text.to_markup(),
///     r#"[{"text":"hello","bold":true},{"text":" world"}]"#,
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RichText {
    runs: Vec<StyledRun>,
}

impl RichText {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a document of unformatted text. Empty input yields the
    /// empty document.
    #[must_use]
    pub fn from_plain(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            return Self::default();
        }
        Self {
            runs: vec![StyledRun::new(text, TextStyle::default())],
        }
    }

    /// The runs in document order.
    #[must_use]
    pub fn runs(&self) -> &[StyledRun] {
        &self.runs
    }

    /// Total length in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.runs.iter().map(StyledRun::char_len).sum()
    }

    /// Returns `true` when the document holds no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// The concatenated text with all styling stripped.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    /// The style of the character at `offset`, or `None` past the end.
    #[must_use]
    pub fn style_at(&self, offset: usize) -> Option<TextStyle> {
        let mut pos = 0;
        for run in &self.runs {
            pos += run.char_len();
            if offset < pos {
                return Some(run.style);
            }
        }
        None
    }

    /// Inserts text at a character offset, clamped to the document end.
    ///
    /// The inserted characters inherit the style of the character before
    /// the insertion point, or of the character after it when inserting
    /// at the very start. Inserting into an empty document yields plain
    /// text.
    pub fn insert(&mut self, offset: usize, text: &str) {
        if text.is_empty() {
            return;
        }
        let offset = offset.min(self.len());
        let style = if offset > 0 {
            self.style_at(offset - 1)
        } else {
            self.style_at(offset)
        }
        .unwrap_or_default();

        let (mut head, tail) = split_runs(std::mem::take(&mut self.runs), offset);
        head.push(StyledRun::new(text, style));
        head.extend(tail);
        self.runs = coalesce(head);
    }

    /// Deletes the characters covered by `selection`, clamped to the
    /// document. An empty selection is a no-op.
    pub fn delete(&mut self, selection: Selection) {
        let selection = self.clamp(selection);
        if selection.is_empty() {
            return;
        }
        let (mut head, rest) = split_runs(std::mem::take(&mut self.runs), selection.start);
        let (_, tail) = split_runs(rest, selection.len());
        head.extend(tail);
        self.runs = coalesce(head);
    }

    /// Applies a formatting change to the characters covered by
    /// `selection`, clamped to the document.
    ///
    /// An empty selection leaves the document untouched: no run is split,
    /// no boundary moves, and the markup stays byte-identical. This is
    /// what makes a formatting shortcut pressed without a selection a
    /// true no-op.
    pub fn apply(&mut self, selection: Selection, op: FormatOp) {
        let selection = self.clamp(selection);
        if selection.is_empty() {
            return;
        }
        let (mut head, rest) = split_runs(std::mem::take(&mut self.runs), selection.start);
        let (mut mid, tail) = split_runs(rest, selection.len());
        for run in &mut mid {
            op.apply_to(&mut run.style);
        }
        head.extend(mid);
        head.extend(tail);
        self.runs = coalesce(head);
    }

    /// Serializes to markup. The empty document yields the empty string;
    /// anything else yields the JSON run array.
    #[must_use]
    pub fn to_markup(&self) -> String {
        if self.runs.is_empty() {
            return String::new();
        }
        // Runs contain only strings, bools, and color strings; the
        // serializer cannot fail on them.
        serde_json::to_string(&self.runs).expect("run serialization is infallible")
    }

    /// Parses markup produced by [`RichText::to_markup`].
    ///
    /// Accepted input is normalized to canonical form, so a document
    /// built from hand-written markup with split or empty runs compares
    /// equal to the same document built through editing operations.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ModelError::Markup`] when the input is neither
    /// empty nor a valid JSON run array.
    pub fn from_markup(markup: &str) -> Result<Self> {
        if markup.is_empty() {
            return Ok(Self::default());
        }
        let runs: Vec<StyledRun> = serde_json::from_str(markup)?;
        Ok(Self {
            runs: coalesce(runs),
        })
    }

    fn clamp(&self, selection: Selection) -> Selection {
        let len = self.len();
        Selection {
            start: selection.start.min(len),
            end: selection.end.min(len),
        }
    }
}

/// Splits a run sequence at a character offset, cutting one run in two
/// when the offset falls inside it. Offsets past the end land everything
/// in the head.
fn split_runs(runs: Vec<StyledRun>, offset: usize) -> (Vec<StyledRun>, Vec<StyledRun>) {
    let mut head = Vec::with_capacity(runs.len());
    let mut tail = Vec::new();
    let mut remaining = offset;

    for run in runs {
        if !tail.is_empty() {
            tail.push(run);
            continue;
        }
        let len = run.char_len();
        if remaining >= len {
            remaining -= len;
            head.push(run);
        } else if remaining == 0 {
            tail.push(run);
        } else {
            let byte = run
                .text
                .char_indices()
                .nth(remaining)
                .map_or(run.text.len(), |(i, _)| i);
            head.push(StyledRun::new(&run.text[..byte], run.style));
            tail.push(StyledRun::new(&run.text[byte..], run.style));
            remaining = 0;
        }
    }
    (head, tail)
}

/// Restores canonical form: drops empty runs and merges adjacent runs
/// with equal styles.
fn coalesce(runs: Vec<StyledRun>) -> Vec<StyledRun> {
    let mut out: Vec<StyledRun> = Vec::with_capacity(runs.len());
    for run in runs {
        if run.text.is_empty() {
            continue;
        }
        match out.last_mut() {
            Some(last) if last.style == run.style => last.text.push_str(&run.text),
            _ => out.push(run),
        }
    }
    out
}
