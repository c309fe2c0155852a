//! Colored tags attached to tasks.

use serde::{Deserialize, Serialize};

use crate::color::HexColor;

/// A named, colored tag rendered as a chip next to a task.
///
/// Tags are immutable values: once created they are only ever appended to
/// a task's tag sequence or carried along when a task is replaced.
/// Equality is structural, and nothing deduplicates tags - a task may hold
/// several tags with the same name or color. Insertion order is
/// significant: the first tag added renders leftmost.
///
/// # Examples
///
/// ```
/// use delo_model::{HexColor, Tag};
///
/// let urgent = Tag::new("urgent", HexColor::new(0xff, 0, 0));
/// assert_eq!(urgent.name, "urgent");
/// assert_eq!(urgent.color.to_string(), "#ff0000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// The tag text shown inside the chip. Non-empty by construction: the
    /// tag-name prompt aborts the add-tag workflow on empty input.
    pub name: String,

    /// The chip background color.
    pub color: HexColor,
}

impl Tag {
    /// Creates a new tag.
    #[must_use]
    pub fn new(name: impl Into<String>, color: HexColor) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_structural() {
        let a = Tag::new("urgent", HexColor::new(255, 0, 0));
        let b = Tag::new("urgent", HexColor::new(255, 0, 0));
        let c = Tag::new("urgent", HexColor::new(0, 255, 0));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn serialization_roundtrip() {
        let tag = Tag::new("home", "#2563eb".parse().unwrap());

        let json = serde_json::to_string(&tag).expect("serialize");
        assert_eq!(json, r##"{"name":"home","color":"#2563eb"}"##);

        let parsed: Tag = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, tag);
    }
}
