//! Tasks: a title, a rich-text description, and tags.

use serde::{Deserialize, Serialize};

use crate::richtext::RichText;
use crate::tag::Tag;

/// A single to-do item.
///
/// The description is stored in its markup form (see
/// [`RichText::to_markup`]) so a task serializes flat, with the styled
/// runs embedded as a string. Tasks carry no identity beyond their
/// position in a [`crate::TaskList`]; editing a task replaces the whole
/// value at its row.
///
/// # Examples
///
/// ```
/// use delo_model::{HexColor, Tag, Task};
///
/// let task = Task::new(
///     "Buy milk",
///     String::new(),
///     vec![Tag::new("urgent", HexColor::new(0xff, 0, 0))],
/// );
/// assert_eq!(task.title, "Buy milk");
/// assert!(task.description_rich().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Single-line title shown in the list.
    pub title: String,

    /// Description markup. Empty string means no description.
    pub description: String,

    /// Tags in insertion order.
    pub tags: Vec<Tag>,
}

impl Task {
    /// Creates a task from its parts.
    #[must_use]
    pub fn new(title: impl Into<String>, description: String, tags: Vec<Tag>) -> Self {
        Self {
            title: title.into(),
            description,
            tags,
        }
    }

    /// Decodes the description markup.
    ///
    /// A description that does not parse as run markup is treated as one
    /// plain run of its raw text rather than an error, so a task written
    /// by hand or by an older tool still displays.
    #[must_use]
    pub fn description_rich(&self) -> RichText {
        RichText::from_markup(&self.description)
            .unwrap_or_else(|_| RichText::from_plain(self.description.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::HexColor;
    use crate::richtext::{FormatOp, Selection};

    #[test]
    fn description_roundtrips_through_markup() {
        let mut rich = RichText::from_plain("call the plumber");
        rich.apply(Selection::new(0, 4), FormatOp::Bold(true));

        let task = Task::new("Kitchen sink", rich.to_markup(), Vec::new());
        assert_eq!(task.description_rich(), rich);
    }

    #[test]
    fn invalid_markup_falls_back_to_plain_text() {
        let task = Task::new("Note", "just some words".to_string(), Vec::new());
        assert_eq!(
            task.description_rich(),
            RichText::from_plain("just some words"),
        );
    }

    #[test]
    fn serialization_keeps_tag_order() {
        let task = Task::new(
            "Errands",
            String::new(),
            vec![
                Tag::new("urgent", HexColor::new(255, 0, 0)),
                Tag::new("home", HexColor::new(0x25, 0x63, 0xeb)),
            ],
        );

        let json = serde_json::to_string(&task).expect("serialize");
        let parsed: Task = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, task);
        assert_eq!(parsed.tags[0].name, "urgent");
    }
}
