//! Single-line text input state.
//!
//! Backs the title field of the task editor and the tag-name prompt.
//! The cursor is a character offset, so multi-byte input behaves the
//! same as ASCII.

/// A single line of editable text with a cursor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputLine {
    value: String,
    /// Cursor position in characters, `0..=len`.
    cursor: usize,
}

impl InputLine {
    /// Creates an empty input.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an input holding `value` with the cursor at its end.
    #[must_use]
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    /// The current text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The cursor position in characters.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns `true` when the input holds no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Consumes the input, returning its text.
    #[must_use]
    pub fn into_value(self) -> String {
        self.value
    }

    /// Inserts a character at the cursor.
    pub fn insert_char(&mut self, ch: char) {
        let byte = self.byte_offset(self.cursor);
        self.value.insert(byte, ch);
        self.cursor += 1;
    }

    /// Deletes the character before the cursor, if any.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let byte = self.byte_offset(self.cursor - 1);
        self.value.remove(byte);
        self.cursor -= 1;
    }

    /// Moves the cursor one character left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the cursor one character right.
    pub fn move_right(&mut self) {
        let len = self.value.chars().count();
        self.cursor = (self.cursor + 1).min(len);
    }

    /// Moves the cursor to the start.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Moves the cursor to the end.
    pub fn move_end(&mut self) {
        self.cursor = self.value.chars().count();
    }

    fn byte_offset(&self, char_offset: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_offset)
            .map_or(self.value.len(), |(i, _)| i)
    }
}
