//! Task editor state management.
//!
//! The editor is a modal overlay holding a draft of a task: a title
//! line, a rich-text description with its own cursor and selection, the
//! three format toggles, and the draft's tags. It edits the draft only;
//! the task list is untouched until the application commits the result
//! of [`EditorState::finish`], so cancelling discards everything.
//!
//! The two-step add-tag workflow and the text-color picker are modelled
//! as a [`PromptState`] stacked on top of the editor. While a prompt is
//! open it receives all input.

use delo_model::{FormatOp, HexColor, RichText, Selection, Tag, Task};

use crate::input::InputLine;

/// Colors offered by the picker prompts.
pub const PALETTE: [HexColor; 8] = [
    HexColor::new(0x6b, 0x72, 0x80), // gray
    HexColor::new(0x25, 0x63, 0xeb), // blue
    HexColor::new(0x0d, 0x94, 0x88), // teal
    HexColor::new(0x16, 0xa3, 0x4a), // green
    HexColor::new(0xd9, 0x77, 0x06), // amber
    HexColor::new(0xdc, 0x26, 0x26), // red
    HexColor::new(0xdb, 0x27, 0x77), // pink
    HexColor::new(0x7c, 0x3a, 0xed), // purple
];

/// Which editor field has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorField {
    /// The single-line title.
    #[default]
    Title,
    /// The rich-text description.
    Description,
}

/// Highlight position within the color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorPicker {
    selected: usize,
}

impl ColorPicker {
    /// The highlighted palette index.
    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// The highlighted color.
    #[must_use]
    pub fn color(&self) -> HexColor {
        PALETTE[self.selected]
    }

    /// Moves the highlight right, wrapping.
    pub fn next(&mut self) {
        self.selected = (self.selected + 1) % PALETTE.len();
    }

    /// Moves the highlight left, wrapping.
    pub fn prev(&mut self) {
        self.selected = (self.selected + PALETTE.len() - 1) % PALETTE.len();
    }
}

/// A prompt stacked on top of the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptState {
    /// First step of adding a tag: name entry.
    TagName(InputLine),
    /// Second step of adding a tag: color choice. Holds the name from
    /// the first step; cancelling here discards it.
    TagColor {
        /// The name entered in the first step.
        name: String,
        /// The palette highlight.
        picker: ColorPicker,
    },
    /// Foreground color choice for the description selection.
    TextColor {
        /// The palette highlight.
        picker: ColorPicker,
    },
}

/// State for the task editor overlay.
#[derive(Debug, Clone)]
pub struct EditorState {
    /// Row being edited, or `None` when drafting a new task.
    target: Option<usize>,
    title: InputLine,
    description: RichText,
    /// Description cursor, a character offset.
    cursor: usize,
    /// Selection anchor. Set while extending a selection; `anchor != cursor`
    /// means text is selected.
    anchor: Option<usize>,
    focus: EditorField,
    bold: bool,
    italic: bool,
    underline: bool,
    tags: Vec<Tag>,
    prompt: Option<PromptState>,
}

impl EditorState {
    /// Creates an editor over a blank draft.
    #[must_use]
    pub fn for_new() -> Self {
        Self {
            target: None,
            title: InputLine::new(),
            description: RichText::new(),
            cursor: 0,
            anchor: None,
            focus: EditorField::Title,
            bold: false,
            italic: false,
            underline: false,
            tags: Vec::new(),
            prompt: None,
        }
    }

    /// Creates an editor seeded with a copy of the task at `target`.
    ///
    /// The draft owns its data outright; editing it never touches the
    /// original task.
    #[must_use]
    pub fn for_task(target: usize, task: &Task) -> Self {
        let description = task.description_rich();
        let cursor = description.len();
        Self {
            target: Some(target),
            title: InputLine::with_value(task.title.clone()),
            description,
            cursor,
            anchor: None,
            focus: EditorField::Title,
            bold: false,
            italic: false,
            underline: false,
            tags: task.tags.clone(),
            prompt: None,
        }
    }

    /// Row being edited, or `None` for a new task.
    #[must_use]
    pub fn target(&self) -> Option<usize> {
        self.target
    }

    /// The title input.
    #[must_use]
    pub fn title(&self) -> &InputLine {
        &self.title
    }

    /// The draft description.
    #[must_use]
    pub fn description(&self) -> &RichText {
        &self.description
    }

    /// The description cursor, a character offset.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The focused field.
    #[must_use]
    pub fn focus(&self) -> EditorField {
        self.focus
    }

    /// The draft's tags in insertion order.
    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Whether the bold toggle is down.
    #[must_use]
    pub fn bold(&self) -> bool {
        self.bold
    }

    /// Whether the italic toggle is down.
    #[must_use]
    pub fn italic(&self) -> bool {
        self.italic
    }

    /// Whether the underline toggle is down.
    #[must_use]
    pub fn underline(&self) -> bool {
        self.underline
    }

    /// The open prompt, if any.
    #[must_use]
    pub fn prompt(&self) -> Option<&PromptState> {
        self.prompt.as_ref()
    }

    /// Returns `true` while a prompt is on top of the editor.
    #[must_use]
    pub fn is_prompting(&self) -> bool {
        self.prompt.is_some()
    }

    /// The active description selection, or `None` when the anchor and
    /// cursor coincide.
    #[must_use]
    pub fn selection(&self) -> Option<Selection> {
        let anchor = self.anchor?;
        let selection = Selection::new(anchor, self.cursor);
        (!selection.is_empty()).then_some(selection)
    }

    /// Builds the task the draft describes.
    #[must_use]
    pub fn finish(&self) -> Task {
        Task::new(
            self.title.value(),
            self.description.to_markup(),
            self.tags.clone(),
        )
    }

    /// Types a character into the focused field. A description selection
    /// is replaced by the typed character.
    pub fn input_char(&mut self, ch: char) {
        match self.focus {
            EditorField::Title => self.title.insert_char(ch),
            EditorField::Description => {
                self.replace_selection(&ch.to_string());
            }
        }
    }

    /// Handles Enter: in the title it moves focus to the description,
    /// in the description it inserts a line break.
    pub fn newline(&mut self) {
        match self.focus {
            EditorField::Title => self.focus = EditorField::Description,
            EditorField::Description => self.replace_selection("\n"),
        }
    }

    /// Deletes backwards in the focused field. A description selection
    /// is deleted whole.
    pub fn backspace(&mut self) {
        match self.focus {
            EditorField::Title => self.title.backspace(),
            EditorField::Description => {
                if let Some(selection) = self.selection() {
                    self.description.delete(selection);
                    self.cursor = selection.start;
                    self.anchor = None;
                } else if self.cursor > 0 {
                    self.description
                        .delete(Selection::new(self.cursor - 1, self.cursor));
                    self.cursor -= 1;
                }
            }
        }
    }

    /// Moves the caret left; `select` extends the selection.
    pub fn move_left(&mut self, select: bool) {
        match self.focus {
            EditorField::Title => self.title.move_left(),
            EditorField::Description => {
                self.update_anchor(select);
                self.cursor = self.cursor.saturating_sub(1);
            }
        }
    }

    /// Moves the caret right; `select` extends the selection.
    pub fn move_right(&mut self, select: bool) {
        match self.focus {
            EditorField::Title => self.title.move_right(),
            EditorField::Description => {
                self.update_anchor(select);
                self.cursor = (self.cursor + 1).min(self.description.len());
            }
        }
    }

    /// Moves the caret to the start of the field or line.
    pub fn move_home(&mut self, select: bool) {
        match self.focus {
            EditorField::Title => self.title.move_home(),
            EditorField::Description => {
                self.update_anchor(select);
                let (start, _) = self.line_bounds(self.cursor);
                self.cursor = start;
            }
        }
    }

    /// Moves the caret to the end of the field or line.
    pub fn move_end(&mut self, select: bool) {
        match self.focus {
            EditorField::Title => self.title.move_end(),
            EditorField::Description => {
                self.update_anchor(select);
                let (_, end) = self.line_bounds(self.cursor);
                self.cursor = end;
            }
        }
    }

    /// Moves the description caret up one line, keeping the column where
    /// the line is long enough. Collapses any selection.
    pub fn move_up(&mut self) {
        if self.focus != EditorField::Description {
            return;
        }
        self.anchor = None;
        let (start, _) = self.line_bounds(self.cursor);
        if start == 0 {
            self.cursor = 0;
            return;
        }
        let column = self.cursor - start;
        let (prev_start, prev_end) = self.line_bounds(start - 1);
        self.cursor = prev_start + column.min(prev_end - prev_start);
    }

    /// Moves the description caret down one line, keeping the column
    /// where the line is long enough. Collapses any selection.
    pub fn move_down(&mut self) {
        if self.focus != EditorField::Description {
            return;
        }
        self.anchor = None;
        let len = self.description.len();
        let (start, end) = self.line_bounds(self.cursor);
        if end >= len {
            self.cursor = len;
            return;
        }
        let column = self.cursor - start;
        let (next_start, next_end) = self.line_bounds(end + 1);
        self.cursor = next_start + column.min(next_end - next_start);
    }

    /// Cycles focus between the title and the description.
    pub fn next_field(&mut self) {
        self.focus = match self.focus {
            EditorField::Title => EditorField::Description,
            EditorField::Description => EditorField::Title,
        };
    }

    /// Flips the bold toggle and applies the new state to the selection.
    pub fn toggle_bold(&mut self) {
        self.bold = !self.bold;
        self.apply_to_selection(FormatOp::Bold(self.bold));
    }

    /// Flips the italic toggle and applies the new state to the selection.
    pub fn toggle_italic(&mut self) {
        self.italic = !self.italic;
        self.apply_to_selection(FormatOp::Italic(self.italic));
    }

    /// Flips the underline toggle and applies the new state to the
    /// selection.
    pub fn toggle_underline(&mut self) {
        self.underline = !self.underline;
        self.apply_to_selection(FormatOp::Underline(self.underline));
    }

    /// Opens the text-color prompt. The prompt opens whether or not text
    /// is selected; a choice made without a selection changes nothing.
    pub fn pick_color(&mut self) {
        self.prompt = Some(PromptState::TextColor {
            picker: ColorPicker::default(),
        });
    }

    /// Starts the add-tag workflow at the name step.
    pub fn add_tag(&mut self) {
        self.prompt = Some(PromptState::TagName(InputLine::new()));
    }

    /// Types a character into the open prompt.
    pub fn prompt_input(&mut self, ch: char) {
        if let Some(PromptState::TagName(line)) = &mut self.prompt {
            line.insert_char(ch);
        }
    }

    /// Deletes backwards in the open prompt.
    pub fn prompt_backspace(&mut self) {
        if let Some(PromptState::TagName(line)) = &mut self.prompt {
            line.backspace();
        }
    }

    /// Moves the prompt caret or palette highlight left.
    pub fn prompt_left(&mut self) {
        match &mut self.prompt {
            Some(PromptState::TagName(line)) => line.move_left(),
            Some(PromptState::TagColor { picker, .. } | PromptState::TextColor { picker }) => {
                picker.prev();
            }
            None => {}
        }
    }

    /// Moves the prompt caret or palette highlight right.
    pub fn prompt_right(&mut self) {
        match &mut self.prompt {
            Some(PromptState::TagName(line)) => line.move_right(),
            Some(PromptState::TagColor { picker, .. } | PromptState::TextColor { picker }) => {
                picker.next();
            }
            None => {}
        }
    }

    /// Accepts the open prompt's current value.
    ///
    /// - Tag name: an empty or whitespace-only name aborts the workflow;
    ///   otherwise the color step opens.
    /// - Tag color: the tag is appended to the draft.
    /// - Text color: the color is applied to the description selection,
    ///   or nothing happens when there is none.
    pub fn prompt_confirm(&mut self) {
        match self.prompt.take() {
            Some(PromptState::TagName(line)) => {
                let name = line.into_value();
                if !name.trim().is_empty() {
                    self.prompt = Some(PromptState::TagColor {
                        name,
                        picker: ColorPicker::default(),
                    });
                }
            }
            Some(PromptState::TagColor { name, picker }) => {
                self.tags.push(Tag::new(name, picker.color()));
            }
            Some(PromptState::TextColor { picker }) => {
                self.apply_to_selection(FormatOp::Foreground(picker.color()));
            }
            None => {}
        }
    }

    /// Dismisses the open prompt, discarding its value. Cancelling the
    /// color step of the add-tag workflow also discards the entered name.
    pub fn prompt_cancel(&mut self) {
        self.prompt = None;
    }

    fn update_anchor(&mut self, select: bool) {
        if select {
            if self.anchor.is_none() {
                self.anchor = Some(self.cursor);
            }
        } else {
            self.anchor = None;
        }
    }

    fn apply_to_selection(&mut self, op: FormatOp) {
        if let Some(selection) = self.selection() {
            self.description.apply(selection, op);
        }
    }

    fn replace_selection(&mut self, text: &str) {
        if let Some(selection) = self.selection() {
            self.description.delete(selection);
            self.cursor = selection.start;
        }
        self.anchor = None;
        self.description.insert(self.cursor, text);
        self.cursor += text.chars().count();
    }

    /// Character bounds `[start, end)` of the line containing `offset`,
    /// excluding the trailing line break.
    fn line_bounds(&self, offset: usize) -> (usize, usize) {
        let chars: Vec<char> = self.description.plain_text().chars().collect();
        let offset = offset.min(chars.len());

        let start = chars[..offset]
            .iter()
            .rposition(|&ch| ch == '\n')
            .map_or(0, |i| i + 1);
        let end = chars[offset..]
            .iter()
            .position(|&ch| ch == '\n')
            .map_or(chars.len(), |i| offset + i);
        (start, end)
    }
}
