//! Messages driving the application update loop.

/// Everything the UI can ask the application to do.
///
/// Input handling translates raw terminal events into these messages and
/// the application's `update` consumes them; nothing else crosses that
/// boundary. The variants fall into three families, routed by the mode
/// the application is in:
///
/// - list messages, handled while browsing the task list;
/// - `Editor*` messages, handled while the task editor is open;
/// - `Prompt*` messages, handled while one of the editor's prompts
///   (tag name, tag color, text color) is on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Quit the application.
    Quit,
    /// Dismiss the current transient state (delete affordance).
    Escape,
    /// Move the list selection up.
    NavigateUp,
    /// Move the list selection down.
    NavigateDown,
    /// Open the editor on a blank draft.
    AddTask,
    /// Open the editor on the selected task.
    EditSelected,
    /// Arm the delete affordance on the selected task.
    RequestDelete,
    /// Remove the task whose delete affordance is armed.
    ConfirmDelete,
    /// Left mouse click at terminal coordinates.
    ClickAt {
        /// Terminal column.
        column: u16,
        /// Terminal row.
        row: u16,
    },
    /// Right mouse click at terminal coordinates.
    RightClickAt {
        /// Terminal column.
        column: u16,
        /// Terminal row.
        row: u16,
    },

    /// Type a character into the focused editor field.
    EditorInput {
        /// The typed character.
        ch: char,
    },
    /// Insert a line break into the description.
    EditorNewline,
    /// Delete backwards in the focused editor field.
    EditorBackspace,
    /// Move the caret left; `select` extends the selection.
    EditorLeft {
        /// Whether Shift was held.
        select: bool,
    },
    /// Move the caret right; `select` extends the selection.
    EditorRight {
        /// Whether Shift was held.
        select: bool,
    },
    /// Move the caret to the start of the field or line.
    EditorHome {
        /// Whether Shift was held.
        select: bool,
    },
    /// Move the caret to the end of the field or line.
    EditorEnd {
        /// Whether Shift was held.
        select: bool,
    },
    /// Move the caret up one description line.
    EditorUp,
    /// Move the caret down one description line.
    EditorDown,
    /// Cycle focus to the next editor field.
    EditorNextField,
    /// Toggle the bold button and apply it to the selection.
    EditorBold,
    /// Toggle the italic button and apply it to the selection.
    EditorItalic,
    /// Toggle the underline button and apply it to the selection.
    EditorUnderline,
    /// Open the text-color prompt.
    EditorPickColor,
    /// Start the add-tag workflow.
    EditorAddTag,
    /// Accept the draft and close the editor.
    EditorConfirm,
    /// Discard the draft and close the editor.
    EditorCancel,

    /// Type a character into the open prompt.
    PromptInput {
        /// The typed character.
        ch: char,
    },
    /// Delete backwards in the open prompt.
    PromptBackspace,
    /// Move the prompt caret or picker highlight left.
    PromptLeft,
    /// Move the prompt caret or picker highlight right.
    PromptRight,
    /// Accept the prompt's current value.
    PromptConfirm,
    /// Dismiss the prompt without a value.
    PromptCancel,
}
