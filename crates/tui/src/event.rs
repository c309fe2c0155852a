//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages. Keys map differently depending on what has
//! input focus, so there is one mapping per mode: the task list, the
//! editor overlay, and the prompts stacked on the editor.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEventKind};
use delo_model::Message;

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts an event (keyboard or mouse) to a list-mode message.
///
/// Returns `Some(Message)` if the event maps to an action,
/// or `None` if the event is not handled.
#[must_use]
pub fn event_to_message(event: &Event) -> Option<Message> {
    match event {
        Event::Key(key) => key_to_message(*key),
        Event::Mouse(mouse) => mouse_to_message(mouse),
        _ => None,
    }
}

/// Converts a mouse event to a message.
///
/// Left-click press selects or activates the row under the pointer;
/// right-click press arms the delete affordance there. Everything else
/// is ignored.
#[must_use]
fn mouse_to_message(mouse: &crossterm::event::MouseEvent) -> Option<Message> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Message::ClickAt {
            column: mouse.column,
            row: mouse.row,
        }),
        MouseEventKind::Down(MouseButton::Right) => Some(Message::RightClickAt {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}

/// Converts a key event to a list-mode message.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Esc` | Disarm the delete affordance |
/// | `Up` / `Down` | Move the selection |
/// | `a` | Add a task |
/// | `e` or `Enter` | Edit the selected task |
/// | `d` | Arm the delete affordance on the selected task |
/// | `y` | Confirm the armed delete |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    // Check for Ctrl+C first
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Esc => Some(Message::Escape),

        KeyCode::Up => Some(Message::NavigateUp),
        KeyCode::Down => Some(Message::NavigateDown),

        KeyCode::Char('a') => Some(Message::AddTask),
        KeyCode::Char('e') | KeyCode::Enter => Some(Message::EditSelected),
        KeyCode::Char('d') => Some(Message::RequestDelete),
        KeyCode::Char('y') => Some(Message::ConfirmDelete),

        _ => None,
    }
}

/// Converts a key event to an editor-mode message.
///
/// # Key Bindings (Editor Mode)
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Ctrl+S` | Confirm the draft |
/// | `Esc` | Cancel the draft |
/// | `Tab` | Next field |
/// | `Ctrl+B` / `Ctrl+I` / `Ctrl+U` | Format toggles |
/// | `Ctrl+K` | Text color prompt |
/// | `Ctrl+T` | Add a tag |
/// | Arrows | Move the caret (`Shift` extends the selection) |
/// | `Home` / `End` | Line start / end (`Shift` extends) |
/// | `Enter` | Line break (or leave the title) |
/// | `Backspace` | Delete backwards |
/// | Any char | Input |
#[must_use]
pub fn key_to_editor_message(key: KeyEvent) -> Option<Message> {
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Message::Quit),
            KeyCode::Char('s') => Some(Message::EditorConfirm),
            KeyCode::Char('b') => Some(Message::EditorBold),
            KeyCode::Char('i') => Some(Message::EditorItalic),
            KeyCode::Char('u') => Some(Message::EditorUnderline),
            KeyCode::Char('k') => Some(Message::EditorPickColor),
            KeyCode::Char('t') => Some(Message::EditorAddTag),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(Message::EditorCancel),
        KeyCode::Tab => Some(Message::EditorNextField),
        KeyCode::Enter => Some(Message::EditorNewline),
        KeyCode::Backspace => Some(Message::EditorBackspace),

        KeyCode::Left => Some(Message::EditorLeft { select: shift }),
        KeyCode::Right => Some(Message::EditorRight { select: shift }),
        KeyCode::Home => Some(Message::EditorHome { select: shift }),
        KeyCode::End => Some(Message::EditorEnd { select: shift }),
        KeyCode::Up => Some(Message::EditorUp),
        KeyCode::Down => Some(Message::EditorDown),

        KeyCode::Char(ch) => Some(Message::EditorInput { ch }),
        _ => None,
    }
}

/// Converts a key event to a prompt-mode message.
///
/// `text_input` is `true` for the tag-name prompt, where printable keys
/// type into the field; the color pickers only use the arrows.
///
/// # Key Bindings (Prompt Mode)
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Enter` | Accept |
/// | `Esc` | Dismiss |
/// | `Left` / `Right` | Move the caret or palette highlight |
/// | `Backspace` | Backspace (name prompt) |
/// | Any char | Input (name prompt) |
#[must_use]
pub fn key_to_prompt_message(key: KeyEvent, text_input: bool) -> Option<Message> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Enter => Some(Message::PromptConfirm),
        KeyCode::Esc => Some(Message::PromptCancel),
        KeyCode::Left => Some(Message::PromptLeft),
        KeyCode::Right => Some(Message::PromptRight),
        KeyCode::Backspace if text_input => Some(Message::PromptBackspace),
        KeyCode::Char(ch) if text_input => Some(Message::PromptInput { ch }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, MouseEvent, MouseEventKind};

    fn make_key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn make_key_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: event::KeyEventState::NONE,
        }
    }

    fn ctrl(ch: char) -> KeyEvent {
        make_key_with_modifiers(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    #[test]
    fn quit_keys() {
        // Ctrl+C quits in every mode
        assert_eq!(key_to_message(ctrl('c')), Some(Message::Quit));
        assert_eq!(key_to_editor_message(ctrl('c')), Some(Message::Quit));
        assert_eq!(key_to_prompt_message(ctrl('c'), true), Some(Message::Quit));
        assert_eq!(key_to_prompt_message(ctrl('c'), false), Some(Message::Quit));
    }

    #[test]
    fn list_navigation_keys() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Up)),
            Some(Message::NavigateUp)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Down)),
            Some(Message::NavigateDown)
        );
    }

    #[test]
    fn list_action_keys() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('a'))),
            Some(Message::AddTask)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('e'))),
            Some(Message::EditSelected)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Enter)),
            Some(Message::EditSelected)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('d'))),
            Some(Message::RequestDelete)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('y'))),
            Some(Message::ConfirmDelete)
        );
        assert_eq!(key_to_message(make_key(KeyCode::Esc)), Some(Message::Escape));
    }

    #[test]
    fn unmapped_list_keys_return_none() {
        assert_eq!(key_to_message(make_key(KeyCode::Char('x'))), None);
        assert_eq!(key_to_message(make_key(KeyCode::F(1))), None);
    }

    #[test]
    fn editor_format_shortcuts() {
        assert_eq!(key_to_editor_message(ctrl('b')), Some(Message::EditorBold));
        assert_eq!(key_to_editor_message(ctrl('i')), Some(Message::EditorItalic));
        assert_eq!(
            key_to_editor_message(ctrl('u')),
            Some(Message::EditorUnderline)
        );
        assert_eq!(
            key_to_editor_message(ctrl('k')),
            Some(Message::EditorPickColor)
        );
        assert_eq!(key_to_editor_message(ctrl('t')), Some(Message::EditorAddTag));
    }

    #[test]
    fn editor_confirm_and_cancel() {
        assert_eq!(key_to_editor_message(ctrl('s')), Some(Message::EditorConfirm));
        assert_eq!(
            key_to_editor_message(make_key(KeyCode::Esc)),
            Some(Message::EditorCancel)
        );
    }

    #[test]
    fn editor_shift_arrows_extend_the_selection() {
        assert_eq!(
            key_to_editor_message(make_key_with_modifiers(KeyCode::Left, KeyModifiers::SHIFT)),
            Some(Message::EditorLeft { select: true })
        );
        assert_eq!(
            key_to_editor_message(make_key(KeyCode::Left)),
            Some(Message::EditorLeft { select: false })
        );
        assert_eq!(
            key_to_editor_message(make_key_with_modifiers(KeyCode::End, KeyModifiers::SHIFT)),
            Some(Message::EditorEnd { select: true })
        );
    }

    #[test]
    fn editor_text_input() {
        assert_eq!(
            key_to_editor_message(make_key(KeyCode::Char('x'))),
            Some(Message::EditorInput { ch: 'x' })
        );
        assert_eq!(
            key_to_editor_message(make_key(KeyCode::Enter)),
            Some(Message::EditorNewline)
        );
        assert_eq!(
            key_to_editor_message(make_key(KeyCode::Backspace)),
            Some(Message::EditorBackspace)
        );
        assert_eq!(
            key_to_editor_message(make_key(KeyCode::Tab)),
            Some(Message::EditorNextField)
        );
    }

    #[test]
    fn name_prompt_accepts_text() {
        assert_eq!(
            key_to_prompt_message(make_key(KeyCode::Char('u')), true),
            Some(Message::PromptInput { ch: 'u' })
        );
        assert_eq!(
            key_to_prompt_message(make_key(KeyCode::Backspace), true),
            Some(Message::PromptBackspace)
        );
    }

    #[test]
    fn color_prompt_ignores_text() {
        assert_eq!(key_to_prompt_message(make_key(KeyCode::Char('u')), false), None);
        assert_eq!(key_to_prompt_message(make_key(KeyCode::Backspace), false), None);
        assert_eq!(
            key_to_prompt_message(make_key(KeyCode::Left), false),
            Some(Message::PromptLeft)
        );
        assert_eq!(
            key_to_prompt_message(make_key(KeyCode::Right), false),
            Some(Message::PromptRight)
        );
    }

    #[test]
    fn prompt_confirm_and_cancel() {
        for text_input in [true, false] {
            assert_eq!(
                key_to_prompt_message(make_key(KeyCode::Enter), text_input),
                Some(Message::PromptConfirm)
            );
            assert_eq!(
                key_to_prompt_message(make_key(KeyCode::Esc), text_input),
                Some(Message::PromptCancel)
            );
        }
    }

    #[test]
    fn mouse_left_click_generates_click_at() {
        let mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 10,
            row: 5,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(
            mouse_to_message(&mouse),
            Some(Message::ClickAt { column: 10, row: 5 })
        );
    }

    #[test]
    fn mouse_right_click_generates_right_click_at() {
        let mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column: 10,
            row: 5,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(
            mouse_to_message(&mouse),
            Some(Message::RightClickAt { column: 10, row: 5 })
        );
    }

    #[test]
    fn mouse_release_and_motion_ignored() {
        let release = MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            column: 10,
            row: 5,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(mouse_to_message(&release), None);

        let moved = MouseEvent {
            kind: MouseEventKind::Moved,
            column: 10,
            row: 5,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(mouse_to_message(&moved), None);
    }

    #[test]
    fn event_to_message_ignores_resize_events() {
        let resize_event = Event::Resize(80, 24);
        assert_eq!(event_to_message(&resize_event), None);
    }
}
