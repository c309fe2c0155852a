//! End-to-end message-flow tests against the public API of the
//! delo-model and delo-tui crates.

use delo_model::{Message, RichText, TaskList};
use delo_tui::App;
use delo_tui::editor::PALETTE;

fn type_into_editor(app: &mut App, text: &str) {
    for ch in text.chars() {
        app.update(Message::EditorInput { ch });
    }
}

fn type_into_prompt(app: &mut App, text: &str) {
    for ch in text.chars() {
        app.update(Message::PromptInput { ch });
    }
}

#[test]
fn creating_a_task_with_formatting_and_a_tag() {
    let mut app = App::new(TaskList::new());

    app.update(Message::AddTask);
    type_into_editor(&mut app, "Buy milk");
    app.update(Message::EditorNextField);
    type_into_editor(&mut app, "urgent");

    // Select the whole word and bold it
    app.update(Message::EditorHome { select: false });
    app.update(Message::EditorEnd { select: true });
    app.update(Message::EditorBold);

    // Two-step tag workflow: name, then color
    app.update(Message::EditorAddTag);
    type_into_prompt(&mut app, "errand");
    app.update(Message::PromptConfirm);
    app.update(Message::PromptRight);
    app.update(Message::PromptConfirm);

    app.update(Message::EditorConfirm);

    assert!(!app.is_editing());
    assert_eq!(app.list().len(), 1);
    assert_eq!(app.list().selected(), Some(0));

    let task = app.list().get(0).unwrap();
    assert_eq!(task.title, "Buy milk");
    assert_eq!(task.tags.len(), 1);
    assert_eq!(task.tags[0].name, "errand");
    assert_eq!(task.tags[0].color, PALETTE[1]);

    let body = RichText::from_markup(&task.description).unwrap();
    assert_eq!(body.plain_text(), "urgent");
    assert_eq!(body.runs().len(), 1);
    assert!(body.runs()[0].style.bold);
}

#[test]
fn cancelling_an_edit_leaves_the_task_untouched() {
    let mut app = App::new(TaskList::new());

    app.update(Message::AddTask);
    type_into_editor(&mut app, "Water plants");
    app.update(Message::EditorConfirm);
    let before = app.list().get(0).unwrap().clone();

    app.update(Message::EditSelected);
    type_into_editor(&mut app, " every day");
    app.update(Message::EditorCancel);

    assert!(!app.is_editing());
    assert_eq!(app.list().get(0).unwrap(), &before);
}

#[test]
fn deleting_a_task_requires_confirmation() {
    let mut app = App::new(TaskList::new());

    for title in ["one", "two"] {
        app.update(Message::AddTask);
        type_into_editor(&mut app, title);
        app.update(Message::EditorConfirm);
    }
    assert_eq!(app.list().len(), 2);

    app.update(Message::RequestDelete);
    assert_eq!(app.list().len(), 2);

    app.update(Message::ConfirmDelete);
    assert_eq!(app.list().len(), 1);
    assert_eq!(app.list().get(0).unwrap().title, "one");
}
