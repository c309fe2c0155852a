//! Rendering tests for the widget modules.
//!
//! Widgets are pure functions from state to a buffer, so these tests
//! render into an in-memory buffer and assert on its contents.

use delo_model::{FormatOp, HexColor, RichText, Selection, Tag, Task, TaskList};
use ratatui::{buffer::Buffer, layout::Rect, style::Modifier};

use crate::editor::{ColorPicker, EditorState, PALETTE};
use crate::input::InputLine;
use crate::test_utils::buffer_to_string;

use super::{
    render_color_prompt, render_detail_panel, render_editor, render_status_bar,
    render_tag_name_prompt, render_task_list,
};

fn tagged_task(title: &str) -> Task {
    Task::new(
        title,
        String::new(),
        vec![Tag::new("urgent", HexColor::new(255, 0, 0))],
    )
}

#[test]
fn task_list_shows_titles_and_chips() {
    let mut list = TaskList::new();
    list.push(tagged_task("Buy milk"));
    list.push(Task::new("Call plumber", String::new(), Vec::new()));
    list.select(0).unwrap();

    let area = Rect::new(0, 0, 40, 10);
    let mut buf = Buffer::empty(area);
    render_task_list(&list, area, &mut buf);

    let content = buffer_to_string(&buf);
    assert!(content.contains("Tasks"));
    assert!(content.contains("Call plumber"));

    // Chips come before the title on the row
    let row = content
        .lines()
        .find(|line| line.contains("Buy milk"))
        .expect("row for the tagged task");
    assert!(row.trim_start().starts_with('>'));
    let chip_at = row.find("urgent").expect("chip on the row");
    let title_at = row.find("Buy milk").unwrap();
    assert!(chip_at < title_at);
}

#[test]
fn task_list_marks_the_armed_row() {
    let mut list = TaskList::new();
    list.push(tagged_task("Buy milk"));
    list.request_delete(0).unwrap();

    let area = Rect::new(0, 0, 40, 6);
    let mut buf = Buffer::empty(area);
    render_task_list(&list, area, &mut buf);

    assert!(buffer_to_string(&buf).contains("[y: delete]"));
}

#[test]
fn empty_task_list_shows_the_add_hint() {
    let area = Rect::new(0, 0, 40, 6);
    let mut buf = Buffer::empty(area);
    render_task_list(&TaskList::new(), area, &mut buf);

    assert!(buffer_to_string(&buf).contains("Press a to add one"));
}

#[test]
fn detail_panel_shows_the_placeholder_without_a_task() {
    let area = Rect::new(0, 0, 50, 10);
    let mut buf = Buffer::empty(area);
    render_detail_panel(None, area, &mut buf);

    let content = buffer_to_string(&buf);
    assert!(content.contains("Select a task on the left"));
}

#[test]
fn detail_panel_shows_title_tags_and_description() {
    let mut rich = RichText::from_plain("hello world");
    rich.apply(Selection::new(0, 5), FormatOp::Bold(true));
    let task = Task::new(
        "Greet",
        rich.to_markup(),
        vec![Tag::new("home", HexColor::new(0x25, 0x63, 0xeb))],
    );

    let area = Rect::new(0, 0, 50, 10);
    let mut buf = Buffer::empty(area);
    render_detail_panel(Some(&task), area, &mut buf);

    let content = buffer_to_string(&buf);
    assert!(content.contains("Greet"));
    assert!(content.contains("home"));
    assert!(content.contains("hello world"));

    // The bold run keeps its modifier through rendering
    let cell = buf.cell((1, 4)).expect("description cell");
    assert!(cell.modifier.contains(Modifier::BOLD));
}

#[test]
fn detail_panel_notes_a_missing_description() {
    let task = Task::new("Bare", String::new(), Vec::new());
    let area = Rect::new(0, 0, 50, 10);
    let mut buf = Buffer::empty(area);
    render_detail_panel(Some(&task), area, &mut buf);

    assert!(buffer_to_string(&buf).contains("No description"));
}

#[test]
fn editor_renders_draft_fields_and_toolbar() {
    let task = tagged_task("Buy milk");
    let editor = EditorState::for_task(0, &task);

    let area = Rect::new(0, 0, 80, 24);
    let mut buf = Buffer::empty(area);
    render_editor(&editor, area, &mut buf);

    let content = buffer_to_string(&buf);
    assert!(content.contains("Edit task"));
    assert!(content.contains("Title: Buy milk"));
    assert!(content.contains("[B] [I] [U]"));
    assert!(content.contains("urgent"));
    assert!(content.contains("Ctrl+S"));
}

#[test]
fn editor_heading_differs_for_new_drafts() {
    let editor = EditorState::for_new();

    let area = Rect::new(0, 0, 80, 24);
    let mut buf = Buffer::empty(area);
    render_editor(&editor, area, &mut buf);

    assert!(buffer_to_string(&buf).contains("New task"));
}

#[test]
fn tag_name_prompt_shows_the_typed_name() {
    let line = InputLine::with_value("urgent");

    let area = Rect::new(0, 0, 60, 12);
    let mut buf = Buffer::empty(area);
    render_tag_name_prompt(&line, area, &mut buf);

    let content = buffer_to_string(&buf);
    assert!(content.contains("New tag"));
    assert!(content.contains("Name: urgent"));
    assert!(content.contains("Enter"));
}

#[test]
fn color_prompt_shows_the_selected_hex() {
    let mut picker = ColorPicker::default();
    picker.next();

    let area = Rect::new(0, 0, 60, 12);
    let mut buf = Buffer::empty(area);
    render_color_prompt(" Tag color ", &picker, area, &mut buf);

    let content = buffer_to_string(&buf);
    assert!(content.contains("Tag color"));
    assert!(content.contains(&PALETTE[1].to_string()));
}

#[test]
fn status_bar_lists_the_hints() {
    let area = Rect::new(0, 0, 60, 1);
    let mut buf = Buffer::empty(area);
    render_status_bar(super::LIST_HINTS, area, &mut buf);

    let content = buffer_to_string(&buf);
    assert!(content.contains("add"));
    assert!(content.contains("delete"));
    assert!(content.contains("Ctrl+C"));
}
