//! Main application struct and run loop.
//!
//! This module provides the `App` struct which orchestrates the TUI
//! application lifecycle including event handling, state updates, and
//! rendering. Input is routed by mode: an open prompt sees messages
//! first, then an open editor, then the task list.

use crossterm::event::Event;
use delo_model::{Message, TaskList};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::{
    editor::{EditorState, PromptState},
    event::{event_to_message, key_to_editor_message, key_to_prompt_message, poll_event},
    layout::{
        HEADER_HEIGHT, LIST_PANEL_PERCENT, MIN_HEIGHT, MIN_HEIGHT_WITH_HEADER, MIN_WIDTH,
        STATUS_BAR_HEIGHT,
    },
    terminal::AppTerminal,
    widgets::{
        EDITOR_HINTS, LIST_HINTS, PROMPT_HINTS, list_row_at, render_color_prompt,
        render_detail_panel, render_editor, render_tag_name_prompt, render_status_bar,
        render_task_list,
    },
};

/// The main application struct.
///
/// Manages the task list and the optional editor overlay, and provides
/// the main event loop.
#[derive(Debug)]
pub struct App {
    list: TaskList,
    /// The editor overlay, if open.
    editor: Option<EditorState>,
    should_quit: bool,
    /// Last known terminal area, used for overlay placement.
    last_area: Rect,
    /// Last rendered list panel area, used for click hit-testing.
    list_area: Rect,
    /// Whether the header was shown in the last render.
    header_visible: bool,
}

impl App {
    /// Creates a new application over the given task list.
    ///
    /// # Examples
    ///
    /// ```
    /// use delo_model::TaskList;
    /// use delo_tui::App;
    ///
    /// let app = App::new(TaskList::new());
    /// assert!(app.list().is_empty());
    /// ```
    #[must_use]
    pub fn new(list: TaskList) -> Self {
        Self {
            list,
            editor: None,
            should_quit: false,
            last_area: Rect::default(),
            list_area: Rect::default(),
            header_visible: true,
        }
    }

    /// Returns a reference to the task list.
    #[must_use]
    pub fn list(&self) -> &TaskList {
        &self.list
    }

    /// Returns the open editor, if any.
    #[must_use]
    pub fn editor(&self) -> Option<&EditorState> {
        self.editor.as_ref()
    }

    /// Returns whether the editor overlay is open.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.editor.is_some()
    }

    /// Updates the application state based on a message.
    ///
    /// Messages are routed by mode: while a prompt is open only prompt
    /// messages act, while the editor is open only editor messages act,
    /// and otherwise the list handles its own. `Quit` works everywhere.
    pub fn update(&mut self, msg: Message) {
        if let Some(editor) = &mut self.editor {
            if editor.is_prompting() {
                match msg {
                    Message::Quit => self.should_quit = true,
                    Message::PromptInput { ch } => editor.prompt_input(ch),
                    Message::PromptBackspace => editor.prompt_backspace(),
                    Message::PromptLeft => editor.prompt_left(),
                    Message::PromptRight => editor.prompt_right(),
                    Message::PromptConfirm => editor.prompt_confirm(),
                    Message::PromptCancel => editor.prompt_cancel(),
                    _ => {}
                }
                return;
            }

            match msg {
                Message::Quit => self.should_quit = true,
                Message::EditorCancel => {
                    // Discard the draft wholesale
                    self.editor = None;
                }
                Message::EditorConfirm => self.commit_draft(),
                Message::EditorInput { ch } => editor.input_char(ch),
                Message::EditorNewline => editor.newline(),
                Message::EditorBackspace => editor.backspace(),
                Message::EditorLeft { select } => editor.move_left(select),
                Message::EditorRight { select } => editor.move_right(select),
                Message::EditorHome { select } => editor.move_home(select),
                Message::EditorEnd { select } => editor.move_end(select),
                Message::EditorUp => editor.move_up(),
                Message::EditorDown => editor.move_down(),
                Message::EditorNextField => editor.next_field(),
                Message::EditorBold => editor.toggle_bold(),
                Message::EditorItalic => editor.toggle_italic(),
                Message::EditorUnderline => editor.toggle_underline(),
                Message::EditorPickColor => editor.pick_color(),
                Message::EditorAddTag => editor.add_tag(),
                _ => {}
            }
            return;
        }

        match msg {
            Message::Quit => self.should_quit = true,
            Message::Escape => {
                if self.list.pending_delete().is_some() {
                    self.list.clear_pending_delete();
                } else {
                    self.list.clear_selection();
                }
            }
            Message::NavigateUp => self.list.select_previous(),
            Message::NavigateDown => self.list.select_next(),
            Message::AddTask => self.editor = Some(EditorState::for_new()),
            Message::EditSelected => {
                if let Some(index) = self.list.selected() {
                    let task = self
                        .list
                        .get(index)
                        .expect("selected index is a live row");
                    self.editor = Some(EditorState::for_task(index, task));
                }
            }
            Message::RequestDelete => {
                if let Some(index) = self.list.selected() {
                    self.list
                        .request_delete(index)
                        .expect("selected index is a live row");
                }
            }
            Message::ConfirmDelete => {
                let _ = self.list.confirm_delete();
            }
            Message::ClickAt { column, row } => self.handle_click(column, row),
            Message::RightClickAt { column, row } => self.handle_right_click(column, row),
            // Editor and prompt messages are handled above when open
            _ => {}
        }
    }

    /// Commits the editor draft to the list and closes the editor.
    ///
    /// Every confirmed draft commits; an empty title, description, or
    /// tag list is a valid task, not a validation failure.
    fn commit_draft(&mut self) {
        let Some(editor) = &self.editor else {
            return;
        };
        let task = editor.finish();
        match editor.target() {
            Some(index) => {
                self.list
                    .replace(index, task)
                    .expect("editor target is a live row");
            }
            None => {
                let row = self.list.push(task);
                self.list.select(row).expect("freshly pushed row exists");
            }
        }
        self.editor = None;
    }

    /// Handles a left click at the given coordinates.
    ///
    /// A click on a task row selects it; a click on the row whose delete
    /// affordance is armed deletes it instead, mirroring a click on the
    /// delete button. Clicks elsewhere disarm the affordance.
    fn handle_click(&mut self, column: u16, row: u16) {
        let index = list_row_at(self.list_area, column, row).filter(|i| *i < self.list.len());
        match index {
            Some(index) if self.list.pending_delete() == Some(index) => {
                let _ = self.list.confirm_delete();
            }
            Some(index) => {
                self.list.clear_pending_delete();
                self.list.select(index).expect("clicked index is a live row");
            }
            None => self.list.clear_pending_delete(),
        }
    }

    /// Handles a right click at the given coordinates.
    ///
    /// A right click on a task row arms its delete affordance; anywhere
    /// else disarms it.
    fn handle_right_click(&mut self, column: u16, row: u16) {
        let index = list_row_at(self.list_area, column, row).filter(|i| *i < self.list.len());
        match index {
            Some(index) => {
                self.list
                    .request_delete(index)
                    .expect("clicked index is a live row");
            }
            None => self.list.clear_pending_delete(),
        }
    }

    /// Renders the application UI to the given frame.
    ///
    /// Implements graceful degradation for small terminal sizes:
    /// - Below minimum dimensions, shows a "terminal too small" message.
    /// - Tight terminals (below `MIN_HEIGHT_WITH_HEADER`) hide the
    ///   header to reclaim rows.
    /// - Otherwise, renders the header, both panels, and the status bar,
    ///   with the editor and prompt overlays on top.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.last_area = area;

        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            self.header_visible = false;
            self.list_area = Rect::default();
            self.render_terminal_too_small(frame, area);
            return;
        }

        let show_header = area.height >= MIN_HEIGHT_WITH_HEADER;
        self.header_visible = show_header;

        let content_area = if show_header {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(HEADER_HEIGHT),
                    Constraint::Min(0),
                    Constraint::Length(STATUS_BAR_HEIGHT),
                ])
                .split(area);

            self.render_header(frame, chunks[0]);
            self.render_status(frame, chunks[2]);
            chunks[1]
        } else {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(STATUS_BAR_HEIGHT)])
                .split(area);

            self.render_status(frame, chunks[1]);
            chunks[0]
        };

        let panels = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(LIST_PANEL_PERCENT),
                Constraint::Percentage(100 - LIST_PANEL_PERCENT),
            ])
            .split(content_area);
        self.list_area = panels[0];

        let buf = frame.buffer_mut();
        render_task_list(&self.list, panels[0], buf);
        render_detail_panel(self.list.selected_task(), panels[1], buf);

        if let Some(editor) = &self.editor {
            render_editor(editor, area, buf);
            match editor.prompt() {
                Some(PromptState::TagName(line)) => render_tag_name_prompt(line, area, buf),
                Some(PromptState::TagColor { picker, .. }) => {
                    render_color_prompt(" Tag color ", picker, area, buf);
                }
                Some(PromptState::TextColor { picker }) => {
                    render_color_prompt(" Text color ", picker, area, buf);
                }
                None => {}
            }
        }
    }

    /// Renders a message indicating the terminal is too small.
    fn render_terminal_too_small(&self, frame: &mut Frame, area: Rect) {
        let message = format!(
            "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );

        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .wrap(ratatui::widgets::Wrap { trim: false });

        let vertical_offset = area.height.saturating_sub(2) / 2;
        let centered_area = Rect {
            x: area.x,
            y: area.y + vertical_offset,
            width: area.width,
            height: area.height.saturating_sub(vertical_offset),
        };

        frame.render_widget(paragraph, centered_area);
    }

    /// Renders the header bar with the application title.
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                "delo",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled("To-Do List", Style::default().fg(Color::White)),
        ]));
        frame.render_widget(title, inner);
    }

    /// Renders the status bar with the hints for the current mode.
    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let hints = match &self.editor {
            Some(editor) if editor.is_prompting() => PROMPT_HINTS,
            Some(_) => EDITOR_HINTS,
            None => LIST_HINTS,
        };
        render_status_bar(hints, area, frame.buffer_mut());
    }

    /// Runs the main application loop.
    ///
    /// This function blocks until the user quits the application.
    /// It polls for events, updates state, and renders the UI.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    pub fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        loop {
            terminal.draw(|frame| self.view(frame))?;

            if let Some(event) = poll_event()? {
                let msg = match &self.editor {
                    Some(editor) if editor.is_prompting() => {
                        if let Event::Key(key) = event {
                            let text_input =
                                matches!(editor.prompt(), Some(PromptState::TagName(_)));
                            key_to_prompt_message(key, text_input)
                        } else {
                            None
                        }
                    }
                    Some(_) => {
                        if let Event::Key(key) = event {
                            key_to_editor_message(key)
                        } else {
                            None
                        }
                    }
                    None => event_to_message(&event),
                };

                if let Some(msg) = msg {
                    self.update(msg);
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }
}
