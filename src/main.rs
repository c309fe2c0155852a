//! delo - A keyboard-driven to-do list for the terminal.
//!
//! This is the main binary that launches the TUI application.

use delo_model::TaskList;
use delo_tui::{App, terminal};

fn main() -> anyhow::Result<()> {
    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();

    // Setup terminal
    let mut terminal = terminal::setup_terminal()?;

    // Start with an empty list
    let mut app = App::new(TaskList::new());

    // Run the main loop
    let result = app.run(&mut terminal);

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    result
}
