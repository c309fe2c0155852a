//! The ordered task list and its selection state.

use crate::error::{ModelError, Result};
use crate::task::Task;

/// The collection of tasks, in insertion order, plus the two pieces of
/// row-level state the UI acts on: which row is selected for display and
/// which row, if any, currently shows its delete affordance.
///
/// Index-based operations return [`ModelError::OutOfRange`] when handed a
/// dead index. The UI derives its indices from this same list, so an
/// out-of-range error is a desync bug, not a user mistake.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    selected: Option<usize>,
    pending_delete: Option<usize>,
}

impl TaskList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the list holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// The task at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// Index of the selected row, if any.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The selected task, if any.
    #[must_use]
    pub fn selected_task(&self) -> Option<&Task> {
        self.selected.and_then(|index| self.tasks.get(index))
    }

    /// Index of the row whose delete affordance is showing, if any.
    #[must_use]
    pub fn pending_delete(&self) -> Option<usize> {
        self.pending_delete
    }

    /// Appends a task and returns its row index.
    pub fn push(&mut self, task: Task) -> usize {
        self.tasks.push(task);
        self.tasks.len() - 1
    }

    /// Replaces the task at `index` wholesale.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::OutOfRange`] when `index` is not a live row.
    pub fn replace(&mut self, index: usize, task: Task) -> Result<()> {
        let len = self.tasks.len();
        let slot = self
            .tasks
            .get_mut(index)
            .ok_or(ModelError::OutOfRange { index, len })?;
        *slot = task;
        Ok(())
    }

    /// Selects the row at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::OutOfRange`] when `index` is not a live row.
    pub fn select(&mut self, index: usize) -> Result<()> {
        if index >= self.tasks.len() {
            return Err(ModelError::OutOfRange {
                index,
                len: self.tasks.len(),
            });
        }
        self.selected = Some(index);
        Ok(())
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Moves the selection down one row, wrapping at the bottom. With no
    /// current selection the first row is selected. No-op on an empty
    /// list.
    pub fn select_next(&mut self) {
        if self.tasks.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(index) => (index + 1) % self.tasks.len(),
            None => 0,
        });
    }

    /// Moves the selection up one row, wrapping at the top. With no
    /// current selection the last row is selected. No-op on an empty
    /// list.
    pub fn select_previous(&mut self) {
        if self.tasks.is_empty() {
            return;
        }
        let len = self.tasks.len();
        self.selected = Some(match self.selected {
            Some(index) => (index + len - 1) % len,
            None => len - 1,
        });
    }

    /// Arms the delete affordance on the row at `index`. At most one row
    /// shows it at a time; arming a new row disarms the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::OutOfRange`] when `index` is not a live row.
    pub fn request_delete(&mut self, index: usize) -> Result<()> {
        if index >= self.tasks.len() {
            return Err(ModelError::OutOfRange {
                index,
                len: self.tasks.len(),
            });
        }
        self.pending_delete = Some(index);
        Ok(())
    }

    /// Disarms the delete affordance.
    pub fn clear_pending_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Removes the row whose delete affordance is armed and returns the
    /// removed task, or `None` when nothing is armed.
    ///
    /// Exactly one task is removed. The selection is cleared when it
    /// pointed at the removed row and shifted down one when it pointed
    /// below it; rows above are untouched.
    pub fn confirm_delete(&mut self) -> Option<Task> {
        let index = self.pending_delete.take()?;
        if index >= self.tasks.len() {
            return None;
        }
        let removed = self.tasks.remove(index);

        self.selected = match self.selected {
            Some(sel) if sel == index => None,
            Some(sel) if sel > index => Some(sel - 1),
            other => other,
        };
        Some(removed)
    }
}
