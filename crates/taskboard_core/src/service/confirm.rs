//! Confirmation boundary for destructive actions.
//!
//! Deletes reachable from user input go through a [`Confirm`] collaborator
//! and only run when it answers `true`.

use super::actions::BoardActions;
use super::engine::BoardEngine;
use crate::model::task::TaskIds;
use crate::repo::BoardStore;
use log::info;

pub const DELETE_COLUMN_MESSAGE: &str = "Delete this column?";
pub const DELETE_TASK_MESSAGE: &str = "Delete this task?";
pub const DELETE_SELECTED_MESSAGE: &str = "Delete selected tasks?";

/// Yes/no prompt shown before a delete.
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

/// Answers yes to everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&self, _message: &str) -> bool {
        true
    }
}

/// Answers no to everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverConfirm;

impl Confirm for NeverConfirm {
    fn confirm(&self, _message: &str) -> bool {
        false
    }
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

impl<S: BoardStore> BoardEngine<S> {
    /// Deletes a column after confirmation. Returns whether it ran.
    pub fn confirm_delete_column(&mut self, confirm: &impl Confirm, column_id: &str) -> bool {
        if !ask(confirm, "delete_column", DELETE_COLUMN_MESSAGE) {
            return false;
        }
        self.delete_column(column_id);
        true
    }

    /// Deletes one task after confirmation. Returns whether it ran.
    pub fn confirm_delete_task(&mut self, confirm: &impl Confirm, task_id: &str) -> bool {
        if !ask(confirm, "delete_task", DELETE_TASK_MESSAGE) {
            return false;
        }
        self.delete_task(TaskIds::One(task_id.to_string()));
        true
    }

    /// Deletes every selected task as a batch after confirmation.
    ///
    /// An empty selection is a no-op and does not prompt.
    pub fn delete_selected(&mut self, confirm: &impl Confirm) -> bool {
        let selected = self.selected_ids();
        if selected.is_empty() {
            return false;
        }
        if !ask(confirm, "delete_selected", DELETE_SELECTED_MESSAGE) {
            return false;
        }
        self.delete_task(TaskIds::Many(selected));
        true
    }
}

fn ask(confirm: &impl Confirm, action: &str, message: &str) -> bool {
    let accepted = confirm.confirm(message);
    if !accepted {
        info!("event=confirm module=engine action={action} status=declined");
    }
    accepted
}
