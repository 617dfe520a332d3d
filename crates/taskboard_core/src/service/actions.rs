//! Closed action surface of the board engine.

use crate::model::column::{Column, ColumnId};
use crate::model::edge::{ColumnEdge, TaskEdge};
use crate::model::filter::FilterKey;
use crate::model::task::{NewTask, Task, TaskId, TaskIds};

/// One method per engine action.
///
/// Unknown ids never fail: the action is a silent no-op and the board keeps
/// its identity.
pub trait BoardActions {
    /// Appends an empty column and returns its id.
    fn add_column(&mut self, name: &str) -> ColumnId;
    /// Replaces a column verbatim.
    fn update_column(&mut self, column: Column);
    /// Removes a column and every task in it.
    fn delete_column(&mut self, column_id: &str);
    fn move_column(&mut self, column_id: &str, target_column_id: &str, edge: ColumnEdge);
    /// Appends a task; returns its id, or `None` when the column is unknown.
    fn add_task(&mut self, column_id: &str, task: NewTask) -> Option<TaskId>;
    fn update_task(&mut self, task: Task);
    /// Removes tasks. A single id clears the whole selection; a batch only
    /// drops the listed ids from it.
    fn delete_task(&mut self, ids: TaskIds);
    fn change_status_task(&mut self, ids: TaskIds, value: bool);
    /// Moves tasks to the end of a column. A batch also clears the selection.
    fn move_task_to_column(&mut self, ids: TaskIds, column_id: &str);
    fn move_task(&mut self, task_id: &str, target_task_id: &str, edge: TaskEdge);
    fn select_item(&mut self, ids: TaskIds, value: bool);
    fn change_filter(&mut self, key: FilterKey, value: Option<bool>);
    fn change_search(&mut self, value: &str);
}

/// Owned form of a [`BoardActions`] call, for queued or translated input
/// such as drops and CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddColumn {
        name: String,
    },
    UpdateColumn {
        column: Column,
    },
    DeleteColumn {
        column_id: ColumnId,
    },
    MoveColumn {
        column_id: ColumnId,
        target_column_id: ColumnId,
        edge: ColumnEdge,
    },
    AddTask {
        column_id: ColumnId,
        task: NewTask,
    },
    UpdateTask {
        task: Task,
    },
    DeleteTask {
        ids: TaskIds,
    },
    ChangeStatusTask {
        ids: TaskIds,
        value: bool,
    },
    MoveTaskToColumn {
        ids: TaskIds,
        column_id: ColumnId,
    },
    MoveTask {
        task_id: TaskId,
        target_task_id: TaskId,
        edge: TaskEdge,
    },
    SelectItem {
        ids: TaskIds,
        value: bool,
    },
    ChangeFilter {
        key: FilterKey,
        value: Option<bool>,
    },
    ChangeSearch {
        value: String,
    },
}

impl Action {
    /// Stable label used in log events.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddColumn { .. } => "add_column",
            Self::UpdateColumn { .. } => "update_column",
            Self::DeleteColumn { .. } => "delete_column",
            Self::MoveColumn { .. } => "move_column",
            Self::AddTask { .. } => "add_task",
            Self::UpdateTask { .. } => "update_task",
            Self::DeleteTask { .. } => "delete_task",
            Self::ChangeStatusTask { .. } => "change_status_task",
            Self::MoveTaskToColumn { .. } => "move_task_to_column",
            Self::MoveTask { .. } => "move_task",
            Self::SelectItem { .. } => "select_item",
            Self::ChangeFilter { .. } => "change_filter",
            Self::ChangeSearch { .. } => "change_search",
        }
    }

    /// Applies this action through any [`BoardActions`] implementation.
    ///
    /// Returns the id of the created column or task, if any.
    pub fn apply_to(self, target: &mut impl BoardActions) -> Option<String> {
        match self {
            Self::AddColumn { name } => Some(target.add_column(&name)),
            Self::UpdateColumn { column } => {
                target.update_column(column);
                None
            }
            Self::DeleteColumn { column_id } => {
                target.delete_column(&column_id);
                None
            }
            Self::MoveColumn {
                column_id,
                target_column_id,
                edge,
            } => {
                target.move_column(&column_id, &target_column_id, edge);
                None
            }
            Self::AddTask { column_id, task } => target.add_task(&column_id, task),
            Self::UpdateTask { task } => {
                target.update_task(task);
                None
            }
            Self::DeleteTask { ids } => {
                target.delete_task(ids);
                None
            }
            Self::ChangeStatusTask { ids, value } => {
                target.change_status_task(ids, value);
                None
            }
            Self::MoveTaskToColumn { ids, column_id } => {
                target.move_task_to_column(ids, &column_id);
                None
            }
            Self::MoveTask {
                task_id,
                target_task_id,
                edge,
            } => {
                target.move_task(&task_id, &target_task_id, edge);
                None
            }
            Self::SelectItem { ids, value } => {
                target.select_item(ids, value);
                None
            }
            Self::ChangeFilter { key, value } => {
                target.change_filter(key, value);
                None
            }
            Self::ChangeSearch { value } => {
                target.change_search(&value);
                None
            }
        }
    }
}
