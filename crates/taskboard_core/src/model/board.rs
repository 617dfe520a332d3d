//! Board root aggregate.
//!
//! # Invariants
//! - `columns` order is display order.
//! - Every task id appears in at most one column.
//! - Held behind `Arc<Board>` by the engine; a transition that changes
//!   nothing hands back the same `Arc`.

use super::column::Column;
use super::task::Task;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Location of a task as `(column_index, task_index)`.
pub type TaskLocation = (usize, usize);

/// Root aggregate persisted by board stores.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    #[serde(default)]
    pub columns: Vec<Arc<Column>>,
}

impl Board {
    /// Board with no columns, used when storage holds nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_columns(columns: Vec<Column>) -> Self {
        Self {
            columns: columns.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn column_index(&self, column_id: &str) -> Option<usize> {
        self.columns.iter().position(|column| column.id == column_id)
    }

    pub fn column(&self, column_id: &str) -> Option<&Arc<Column>> {
        self.columns.iter().find(|column| column.id == column_id)
    }

    /// Finds a task by scanning columns in order.
    pub fn locate_task(&self, task_id: &str) -> Option<TaskLocation> {
        self.columns
            .iter()
            .enumerate()
            .find_map(|(column_index, column)| {
                column
                    .position_of(task_id)
                    .map(|task_index| (column_index, task_index))
            })
    }

    pub fn task(&self, task_id: &str) -> Option<&Arc<Task>> {
        self.locate_task(task_id)
            .map(|(column_index, task_index)| &self.columns[column_index].items[task_index])
    }

    /// All task ids in column order, then item order.
    pub fn task_ids(&self) -> Vec<&str> {
        self.columns
            .iter()
            .flat_map(|column| column.task_ids())
            .collect()
    }

    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|column| column.items.len()).sum()
    }

    pub fn column_ids(&self) -> Vec<&str> {
        self.columns.iter().map(|column| column.id.as_str()).collect()
    }
}
