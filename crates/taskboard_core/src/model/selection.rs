//! Session-only bulk selection.
//!
//! # Invariants
//! - Keys are a subset of task ids that currently exist on the board; the
//!   engine drops keys whenever it deletes tasks.
//! - Values are replaced wholesale; every update returns a new `Selection`.

use super::task::{TaskId, TaskIds};
use std::collections::BTreeMap;

/// Mapping from task id to "selected" flag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    entries: BTreeMap<TaskId, bool>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with every id in `ids` set to `value`.
    pub fn with(&self, ids: &TaskIds, value: bool) -> Self {
        let mut entries = self.entries.clone();
        for id in ids.iter() {
            entries.insert(id.to_string(), value);
        }
        Self { entries }
    }

    /// Returns a copy without the listed ids.
    pub fn without<'a>(&self, ids: impl IntoIterator<Item = &'a str>) -> Self {
        let mut entries = self.entries.clone();
        for id in ids {
            entries.remove(id);
        }
        Self { entries }
    }

    /// Selection after `deleteTask(ids)`.
    ///
    /// Batch deletes drop only the listed ids; a single-id delete clears the
    /// whole map. Callers deleting one card from its own menu rely on the
    /// latter to reset the toolbar.
    pub fn after_delete(&self, ids: &TaskIds) -> Self {
        match ids {
            TaskIds::One(_) => Self::new(),
            TaskIds::Many(_) => self.without(ids.iter()),
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.entries.get(id).copied().unwrap_or(false)
    }

    /// Raw flag for `id`, including explicit `false` entries.
    pub fn get(&self, id: &str) -> Option<bool> {
        self.entries.get(id).copied()
    }

    /// Ids flagged `true`, in key order.
    pub fn selected_ids(&self) -> Vec<TaskId> {
        self.entries
            .iter()
            .filter(|(_, selected)| **selected)
            .map(|(id, _)| id.clone())
            .collect()
    }

    pub fn has_selected(&self) -> bool {
        self.entries.values().any(|selected| *selected)
    }

    /// Number of keys, selected or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(id, selected)| (id.as_str(), *selected))
    }
}
