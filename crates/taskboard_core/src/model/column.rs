//! Column domain model.

use super::task::Task;
use super::{new_id, now_epoch_ms};
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;

/// Opaque column identifier.
pub type ColumnId = String;

/// Ordered container of tasks.
///
/// `items` order is display order. Tasks are shared behind `Arc` so that a
/// transition touching one card does not re-allocate its neighbours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: ColumnId,
    pub name: String,
    #[serde(default, deserialize_with = "items_or_empty")]
    pub items: Vec<Arc<Task>>,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

impl Column {
    /// Creates an empty column with a generated id and current timestamp.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(new_id(), name, now_epoch_ms())
    }

    /// Creates an empty column with caller-provided identity.
    pub fn with_id(id: impl Into<ColumnId>, name: impl Into<String>, created_at: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            items: Vec::new(),
            created_at,
        }
    }

    /// Returns a copy of this column holding `items` instead.
    pub fn with_items(&self, items: Vec<Arc<Task>>) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            items,
            created_at: self.created_at,
        }
    }

    /// Index of `task_id` inside this column.
    pub fn position_of(&self, task_id: &str) -> Option<usize> {
        self.items.iter().position(|task| task.id == task_id)
    }

    pub fn task_ids(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|task| task.id.as_str())
    }
}

// Older payloads store `items` as optional; both absence and `null` mean empty.
fn items_or_empty<'de, D>(deserializer: D) -> Result<Vec<Arc<Task>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Arc<Task>>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::Column;
    use crate::model::task::Task;
    use std::sync::Arc;

    #[test]
    fn null_items_deserialize_as_empty() {
        let column: Column =
            serde_json::from_str(r#"{"id":"c1","name":"Todo","items":null,"createdAt":1}"#)
                .expect("null items should be accepted");
        assert!(column.items.is_empty());

        let column: Column = serde_json::from_str(r#"{"id":"c1","name":"Todo","createdAt":1}"#)
            .expect("missing items should be accepted");
        assert!(column.items.is_empty());
    }

    #[test]
    fn position_of_finds_task() {
        let column = Column::with_id("c1", "Todo", 0).with_items(vec![
            Arc::new(Task::with_id("t1", "a", "", 0)),
            Arc::new(Task::with_id("t2", "b", "", 0)),
        ]);
        assert_eq!(column.position_of("t2"), Some(1));
        assert_eq!(column.position_of("t9"), None);
    }
}
