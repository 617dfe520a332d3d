//! Task domain model.
//!
//! # Responsibility
//! - Define the atomic unit of work tracked by the board.
//! - Provide the id-or-ids argument shape used by bulk task actions.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `created_at` is set once on creation and never rewritten by the engine.

use super::{new_id, now_epoch_ms};
use serde::{Deserialize, Serialize};

/// Opaque task identifier.
///
/// Persisted ids are kept verbatim; only freshly created tasks get UUID text.
pub type TaskId = String;

/// One task card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    /// Free-form description. Missing in older payloads, read as empty.
    #[serde(default)]
    pub context: String,
    #[serde(default)]
    pub completed: bool,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

impl Task {
    /// Creates an incomplete task with a generated id and current timestamp.
    pub fn new(name: impl Into<String>, context: impl Into<String>) -> Self {
        Self::with_id(new_id(), name, context, now_epoch_ms())
    }

    /// Creates an incomplete task with caller-provided identity.
    ///
    /// Used by tests and import paths where ids already exist.
    pub fn with_id(
        id: impl Into<TaskId>,
        name: impl Into<String>,
        context: impl Into<String>,
        created_at: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            context: context.into(),
            completed: false,
            created_at,
        }
    }

    /// Returns a copy with `completed` replaced.
    pub fn with_completed(&self, completed: bool) -> Self {
        Self {
            completed,
            ..self.clone()
        }
    }
}

/// Input for creating a task: a name and an optional context.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewTask {
    pub name: String,
    pub context: Option<String>,
}

impl NewTask {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            context: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Materializes the task with a fresh id; absent context becomes `""`.
    pub fn into_task(self) -> Task {
        Task::new(self.name, self.context.unwrap_or_default())
    }
}

/// One task id or a batch of them.
///
/// Several actions treat the two forms differently for selection
/// bookkeeping, so the distinction is kept rather than normalizing to a
/// `Vec`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskIds {
    One(TaskId),
    Many(Vec<TaskId>),
}

impl TaskIds {
    pub fn contains(&self, id: &str) -> bool {
        match self {
            Self::One(one) => one == id,
            Self::Many(many) => many.iter().any(|candidate| candidate == id),
        }
    }

    /// Whether the ids arrived in batch form.
    pub fn is_many(&self) -> bool {
        matches!(self, Self::Many(_))
    }

    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(many) => many.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let ids: &[TaskId] = match self {
            Self::One(one) => std::slice::from_ref(one),
            Self::Many(many) => many.as_slice(),
        };
        ids.iter().map(String::as_str)
    }
}

impl From<&str> for TaskIds {
    fn from(value: &str) -> Self {
        Self::One(value.to_string())
    }
}

impl From<String> for TaskIds {
    fn from(value: String) -> Self {
        Self::One(value)
    }
}

impl From<Vec<TaskId>> for TaskIds {
    fn from(value: Vec<TaskId>) -> Self {
        Self::Many(value)
    }
}

impl From<Vec<&str>> for TaskIds {
    fn from(value: Vec<&str>) -> Self {
        Self::Many(value.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for TaskIds {
    fn from(value: &[&str]) -> Self {
        Self::Many(value.iter().map(|id| (*id).to_string()).collect())
    }
}
