//! Session-only view filter.
//!
//! # Invariants
//! - `None` means "no constraint", never "false".
//! - Filters shape the displayed projection only, never the stored board.

use super::task::Task;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Known filter keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKey {
    /// Task completion state.
    Status,
}

impl FilterKey {
    pub const ALL: [FilterKey; 1] = [FilterKey::Status];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Status => "status",
        }
    }
}

impl Display for FilterKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKey {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "status" => Ok(Self::Status),
            other => Err(format!("unknown filter key `{other}`")),
        }
    }
}

/// Current filter constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Filter {
    /// Required `Task::completed` value when set.
    pub status: Option<bool>,
}

impl Filter {
    pub fn get(&self, key: FilterKey) -> Option<bool> {
        match key {
            FilterKey::Status => self.status,
        }
    }

    /// Returns a copy with `key` set to `value`.
    pub fn with(self, key: FilterKey, value: Option<bool>) -> Self {
        match key {
            FilterKey::Status => Self { status: value },
        }
    }

    /// Number of keys currently carrying a constraint.
    pub fn active_count(&self) -> usize {
        FilterKey::ALL
            .iter()
            .filter(|key| self.get(**key).is_some())
            .count()
    }

    pub fn is_unconstrained(&self) -> bool {
        self.active_count() == 0
    }

    /// Whether `task` is visible under this filter.
    pub fn admits(&self, task: &Task) -> bool {
        self.status.map_or(true, |status| task.completed == status)
    }
}

#[cfg(test)]
mod tests {
    use super::{Filter, FilterKey};
    use crate::model::task::Task;

    #[test]
    fn unset_status_admits_everything() {
        let filter = Filter::default();
        let done = Task::with_id("t1", "a", "", 0).with_completed(true);
        let open = Task::with_id("t2", "b", "", 0);
        assert!(filter.admits(&done));
        assert!(filter.admits(&open));
        assert_eq!(filter.active_count(), 0);
    }

    #[test]
    fn false_status_is_a_real_constraint() {
        let filter = Filter::default().with(FilterKey::Status, Some(false));
        let done = Task::with_id("t1", "a", "", 0).with_completed(true);
        assert!(!filter.admits(&done));
        assert_eq!(filter.active_count(), 1);

        let cleared = filter.with(FilterKey::Status, None);
        assert!(cleared.is_unconstrained());
    }

    #[test]
    fn filter_key_parses_status() {
        assert_eq!("status".parse::<FilterKey>(), Ok(FilterKey::Status));
        assert!("priority".parse::<FilterKey>().is_err());
    }
}
