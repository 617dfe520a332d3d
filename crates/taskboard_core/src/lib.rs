//! Client-side task board state engine.
//! This crate is the single source of truth for board invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod ops;
pub mod repo;
pub mod service;
pub mod view;

pub use config::{BoardConfig, ConfigError, StoreKind};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::board::Board;
pub use model::column::{Column, ColumnId};
pub use model::edge::{ColumnEdge, DropEdge, TaskEdge};
pub use model::filter::{Filter, FilterKey};
pub use model::name::{normalize_name, NameValidationError};
pub use model::selection::Selection;
pub use model::task::{NewTask, Task, TaskId, TaskIds};
pub use repo::json_file_store::JsonFileBoardStore;
pub use repo::memory_store::MemoryBoardStore;
pub use repo::sqlite_store::SqliteBoardStore;
pub use repo::{BoardStore, StoreError, StoreResult};
pub use service::actions::{Action, BoardActions};
pub use service::confirm::{AlwaysConfirm, Confirm, NeverConfirm};
pub use service::drop::{DragSource, DropEvent};
pub use service::engine::{BoardEngine, Dispatched};
pub use service::session::SessionContext;
pub use view::highlight::{highlight, task_matches, Segment};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
