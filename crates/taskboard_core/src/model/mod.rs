//! Board domain model.
//!
//! # Responsibility
//! - Define the value types the board engine transitions between.
//! - Keep persisted shape (`Board`) apart from session-only state
//!   (`Selection`, `Filter`).
//!
//! # Invariants
//! - Task and column ids are unique for the lifetime of a session.
//! - A task is owned by exactly one column.
//! - `Board` values are never mutated after being shared; transitions build
//!   new values and reuse untouched `Arc` children.

pub mod board;
pub mod column;
pub mod edge;
pub mod filter;
pub mod name;
pub mod selection;
pub mod task;

use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Generates a fresh opaque id for a column or task.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Current wall clock as Unix epoch milliseconds.
///
/// Clocks before the epoch collapse to `0`.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
