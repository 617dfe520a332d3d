//! Board engine and its collaborators.
//!
//! # Responsibility
//! - Apply actions to the session state and persist committed boards.
//! - Translate drop reports and guard deletes behind confirmation.
//! - Keep UI and CLI layers decoupled from transitions and storage.

pub mod actions;
pub mod confirm;
pub mod drop;
pub mod engine;
pub mod session;
