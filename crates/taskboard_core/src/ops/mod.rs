//! Pure board transitions.
//!
//! # Responsibility
//! - Compute the next `Arc<Board>` for each engine action.
//! - Own the index arithmetic for drag reordering.
//!
//! # Invariants
//! - Inputs are never mutated; untouched columns keep their `Arc` identity.
//! - When nothing changes, the input `Arc<Board>` itself is returned.
//! - Task ids are conserved by every move: nothing duplicated, nothing lost.

pub mod columns;
pub mod reorder;
pub mod tasks;
