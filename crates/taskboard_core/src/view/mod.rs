//! Derived, read-only projections of the board.
//!
//! # Responsibility
//! - Compute what the UI displays from `(Board, Filter, search)`.
//! - Never feed back into the stored board.

pub mod highlight;
pub mod menu;
pub mod projection;
