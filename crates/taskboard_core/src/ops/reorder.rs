//! Index arithmetic for "drop next to target" reordering.
//!
//! Removal happens before insertion, so when the moved item sat before the
//! target in the same sequence, every index after it has shifted down by one.

use crate::model::edge::Side;

/// Insertion index for an item dropped on `side` of the item at `target`.
///
/// `source` is the moved item's original index when it lives in the same
/// sequence as the target, or `None` when it comes from another sequence.
/// The returned index addresses the target sequence *after* the moved item
/// was removed from it.
pub fn insertion_index(source: Option<usize>, target: usize, side: Side) -> usize {
    let base = match source {
        Some(from) if from < target => target - 1,
        _ => target,
    };
    match side {
        Side::Before => base,
        Side::After => base + 1,
    }
}

/// Moves the element at `from` next to the element at `target` in place.
///
/// Returns `false` and leaves `items` untouched when either index is out of
/// range or both indices are equal.
pub fn relocate<T>(items: &mut Vec<T>, from: usize, target: usize, side: Side) -> bool {
    if from == target || from >= items.len() || target >= items.len() {
        return false;
    }
    let moved = items.remove(from);
    let index = insertion_index(Some(from), target, side);
    items.insert(index, moved);
    true
}
