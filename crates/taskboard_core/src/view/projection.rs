//! Filtered board projection.

use crate::model::board::Board;
use crate::model::filter::Filter;
use std::sync::Arc;

/// Applies `filter` to every column's items.
///
/// Columns are kept even when they end up empty. With no active constraint
/// the stored board itself is returned.
pub fn project(board: &Arc<Board>, filter: &Filter) -> Arc<Board> {
    if filter.is_unconstrained() {
        return Arc::clone(board);
    }

    let columns = board
        .columns
        .iter()
        .map(|column| {
            if column.items.iter().all(|task| filter.admits(task)) {
                return Arc::clone(column);
            }
            let items = column
                .items
                .iter()
                .filter(|task| filter.admits(task))
                .cloned()
                .collect();
            Arc::new(column.with_items(items))
        })
        .collect();
    Arc::new(Board { columns })
}
