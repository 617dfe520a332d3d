//! Column transitions.

use super::reorder::relocate;
use crate::model::board::Board;
use crate::model::column::Column;
use crate::model::edge::ColumnEdge;
use std::sync::Arc;

/// Appends `column` after the last column.
pub fn add_column(board: &Arc<Board>, column: Column) -> Arc<Board> {
    let mut columns = board.columns.clone();
    columns.push(Arc::new(column));
    Arc::new(Board { columns })
}

/// Replaces the column with the same id by `column`, verbatim.
///
/// Unknown ids leave the board untouched.
pub fn update_column(board: &Arc<Board>, column: Column) -> Arc<Board> {
    let Some(index) = board.column_index(&column.id) else {
        return Arc::clone(board);
    };
    let mut columns = board.columns.clone();
    columns[index] = Arc::new(column);
    Arc::new(Board { columns })
}

/// Removes a column together with every task it holds.
pub fn delete_column(board: &Arc<Board>, column_id: &str) -> Arc<Board> {
    let Some(index) = board.column_index(column_id) else {
        return Arc::clone(board);
    };
    let mut columns = board.columns.clone();
    columns.remove(index);
    Arc::new(Board { columns })
}

/// Moves `column_id` next to `target_column_id` on `edge`.
///
/// Missing ids and self-drops return the input board.
pub fn move_column(
    board: &Arc<Board>,
    column_id: &str,
    target_column_id: &str,
    edge: ColumnEdge,
) -> Arc<Board> {
    let (Some(from), Some(target)) = (
        board.column_index(column_id),
        board.column_index(target_column_id),
    ) else {
        return Arc::clone(board);
    };

    let mut columns = board.columns.clone();
    if !relocate(&mut columns, from, target, edge.side()) {
        return Arc::clone(board);
    }
    Arc::new(Board { columns })
}
