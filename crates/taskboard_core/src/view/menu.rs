//! Move-menu options for column and task cards.
//!
//! Options that would produce a no-op move are left out.

use crate::model::column::{Column, ColumnId};
use std::sync::Arc;

/// One selectable column in a move menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOption {
    pub id: ColumnId,
    pub name: String,
}

impl MoveOption {
    fn of(column: &Column) -> Self {
        Self {
            id: column.id.clone(),
            name: column.name.clone(),
        }
    }
}

/// "Move before" and "Move after" choices for one column.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnMoveTargets {
    /// Drop targets for `ColumnEdge::Left`.
    pub before: Vec<MoveOption>,
    /// Drop targets for `ColumnEdge::Right`.
    pub after: Vec<MoveOption>,
}

/// Menu targets for moving `column_id`.
///
/// "before" skips the immediate successor and "after" skips the immediate
/// predecessor, since both would leave the order unchanged.
pub fn column_move_targets(columns: &[Arc<Column>], column_id: &str) -> ColumnMoveTargets {
    let Some(current) = columns.iter().position(|column| column.id == column_id) else {
        return ColumnMoveTargets::default();
    };
    let next = columns.get(current + 1).map(|column| column.id.as_str());
    let prev = current
        .checked_sub(1)
        .and_then(|index| columns.get(index))
        .map(|column| column.id.as_str());

    let others = || columns.iter().filter(|column| column.id != column_id);
    ColumnMoveTargets {
        before: others()
            .filter(|column| Some(column.id.as_str()) != next)
            .map(|column| MoveOption::of(column))
            .collect(),
        after: others()
            .filter(|column| Some(column.id.as_str()) != prev)
            .map(|column| MoveOption::of(column))
            .collect(),
    }
}

/// "Move to" choices for a task card: every column, in board order.
pub fn task_move_targets(columns: &[Arc<Column>]) -> Vec<MoveOption> {
    columns.iter().map(|column| MoveOption::of(column)).collect()
}
