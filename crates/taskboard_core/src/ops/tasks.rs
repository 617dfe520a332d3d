//! Task transitions.
//!
//! Bulk transitions accept [`TaskIds`] and rebuild only the columns that
//! actually hold a matching task.

use super::reorder::{insertion_index, relocate};
use crate::model::board::Board;
use crate::model::column::Column;
use crate::model::edge::TaskEdge;
use crate::model::task::{Task, TaskIds};
use std::collections::HashSet;
use std::sync::Arc;

/// Appends `task` to the end of `column_id`. Unknown columns are ignored.
pub fn add_task(board: &Arc<Board>, column_id: &str, task: Task) -> Arc<Board> {
    let Some(index) = board.column_index(column_id) else {
        return Arc::clone(board);
    };
    let column = &board.columns[index];
    let mut items = column.items.clone();
    items.push(Arc::new(task));
    replace_column(board, index, column.with_items(items))
}

/// Replaces the first task whose id matches `task.id`.
pub fn update_task(board: &Arc<Board>, task: Task) -> Arc<Board> {
    let Some((column_index, task_index)) = board.locate_task(&task.id) else {
        return Arc::clone(board);
    };
    let column = &board.columns[column_index];
    let mut items = column.items.clone();
    items[task_index] = Arc::new(task);
    replace_column(board, column_index, column.with_items(items))
}

/// Removes every matching task from every column.
pub fn delete_tasks(board: &Arc<Board>, ids: &TaskIds) -> Arc<Board> {
    let ids = id_set(ids);
    map_columns(board, |column| {
        if !column.task_ids().any(|id| ids.contains(id)) {
            return None;
        }
        let items = column
            .items
            .iter()
            .filter(|task| !ids.contains(task.id.as_str()))
            .cloned()
            .collect();
        Some(column.with_items(items))
    })
}

/// Sets `completed = value` on every matching task.
///
/// Tasks already at `value` are left shared.
pub fn change_status(board: &Arc<Board>, ids: &TaskIds, value: bool) -> Arc<Board> {
    let ids = id_set(ids);
    map_columns(board, |column| {
        let needs_change =
            |task: &Arc<Task>| ids.contains(task.id.as_str()) && task.completed != value;
        if !column.items.iter().any(needs_change) {
            return None;
        }
        let items = column
            .items
            .iter()
            .map(|task| {
                if needs_change(task) {
                    Arc::new(task.with_completed(value))
                } else {
                    Arc::clone(task)
                }
            })
            .collect();
        Some(column.with_items(items))
    })
}

/// Moves every matching task to the end of `target_column_id`.
///
/// Moved tasks keep their board order (column order, then item order). When
/// nothing matches, or the target column does not exist, the input board is
/// returned so that no task is lost.
pub fn move_tasks_to_column(
    board: &Arc<Board>,
    ids: &TaskIds,
    target_column_id: &str,
) -> Arc<Board> {
    let Some(target_index) = board.column_index(target_column_id) else {
        return Arc::clone(board);
    };
    let ids = id_set(ids);
    let moving: Vec<Arc<Task>> = board
        .columns
        .iter()
        .flat_map(|column| column.items.iter())
        .filter(|task| ids.contains(task.id.as_str()))
        .cloned()
        .collect();
    if moving.is_empty() {
        return Arc::clone(board);
    }

    let columns = board
        .columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            let holds_moving = column.task_ids().any(|id| ids.contains(id));
            if index != target_index && !holds_moving {
                return Arc::clone(column);
            }
            let mut items: Vec<Arc<Task>> = column
                .items
                .iter()
                .filter(|task| !ids.contains(task.id.as_str()))
                .cloned()
                .collect();
            if index == target_index {
                items.extend(moving.iter().cloned());
            }
            Arc::new(column.with_items(items))
        })
        .collect();
    Arc::new(Board { columns })
}

/// Moves `task_id` next to `target_task_id` on `edge`, in any column.
///
/// Unknown ids and self-drops return the input board.
pub fn move_task(
    board: &Arc<Board>,
    task_id: &str,
    target_task_id: &str,
    edge: TaskEdge,
) -> Arc<Board> {
    if task_id == target_task_id {
        return Arc::clone(board);
    }
    let (Some((source_column, source_index)), Some((target_column, target_index))) =
        (board.locate_task(task_id), board.locate_task(target_task_id))
    else {
        return Arc::clone(board);
    };

    if source_column == target_column {
        let column = &board.columns[source_column];
        let mut items = column.items.clone();
        if !relocate(&mut items, source_index, target_index, edge.side()) {
            return Arc::clone(board);
        }
        return replace_column(board, source_column, column.with_items(items));
    }

    let source = &board.columns[source_column];
    let target = &board.columns[target_column];
    let mut source_items = source.items.clone();
    let moved = source_items.remove(source_index);
    let mut target_items = target.items.clone();
    target_items.insert(insertion_index(None, target_index, edge.side()), moved);

    let mut columns = board.columns.clone();
    columns[source_column] = Arc::new(source.with_items(source_items));
    columns[target_column] = Arc::new(target.with_items(target_items));
    Arc::new(Board { columns })
}

fn id_set(ids: &TaskIds) -> HashSet<&str> {
    ids.iter().collect()
}

fn replace_column(board: &Arc<Board>, index: usize, column: Column) -> Arc<Board> {
    let mut columns = board.columns.clone();
    columns[index] = Arc::new(column);
    Arc::new(Board { columns })
}

// `f` returns `None` for columns it leaves alone. If it leaves all of them
// alone, the input board is handed back.
fn map_columns(
    board: &Arc<Board>,
    mut f: impl FnMut(&Arc<Column>) -> Option<Column>,
) -> Arc<Board> {
    let mut changed = false;
    let columns = board
        .columns
        .iter()
        .map(|column| match f(column) {
            Some(next) => {
                changed = true;
                Arc::new(next)
            }
            None => Arc::clone(column),
        })
        .collect();
    if !changed {
        return Arc::clone(board);
    }
    Arc::new(Board { columns })
}

#[cfg(test)]
mod tests {
    use super::{
        add_task, change_status, delete_tasks, move_task, move_tasks_to_column, update_task,
    };
    use crate::model::board::Board;
    use crate::model::column::Column;
    use crate::model::edge::TaskEdge;
    use crate::model::task::{Task, TaskIds};
    use std::sync::Arc;

    fn board(layout: &[(&str, &[&str])]) -> Arc<Board> {
        Arc::new(Board::from_columns(
            layout
                .iter()
                .map(|(column_id, task_ids)| {
                    Column::with_id(*column_id, column_id.to_uppercase(), 0).with_items(
                        task_ids
                            .iter()
                            .map(|id| Arc::new(Task::with_id(*id, *id, "", 0)))
                            .collect(),
                    )
                })
                .collect(),
        ))
    }

    fn items(board: &Board, column_id: &str) -> Vec<String> {
        board
            .column(column_id)
            .map(|column| column.task_ids().map(str::to_string).collect())
            .unwrap_or_default()
    }

    #[test]
    fn add_task_to_missing_column_is_noop() {
        let before = board(&[("x", &[])]);
        let after = add_task(&before, "zz", Task::with_id("t1", "a", "", 0));
        assert!(Arc::ptr_eq(&before, &after));

        let after = add_task(&before, "x", Task::with_id("t1", "a", "", 0));
        assert_eq!(items(&after, "x"), vec!["t1"]);
    }

    #[test]
    fn update_task_replaces_value_in_place() {
        let before = board(&[("x", &["t1", "t2"])]);
        let mut edited = Task::with_id("t2", "renamed", "ctx", 5);
        edited.completed = true;
        let after = update_task(&before, edited.clone());
        assert_eq!(**after.task("t2").expect("t2 should exist"), edited);
        assert_eq!(items(&after, "x"), vec!["t1", "t2"]);
    }

    #[test]
    fn delete_tasks_across_columns() {
        let before = board(&[("x", &["t1", "t2"]), ("y", &["t3"]), ("z", &["t4"])]);
        let after = delete_tasks(&before, &TaskIds::from(vec!["t1", "t3"]));
        assert_eq!(items(&after, "x"), vec!["t2"]);
        assert!(items(&after, "y").is_empty());
        assert!(Arc::ptr_eq(&before.columns[2], &after.columns[2]));

        let untouched = delete_tasks(&before, &TaskIds::from("missing"));
        assert!(Arc::ptr_eq(&before, &untouched));
    }

    #[test]
    fn change_status_sets_value_for_matches_only() {
        let before = board(&[("x", &["t1", "t2"]), ("y", &["t3"])]);
        let after = change_status(&before, &TaskIds::from(vec!["t1", "t3"]), true);
        assert!(after.task("t1").expect("t1").completed);
        assert!(!after.task("t2").expect("t2").completed);
        assert!(after.task("t3").expect("t3").completed);

        let again = change_status(&after, &TaskIds::from("t1"), true);
        assert!(Arc::ptr_eq(&after, &again));
    }

    #[test]
    fn move_to_column_preserves_relative_order() {
        let before = board(&[("x", &["t1", "t2", "t3"]), ("y", &["t4"]), ("z", &["t5"])]);
        let after = move_tasks_to_column(&before, &TaskIds::from(vec!["t5", "t3", "t1"]), "y");
        assert_eq!(items(&after, "x"), vec!["t2"]);
        assert_eq!(items(&after, "y"), vec!["t4", "t1", "t3", "t5"]);
        assert!(items(&after, "z").is_empty());
    }

    #[test]
    fn move_to_column_within_target_reappends_at_end() {
        let before = board(&[("x", &["t1", "t2", "t3"])]);
        let after = move_tasks_to_column(&before, &TaskIds::from("t1"), "x");
        assert_eq!(items(&after, "x"), vec!["t2", "t3", "t1"]);
    }

    #[test]
    fn move_to_column_without_matches_or_target_is_identity() {
        let before = board(&[("x", &["t1"]), ("y", &[])]);
        assert!(Arc::ptr_eq(
            &before,
            &move_tasks_to_column(&before, &TaskIds::from("zz"), "y")
        ));
        assert!(Arc::ptr_eq(
            &before,
            &move_tasks_to_column(&before, &TaskIds::from("t1"), "missing")
        ));
    }

    #[test]
    fn cross_column_move_to_bottom() {
        let before = board(&[("x", &["t1", "t2"]), ("y", &["t3"])]);
        let after = move_task(&before, "t1", "t3", TaskEdge::Bottom);
        assert_eq!(items(&after, "x"), vec!["t2"]);
        assert_eq!(items(&after, "y"), vec!["t3", "t1"]);
    }

    #[test]
    fn cross_column_move_backward_to_top() {
        let before = board(&[("x", &["t1", "t2"]), ("y", &["t3", "t4"])]);
        let after = move_task(&before, "t4", "t2", TaskEdge::Top);
        assert_eq!(items(&after, "x"), vec!["t1", "t4", "t2"]);
        assert_eq!(items(&after, "y"), vec!["t3"]);
    }

    #[test]
    fn same_column_forward_and_backward() {
        let before = board(&[("x", &["t1", "t2", "t3", "t4"])]);
        let forward = move_task(&before, "t1", "t3", TaskEdge::Top);
        assert_eq!(items(&forward, "x"), vec!["t2", "t1", "t3", "t4"]);
        let forward = move_task(&before, "t1", "t3", TaskEdge::Bottom);
        assert_eq!(items(&forward, "x"), vec!["t2", "t3", "t1", "t4"]);
        let backward = move_task(&before, "t4", "t2", TaskEdge::Top);
        assert_eq!(items(&backward, "x"), vec!["t1", "t4", "t2", "t3"]);
        let backward = move_task(&before, "t4", "t2", TaskEdge::Bottom);
        assert_eq!(items(&backward, "x"), vec!["t1", "t2", "t4", "t3"]);
    }

    #[test]
    fn move_task_with_unknown_or_same_ids_is_identity() {
        let before = board(&[("x", &["t1", "t2"])]);
        assert!(Arc::ptr_eq(&before, &move_task(&before, "t1", "t1", TaskEdge::Top)));
        assert!(Arc::ptr_eq(&before, &move_task(&before, "t1", "zz", TaskEdge::Top)));
        assert!(Arc::ptr_eq(&before, &move_task(&before, "zz", "t1", TaskEdge::Top)));
    }
}
