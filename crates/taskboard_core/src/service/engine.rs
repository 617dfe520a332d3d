//! Board state engine.
//!
//! # Responsibility
//! - Own the `(Board, Selection, Filter, search)` session state.
//! - Apply actions as pure transitions and commit the result.
//! - Persist every committed board change through a `BoardStore`.
//!
//! # Invariants
//! - `board` is always the full, unfiltered board; filtering only shapes
//!   `view()`.
//! - A transition that changes nothing keeps the same `Arc<Board>` and does
//!   not trigger a save.
//! - Save failures are logged here and never surface from an action.

use super::actions::{Action, BoardActions};
use crate::model::board::Board;
use crate::model::column::{Column, ColumnId};
use crate::model::edge::{ColumnEdge, TaskEdge};
use crate::model::filter::{Filter, FilterKey};
use crate::model::selection::Selection;
use crate::model::task::{NewTask, Task, TaskId, TaskIds};
use crate::ops::{columns, tasks};
use crate::repo::{BoardStore, StoreResult};
use crate::view::highlight::{highlight, task_matches, Segment};
use crate::view::menu::{column_move_targets, task_move_targets, ColumnMoveTargets, MoveOption};
use crate::view::projection::project;
use log::{debug, error, info};
use std::sync::Arc;
use std::time::Instant;

/// Result of [`BoardEngine::dispatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatched {
    /// Whether the stored board was replaced.
    pub board_changed: bool,
    /// Id of the column or task the action created, if any.
    pub created_id: Option<String>,
}

/// Engine instance owned by the application's composition root.
pub struct BoardEngine<S: BoardStore> {
    board: Arc<Board>,
    selection: Selection,
    filter: Filter,
    search: String,
    store: S,
}

impl<S: BoardStore> BoardEngine<S> {
    /// Loads the stored board, or starts empty when the store has none.
    ///
    /// # Errors
    /// - Returns the store error when stored data cannot be read or parsed.
    pub fn init(store: S) -> StoreResult<Self> {
        let started_at = Instant::now();
        let loaded = store.load().map_err(|err| {
            error!(
                "event=board_load module=engine status=error duration_ms={} error={err}",
                started_at.elapsed().as_millis()
            );
            err
        })?;

        let found = loaded.is_some();
        let board = loaded.unwrap_or_default();
        info!(
            "event=board_load module=engine status=ok found={found} columns={} tasks={} duration_ms={}",
            board.columns.len(),
            board.task_count(),
            started_at.elapsed().as_millis()
        );
        Ok(Self::with_board(store, board))
    }

    /// Starts from `board` without reading the store.
    pub fn with_board(store: S, board: Board) -> Self {
        Self {
            board: Arc::new(board),
            selection: Selection::new(),
            filter: Filter::default(),
            search: String::new(),
            store,
        }
    }

    /// Full, unfiltered board.
    pub fn board(&self) -> &Arc<Board> {
        &self.board
    }

    /// Board as displayed: the stored board under the current filter.
    pub fn view(&self) -> Arc<Board> {
        project(&self.board, &self.filter)
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Highlight segments of `text` for the current search query.
    pub fn highlight(&self, text: &str) -> Vec<Segment> {
        highlight(text, &self.search)
    }

    /// Ids of displayed tasks whose name or context matches the search.
    pub fn search_hits(&self) -> Vec<TaskId> {
        self.view()
            .columns
            .iter()
            .flat_map(|column| column.items.iter())
            .filter(|task| task_matches(task, &self.search))
            .map(|task| task.id.clone())
            .collect()
    }

    pub fn column_move_targets(&self, column_id: &str) -> ColumnMoveTargets {
        column_move_targets(&self.board.columns, column_id)
    }

    pub fn task_move_targets(&self) -> Vec<MoveOption> {
        task_move_targets(&self.board.columns)
    }

    /// Applies one owned action.
    pub fn dispatch(&mut self, action: Action) -> Dispatched {
        debug!("event=dispatch module=engine action={}", action.name());
        let before = Arc::clone(&self.board);
        let created_id = action.apply_to(self);
        Dispatched {
            board_changed: !Arc::ptr_eq(&before, &self.board),
            created_id,
        }
    }

    /// Ids currently flagged as selected.
    pub fn selected_ids(&self) -> Vec<TaskId> {
        self.selection.selected_ids()
    }

    /// Whether every displayed task of `column_id` is selected.
    ///
    /// Computed over `view()`: tasks hidden by the filter do not count. A
    /// column with no displayed tasks is never "all selected".
    pub fn column_all_selected(&self, column_id: &str) -> bool {
        let view = self.view();
        view.column(column_id).is_some_and(|column| {
            !column.items.is_empty() && column.task_ids().all(|id| self.selection.is_selected(id))
        })
    }

    /// Sets the selection flag of every displayed task in `column_id`.
    ///
    /// Hidden tasks keep their flag. No-op when the column shows no tasks.
    pub fn toggle_column_selection(&mut self, column_id: &str, value: bool) {
        let visible: Vec<TaskId> = self
            .view()
            .column(column_id)
            .map(|column| column.task_ids().map(str::to_string).collect())
            .unwrap_or_default();
        if visible.is_empty() {
            return;
        }
        self.select_item(TaskIds::Many(visible), value);
    }

    /// Sets `completed` on every selected task. No-op without a selection.
    pub fn change_status_selected(&mut self, value: bool) {
        let selected = self.selected_ids();
        if selected.is_empty() {
            return;
        }
        self.change_status_task(TaskIds::Many(selected), value);
    }

    /// Moves every selected task to `column_id` and clears the selection.
    pub fn move_selected_to_column(&mut self, column_id: &str) {
        let selected = self.selected_ids();
        if selected.is_empty() {
            return;
        }
        self.move_task_to_column(TaskIds::Many(selected), column_id);
    }

    /// Ends the session, handing back the final board and the store.
    pub fn teardown(self) -> (Arc<Board>, S) {
        info!(
            "event=session_teardown module=engine status=ok columns={} tasks={}",
            self.board.columns.len(),
            self.board.task_count()
        );
        (self.board, self.store)
    }

    fn commit(&mut self, action: &'static str, next: Arc<Board>) -> bool {
        let changed = !Arc::ptr_eq(&self.board, &next);
        debug!("event=action module=engine action={action} changed={changed}");
        if changed {
            self.board = next;
            self.persist();
        }
        changed
    }

    fn persist(&self) {
        let started_at = Instant::now();
        match self.store.save(&self.board) {
            Ok(()) => debug!(
                "event=board_save module=engine status=ok duration_ms={}",
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=board_save module=engine status=error duration_ms={} error={err}",
                started_at.elapsed().as_millis()
            ),
        }
    }
}

impl<S: BoardStore> BoardActions for BoardEngine<S> {
    fn add_column(&mut self, name: &str) -> ColumnId {
        let column = Column::new(name);
        let id = column.id.clone();
        let next = columns::add_column(&self.board, column);
        self.commit("add_column", next);
        id
    }

    fn update_column(&mut self, column: Column) {
        let next = columns::update_column(&self.board, column);
        self.commit("update_column", next);
    }

    fn delete_column(&mut self, column_id: &str) {
        let discarded: Vec<TaskId> = self
            .board
            .column(column_id)
            .map(|column| column.task_ids().map(str::to_string).collect())
            .unwrap_or_default();
        let next = columns::delete_column(&self.board, column_id);
        if self.commit("delete_column", next) && !discarded.is_empty() {
            self.selection = self.selection.without(discarded.iter().map(String::as_str));
        }
    }

    fn move_column(&mut self, column_id: &str, target_column_id: &str, edge: ColumnEdge) {
        let next = columns::move_column(&self.board, column_id, target_column_id, edge);
        self.commit("move_column", next);
    }

    fn add_task(&mut self, column_id: &str, task: NewTask) -> Option<TaskId> {
        let task = task.into_task();
        let id = task.id.clone();
        let next = tasks::add_task(&self.board, column_id, task);
        self.commit("add_task", next).then_some(id)
    }

    fn update_task(&mut self, task: Task) {
        let next = tasks::update_task(&self.board, task);
        self.commit("update_task", next);
    }

    fn delete_task(&mut self, ids: TaskIds) {
        let next = tasks::delete_tasks(&self.board, &ids);
        self.commit("delete_task", next);
        self.selection = self.selection.after_delete(&ids);
    }

    fn change_status_task(&mut self, ids: TaskIds, value: bool) {
        let next = tasks::change_status(&self.board, &ids, value);
        self.commit("change_status_task", next);
    }

    fn move_task_to_column(&mut self, ids: TaskIds, column_id: &str) {
        let next = tasks::move_tasks_to_column(&self.board, &ids, column_id);
        self.commit("move_task_to_column", next);
        if ids.is_many() {
            self.selection = Selection::new();
        }
    }

    fn move_task(&mut self, task_id: &str, target_task_id: &str, edge: TaskEdge) {
        let next = tasks::move_task(&self.board, task_id, target_task_id, edge);
        self.commit("move_task", next);
    }

    fn select_item(&mut self, ids: TaskIds, value: bool) {
        self.selection = self.selection.with(&ids, value);
        debug!(
            "event=action module=engine action=select_item count={} value={value}",
            ids.len()
        );
    }

    fn change_filter(&mut self, key: FilterKey, value: Option<bool>) {
        self.filter = self.filter.with(key, value);
        debug!(
            "event=action module=engine action=change_filter key={key} active={}",
            self.filter.active_count()
        );
    }

    fn change_search(&mut self, value: &str) {
        self.search = value.to_string();
        debug!(
            "event=action module=engine action=change_search query_len={}",
            self.search.chars().count()
        );
    }
}
