//! Root-owned engine slot.
//!
//! # Responsibility
//! - Hold at most one [`BoardEngine`] for the composition root.
//! - Run the `init -> use -> teardown` lifecycle.
//!
//! # Invariants
//! - Borrowing the engine before `init` is a programmer error and panics.

use super::engine::BoardEngine;
use crate::model::board::Board;
use crate::repo::BoardStore;
use log::{info, warn};
use std::sync::Arc;

pub const UNINITIALIZED_MESSAGE: &str = "board context used outside of an initialized session";

pub struct SessionContext<S: BoardStore> {
    engine: Option<BoardEngine<S>>,
}

impl<S: BoardStore> Default for SessionContext<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: BoardStore> SessionContext<S> {
    pub fn new() -> Self {
        Self { engine: None }
    }

    /// Installs `engine`. A previously installed engine is dropped.
    pub fn init(&mut self, engine: BoardEngine<S>) {
        if self.engine.is_some() {
            warn!("event=session_init module=session status=replaced");
        }
        info!(
            "event=session_init module=session status=ok columns={}",
            engine.board().columns.len()
        );
        self.engine = Some(engine);
    }

    pub fn is_initialized(&self) -> bool {
        self.engine.is_some()
    }

    /// # Panics
    /// Panics when no engine is installed.
    pub fn engine(&self) -> &BoardEngine<S> {
        match self.engine.as_ref() {
            Some(engine) => engine,
            None => panic!("{UNINITIALIZED_MESSAGE}"),
        }
    }

    /// # Panics
    /// Panics when no engine is installed.
    pub fn engine_mut(&mut self) -> &mut BoardEngine<S> {
        match self.engine.as_mut() {
            Some(engine) => engine,
            None => panic!("{UNINITIALIZED_MESSAGE}"),
        }
    }

    pub fn try_engine(&self) -> Option<&BoardEngine<S>> {
        self.engine.as_ref()
    }

    /// Removes the engine, returning its final board and store.
    pub fn teardown(&mut self) -> Option<(Arc<Board>, S)> {
        self.engine.take().map(BoardEngine::teardown)
    }
}

#[cfg(test)]
mod tests {
    use super::SessionContext;
    use crate::model::board::Board;
    use crate::repo::memory_store::MemoryBoardStore;
    use crate::service::actions::BoardActions;
    use crate::service::engine::BoardEngine;

    fn engine() -> BoardEngine<MemoryBoardStore> {
        BoardEngine::with_board(MemoryBoardStore::new(), Board::empty())
    }

    #[test]
    #[should_panic(expected = "outside of an initialized session")]
    fn engine_panics_before_init() {
        let context: SessionContext<MemoryBoardStore> = SessionContext::new();
        let _ = context.engine();
    }

    #[test]
    #[should_panic(expected = "outside of an initialized session")]
    fn engine_mut_panics_after_teardown() {
        let mut context = SessionContext::new();
        context.init(engine());
        let _ = context.teardown();
        let _ = context.engine_mut();
    }

    #[test]
    fn lifecycle_returns_final_board() {
        let mut context = SessionContext::new();
        assert!(context.try_engine().is_none());
        context.init(engine());
        context.engine_mut().add_column("Todo");

        let (board, store) = context.teardown().expect("engine should be installed");
        assert_eq!(board.columns.len(), 1);
        assert_eq!(store.save_count(), 1);
        assert!(!context.is_initialized());
        assert!(context.teardown().is_none());
    }
}
