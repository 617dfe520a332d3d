//! In-memory board store.
//!
//! Keeps the serialized text rather than the `Board` value so that it goes
//! through the same encode/decode path as durable stores.

use super::{decode_board, encode_board, BoardStore, StoreResult};
use crate::model::board::Board;
use std::cell::{Cell, RefCell};

#[derive(Debug, Default)]
pub struct MemoryBoardStore {
    text: RefCell<Option<String>>,
    saves: Cell<usize>,
}

impl MemoryBoardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with raw stored text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: RefCell::new(Some(text.into())),
            saves: Cell::new(0),
        }
    }

    /// Last saved (or seeded) text.
    pub fn text(&self) -> Option<String> {
        self.text.borrow().clone()
    }

    /// Number of successful `save` calls.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl BoardStore for MemoryBoardStore {
    fn load(&self) -> StoreResult<Option<Board>> {
        match self.text.borrow().as_deref() {
            Some(text) => decode_board(text),
            None => Ok(None),
        }
    }

    fn save(&self, board: &Board) -> StoreResult<()> {
        let text = encode_board(board)?;
        *self.text.borrow_mut() = Some(text);
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryBoardStore;
    use crate::model::board::Board;
    use crate::model::column::Column;
    use crate::repo::BoardStore;

    #[test]
    fn empty_store_loads_none() {
        assert!(MemoryBoardStore::new().load().expect("load").is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = MemoryBoardStore::new();
        let board = Board::from_columns(vec![Column::with_id("c1", "Todo", 1)]);
        store.save(&board).expect("save");
        assert_eq!(store.load().expect("load"), Some(board));
        assert_eq!(store.save_count(), 1);
    }
}
