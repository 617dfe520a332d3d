//! Board persistence adapters.
//!
//! # Responsibility
//! - Define the `load`/`save` contract the engine persists through.
//! - Keep storage details (files, SQLite, memory) behind that contract.
//!
//! # Invariants
//! - Absent data loads as `Ok(None)`, never as an error.
//! - Data round-trips exactly: no field loss, no reordering.
//! - Corrupt data surfaces as `StoreError::Corrupt`, it is not overwritten.

pub mod json_file_store;
pub mod memory_store;
pub mod sqlite_store;

use crate::db::DbError;
use crate::model::board::Board;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from board persistence adapters.
#[derive(Debug)]
pub enum StoreError {
    /// Underlying SQLite/bootstrap error.
    Db(DbError),
    /// File system error.
    Io(std::io::Error),
    /// Stored text is not a valid board document.
    Corrupt(serde_json::Error),
    /// Board could not be rendered to text.
    Serialize(serde_json::Error),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "board store io error: {err}"),
            Self::Corrupt(err) => write!(f, "stored board data is corrupt: {err}"),
            Self::Serialize(err) => write!(f, "failed to serialize board: {err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "board store requires schema version {expected_version}, got {actual_version}"
            ),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::Corrupt(err) => Some(err),
            Self::Serialize(err) => Some(err),
            Self::UninitializedConnection { .. } => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Persistence contract consumed by the board engine.
pub trait BoardStore {
    /// Loads the stored board, or `None` when nothing was saved yet.
    fn load(&self) -> StoreResult<Option<Board>>;
    /// Replaces the stored board.
    fn save(&self, board: &Board) -> StoreResult<()>;
}

impl<S: BoardStore + ?Sized> BoardStore for Box<S> {
    fn load(&self) -> StoreResult<Option<Board>> {
        (**self).load()
    }

    fn save(&self, board: &Board) -> StoreResult<()> {
        (**self).save(board)
    }
}

impl<S: BoardStore + ?Sized> BoardStore for &S {
    fn load(&self) -> StoreResult<Option<Board>> {
        (**self).load()
    }

    fn save(&self, board: &Board) -> StoreResult<()> {
        (**self).save(board)
    }
}

/// Renders a board as its persisted JSON text.
pub fn encode_board(board: &Board) -> StoreResult<String> {
    serde_json::to_string(board).map_err(StoreError::Serialize)
}

/// Parses persisted JSON text.
///
/// Blank text counts as "nothing stored".
pub fn decode_board(text: &str) -> StoreResult<Option<Board>> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(text)
        .map(Some)
        .map_err(StoreError::Corrupt)
}

#[cfg(test)]
mod tests {
    use super::{decode_board, encode_board, StoreError};
    use crate::model::board::Board;

    #[test]
    fn decode_treats_blank_text_as_absent() {
        assert!(decode_board("").expect("blank should decode").is_none());
        assert!(decode_board("  \n").expect("blank should decode").is_none());
    }

    #[test]
    fn decode_rejects_garbage_as_corrupt() {
        let err = decode_board("{not json").expect_err("garbage must fail");
        assert!(matches!(err, StoreError::Corrupt(_)));
    }

    #[test]
    fn encode_uses_persisted_field_names() {
        let board: Board = serde_json::from_str(
            r#"{"columns":[{"id":"c1","name":"Todo","items":[{"id":"t1","name":"a","context":"","completed":true,"createdAt":3}],"createdAt":1}]}"#,
        )
        .expect("fixture should parse");
        let text = encode_board(&board).expect("board should encode");
        assert_eq!(
            text,
            r#"{"columns":[{"id":"c1","name":"Todo","items":[{"id":"t1","name":"a","context":"","completed":true,"createdAt":3}],"createdAt":1}]}"#
        );
    }
}
