//! SQLite key-value board store.
//!
//! # Responsibility
//! - Persist the board document as one text blob under a configurable key.
//!
//! # Invariants
//! - Connections must be migrated to the latest schema before use.
//! - Saves upsert; there is at most one row per key.

use super::{decode_board, encode_board, BoardStore, StoreError, StoreResult};
use crate::db::migrations::{current_user_version, latest_version};
use crate::db::{open_db, open_db_in_memory};
use crate::model::board::Board;
use crate::model::now_epoch_ms;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "data";

pub struct SqliteBoardStore {
    conn: Connection,
    key: String,
}

impl SqliteBoardStore {
    /// Wraps an already migrated connection.
    pub fn try_new(conn: Connection, key: impl Into<String>) -> StoreResult<Self> {
        let expected_version = latest_version();
        let actual_version = current_user_version(&conn)?;
        if actual_version != expected_version {
            return Err(StoreError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }
        Ok(Self {
            conn,
            key: key.into(),
        })
    }

    /// Opens (and migrates) a database file.
    pub fn open(path: impl AsRef<Path>, key: impl Into<String>) -> StoreResult<Self> {
        Self::try_new(open_db(path)?, key)
    }

    /// Opens a migrated in-memory database.
    pub fn open_in_memory(key: impl Into<String>) -> StoreResult<Self> {
        Self::try_new(open_db_in_memory()?, key)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Removes the stored blob for this key.
    pub fn clear(&self) -> StoreResult<()> {
        self.conn
            .execute("DELETE FROM kv_store WHERE key = ?1;", [self.key.as_str()])?;
        Ok(())
    }
}

impl BoardStore for SqliteBoardStore {
    fn load(&self) -> StoreResult<Option<Board>> {
        let text: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                [self.key.as_str()],
                |row| row.get(0),
            )
            .optional()?;
        match text {
            Some(text) => decode_board(&text),
            None => Ok(None),
        }
    }

    fn save(&self, board: &Board) -> StoreResult<()> {
        let text = encode_board(board)?;
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![self.key.as_str(), text, now_epoch_ms()],
        )?;
        Ok(())
    }
}
