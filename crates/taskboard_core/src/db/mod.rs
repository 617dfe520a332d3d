//! SQLite bootstrap for the key-value board store.
//!
//! Connections handed out here are already migrated; stores never see a
//! database whose `PRAGMA user_version` differs from `migrations::latest_version()`.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    /// Opening or configuring the connection failed.
    Sqlite(rusqlite::Error),
    /// A migration script, or the version bump after it, failed. Nothing from
    /// the failed run is committed.
    Migration {
        version: u32,
        source: rusqlite::Error,
    },
    /// The file was written by a newer build.
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl DbError {
    /// Schema version the error is tied to, if any.
    pub fn schema_version(&self) -> Option<u32> {
        match self {
            Self::Sqlite(_) => None,
            Self::Migration { version, .. } => Some(*version),
            Self::UnsupportedSchemaVersion { db_version, .. } => Some(*db_version),
        }
    }
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "sqlite error: {err}"),
            Self::Migration { version, source } => {
                write!(f, "board migration {version} failed: {source}")
            }
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "board database schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) | Self::Migration { source: err, .. } => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

#[cfg(test)]
mod tests {
    use super::DbError;
    use std::error::Error;

    #[test]
    fn migration_error_names_version_and_keeps_source() {
        let err = DbError::Migration {
            version: 3,
            source: rusqlite::Error::InvalidQuery,
        };
        assert_eq!(err.schema_version(), Some(3));
        assert!(err.to_string().starts_with("board migration 3 failed"));
        assert!(err.source().is_some());
    }

    #[test]
    fn newer_schema_has_no_source() {
        let err = DbError::UnsupportedSchemaVersion {
            db_version: 9,
            latest_supported: 1,
        };
        assert_eq!(err.schema_version(), Some(9));
        assert!(err.source().is_none());
    }
}
