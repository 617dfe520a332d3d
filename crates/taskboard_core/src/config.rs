//! Runtime configuration for the board composition root.
//!
//! Values come from `TASKBOARD_*` environment variables; a blank variable
//! counts as unset. Callers may override fields afterwards.

use crate::logging::{default_log_level, normalize_level};
use crate::repo::json_file_store::JsonFileBoardStore;
use crate::repo::sqlite_store::{SqliteBoardStore, DEFAULT_STORAGE_KEY};
use crate::repo::{BoardStore, StoreResult};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::str::FromStr;

pub const ENV_STORE: &str = "TASKBOARD_STORE";
pub const ENV_DATA_PATH: &str = "TASKBOARD_DATA_PATH";
pub const ENV_STORAGE_KEY: &str = "TASKBOARD_STORAGE_KEY";
pub const ENV_LOG_LEVEL: &str = "TASKBOARD_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "TASKBOARD_LOG_DIR";

const DEFAULT_JSON_FILE: &str = "taskboard.json";
const DEFAULT_SQLITE_FILE: &str = "taskboard.sqlite3";

/// Persistence backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreKind {
    #[default]
    Json,
    Sqlite,
}

impl StoreKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Sqlite => "sqlite",
        }
    }

    fn default_file_name(self) -> &'static str {
        match self {
            Self::Json => DEFAULT_JSON_FILE,
            Self::Sqlite => DEFAULT_SQLITE_FILE,
        }
    }
}

impl FromStr for StoreKind {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "sqlite" => Ok(Self::Sqlite),
            other => Err(ConfigError::UnknownStore(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnknownStore(String),
    InvalidLogLevel(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownStore(value) => {
                write!(f, "unsupported store `{value}`; expected json|sqlite")
            }
            Self::InvalidLogLevel(message) => write!(f, "{message}"),
        }
    }
}

impl Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    pub store: StoreKind,
    pub data_path: PathBuf,
    /// Row key for the SQLite store; ignored by the JSON store.
    pub storage_key: String,
    pub log_level: &'static str,
    /// Directory for rolling log files; `None` disables file logging.
    pub log_dir: Option<PathBuf>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::for_store(StoreKind::default())
    }
}

impl BoardConfig {
    /// Defaults for `store`, with its data file in the temp directory.
    pub fn for_store(store: StoreKind) -> Self {
        Self {
            store,
            data_path: std::env::temp_dir().join(store.default_file_name()),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            log_level: default_log_level(),
            log_dir: None,
        }
    }

    /// Reads configuration from the process environment.
    ///
    /// # Errors
    /// - Returns an error for an unknown store kind or log level.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads configuration through `lookup`, treating blank values as unset.
    ///
    /// # Errors
    /// - Returns an error for an unknown store kind or log level.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let store = match read(ENV_STORE) {
            Some(value) => value.parse()?,
            None => StoreKind::default(),
        };
        let mut config = Self::for_store(store);
        if let Some(path) = read(ENV_DATA_PATH) {
            config.data_path = PathBuf::from(path);
        }
        if let Some(key) = read(ENV_STORAGE_KEY) {
            config.storage_key = key;
        }
        if let Some(level) = read(ENV_LOG_LEVEL) {
            config.set_log_level(&level)?;
        }
        config.log_dir = read(ENV_LOG_DIR).map(PathBuf::from);
        Ok(config)
    }

    /// Switches the backend. A data path still at the old backend's default
    /// follows to the new backend's default file.
    pub fn set_store(&mut self, store: StoreKind) {
        if self.data_path == Self::for_store(self.store).data_path {
            self.data_path = Self::for_store(store).data_path;
        }
        self.store = store;
    }

    /// # Errors
    /// - Returns an error when `level` is not a known log level.
    pub fn set_log_level(&mut self, level: &str) -> Result<(), ConfigError> {
        self.log_level = normalize_level(level).map_err(ConfigError::InvalidLogLevel)?;
        Ok(())
    }

    /// Opens the configured store.
    ///
    /// # Errors
    /// - Returns the SQLite error when the database cannot be opened or
    ///   migrated.
    pub fn open_store(&self) -> StoreResult<Box<dyn BoardStore>> {
        info!(
            "event=store_open module=config status=ok store={}",
            self.store.as_str()
        );
        match self.store {
            StoreKind::Json => Ok(Box::new(JsonFileBoardStore::new(&self.data_path))),
            StoreKind::Sqlite => Ok(Box::new(SqliteBoardStore::open(
                &self.data_path,
                self.storage_key.clone(),
            )?)),
        }
    }
}
