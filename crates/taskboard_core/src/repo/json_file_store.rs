//! Single-document JSON file store.
//!
//! # Invariants
//! - A missing file loads as `None`.
//! - Saves write a sibling temp file and rename it over the target, so a
//!   crash mid-write leaves the previous document intact.

use super::{decode_board, encode_board, BoardStore, StoreResult};
use crate::model::board::Board;
use log::{debug, warn};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct JsonFileBoardStore {
    path: PathBuf,
}

impl JsonFileBoardStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_else(|| "board.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl BoardStore for JsonFileBoardStore {
    fn load(&self) -> StoreResult<Option<Board>> {
        match fs::read_to_string(&self.path) {
            Ok(text) => decode_board(&text),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(
                    "event=board_load module=repo status=empty store=json path={}",
                    self.path.display()
                );
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, board: &Board) -> StoreResult<()> {
        let text = encode_board(board)?;
        if let Some(parent) = self.path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let temp = self.temp_path();
        if let Err(err) = fs::write(&temp, text).and_then(|()| fs::rename(&temp, &self.path)) {
            let _ = fs::remove_file(&temp);
            warn!(
                "event=board_save module=repo status=error store=json path={} error={err}",
                self.path.display()
            );
            return Err(err.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::JsonFileBoardStore;
    use crate::model::board::Board;
    use crate::model::column::Column;
    use crate::repo::{BoardStore, StoreError};

    #[test]
    fn missing_file_loads_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileBoardStore::new(dir.path().join("absent.json"));
        assert!(store.load().expect("load").is_none());
    }

    #[test]
    fn save_creates_parent_dirs_and_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileBoardStore::new(dir.path().join("nested/board.json"));
        let board = Board::from_columns(vec![Column::with_id("c1", "Todo", 9)]);
        store.save(&board).expect("save");
        assert_eq!(store.load().expect("load"), Some(board));
        assert!(!dir.path().join("nested/board.json.tmp").exists());
    }

    #[test]
    fn failed_rename_leaves_no_temp_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("board.json");
        std::fs::create_dir(&path).expect("occupy target with a directory");
        std::fs::write(path.join("keep"), "x").expect("write fixture");

        let err = JsonFileBoardStore::new(&path)
            .save(&Board::empty())
            .expect_err("rename onto a directory must fail");
        assert!(matches!(err, StoreError::Io(_)));
        assert!(!dir.path().join("board.json.tmp").exists());
        assert!(path.join("keep").exists());
    }

    #[test]
    fn corrupt_file_is_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("board.json");
        std::fs::write(&path, "[1, 2").expect("write fixture");
        let err = JsonFileBoardStore::new(path).load().expect_err("corrupt");
        assert!(matches!(err, StoreError::Corrupt(_)));
    }
}
