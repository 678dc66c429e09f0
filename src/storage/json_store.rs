use super::Store;
use crate::errors::{AppError, AppResult};
use crate::models::{HistoryRecord, Student};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const STUDENTS_FILE: &str = "students.json";
pub const HISTORY_FILE: &str = "history.json";

/// File-backed store: `students.json` and `history.json` inside one data
/// directory.
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    /// Open the store rooted at `dir`, creating the directory and empty
    /// documents on first run. Existing documents are left untouched.
    pub fn open(dir: impl Into<PathBuf>) -> AppResult<Self> {
        let store = Self { dir: dir.into() };

        fs::create_dir_all(&store.dir).map_err(|e| {
            AppError::Storage(format!("cannot create {}: {e}", store.dir.display()))
        })?;

        for path in [store.students_path(), store.history_path()] {
            if !path.exists() {
                write_document::<Student>(&path, &[])?;
            }
        }

        Ok(store)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn students_path(&self) -> PathBuf {
        self.dir.join(STUDENTS_FILE)
    }

    pub fn history_path(&self) -> PathBuf {
        self.dir.join(HISTORY_FILE)
    }
}

impl Store for JsonStore {
    fn load_roster(&self) -> AppResult<Vec<Student>> {
        read_document(&self.students_path())
    }

    fn save_roster(&mut self, roster: &[Student]) -> AppResult<()> {
        write_document(&self.students_path(), roster)
    }

    fn load_history(&self) -> AppResult<Vec<HistoryRecord>> {
        read_document(&self.history_path())
    }

    fn save_history(&mut self, history: &[HistoryRecord]) -> AppResult<()> {
        write_document(&self.history_path(), history)
    }
}

fn read_document<T: DeserializeOwned>(path: &Path) -> AppResult<Vec<T>> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::Storage(format!("cannot read {}: {e}", path.display())))?;

    serde_json::from_str(&content)
        .map_err(|e| AppError::Storage(format!("corrupt document {}: {e}", path.display())))
}

/// Replace `path` atomically: write a sibling temp file, flush it to disk,
/// then rename it over the target. A failure leaves the old document intact.
fn write_document<T: Serialize>(path: &Path, items: &[T]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(items)
        .map_err(|e| AppError::Storage(format!("cannot encode {}: {e}", path.display())))?;

    let tmp = path.with_extension("json.tmp");
    let write_err = |e: std::io::Error| {
        AppError::Storage(format!("cannot write {}: {e}", path.display()))
    };

    let mut file = fs::File::create(&tmp).map_err(write_err)?;
    file.write_all(json.as_bytes()).map_err(write_err)?;
    file.sync_all().map_err(write_err)?;
    drop(file);

    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(write_err(e));
    }

    Ok(())
}
