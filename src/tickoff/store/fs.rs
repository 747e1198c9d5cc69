use super::TodoStore;
use crate::error::{Result, TickoffError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const DEFAULT_DATA_FILE: &str = "todos.json";

/// Keeps a [`TodoStore`] snapshot in a single JSON file.
///
/// The whole store, id counter included, is rewritten on every save through a
/// temporary file renamed over the list, so a crash mid-save leaves the old
/// list in place. A missing file loads as an empty store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<dir>/todos.json`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(DEFAULT_DATA_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<TodoStore> {
        if !self.path.exists() {
            return Ok(TodoStore::new());
        }
        let content = fs::read_to_string(&self.path).map_err(TickoffError::Io)?;
        if content.trim().is_empty() {
            return Ok(TodoStore::new());
        }
        let store: TodoStore =
            serde_json::from_str(&content).map_err(TickoffError::Serialization)?;
        info!(path = %self.path.display(), todos = store.len(), "loaded todos");
        Ok(store)
    }

    pub fn save(&self, store: &TodoStore) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(TickoffError::Io)?;
            }
        }
        let content = serde_json::to_string_pretty(store).map_err(TickoffError::Serialization)?;

        let tmp_path = self.tmp_path();
        let written =
            fs::write(&tmp_path, content).and_then(|_| fs::rename(&tmp_path, &self.path));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp_path);
            return Err(TickoffError::Io(e));
        }
        info!(path = %self.path.display(), todos = store.len(), "saved todos");
        Ok(())
    }

    /// Sibling of the list file, so the rename stays on one filesystem.
    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string());
        self.path
            .with_file_name(format!(".{}.{}.tmp", name, std::process::id()))
    }
}
