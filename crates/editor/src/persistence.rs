//! Snapshot storage backends.
//!
//! The editor never touches storage itself; hosts pass a [`SnapshotStore`]
//! to [`Editor::save_to`] and [`Editor::restore_from`].
//!
//! - [`MemoryStore`]: in-memory, for tests and ephemeral sessions
//! - [`AutosaveFile`]: JSON file, written via temp file + rename

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::editor::Editor;
use crate::error::EditorError;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Editor(#[from] EditorError),

    #[error("no data directory available on this platform")]
    Unavailable,
}

pub type PersistenceResult<T = ()> = Result<T, PersistenceError>;

/// Somewhere a serialized scene can be kept between sessions
pub trait SnapshotStore {
    /// Store a snapshot, replacing the previous one
    fn save(&mut self, snapshot: &str) -> PersistenceResult;

    /// Most recently saved snapshot, `None` if nothing was saved yet
    fn load(&self) -> PersistenceResult<Option<String>>;
}

/// Keeps the last snapshot in memory
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    snapshot: Option<String>,
}

impl SnapshotStore for MemoryStore {
    fn save(&mut self, snapshot: &str) -> PersistenceResult {
        self.snapshot = Some(snapshot.to_string());
        Ok(())
    }

    fn load(&self) -> PersistenceResult<Option<String>> {
        Ok(self.snapshot.clone())
    }
}

/// Snapshot file on disk
#[derive(Debug, Clone)]
pub struct AutosaveFile {
    path: PathBuf,
}

impl AutosaveFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// `autosave.json` in the platform data directory
    pub fn default_location() -> PersistenceResult<Self> {
        let dirs = directories::ProjectDirs::from("com", "seatmap", "seatmap-editor")
            .ok_or(PersistenceError::Unavailable)?;
        Ok(Self::new(dirs.data_dir().join("autosave.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone();
        tmp.set_extension("json.tmp");
        tmp
    }
}

impl SnapshotStore for AutosaveFile {
    fn save(&mut self, snapshot: &str) -> PersistenceResult {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp = self.temp_path();
        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(snapshot.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &self.path)?;

        tracing::debug!("Autosaved {} bytes to {}", snapshot.len(), self.path.display());
        Ok(())
    }

    fn load(&self) -> PersistenceResult<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&self.path)?))
    }
}

impl Editor {
    /// Write the current scene to a store
    pub fn save_to(&self, store: &mut impl SnapshotStore) -> PersistenceResult {
        store.save(&self.snapshot())
    }

    /// Load the store's snapshot, if any. Returns whether a scene was loaded.
    pub fn restore_from(&mut self, store: &impl SnapshotStore) -> PersistenceResult<bool> {
        let Some(snapshot) = store.load()? else {
            return Ok(false);
        };
        self.load_snapshot(&snapshot)?;
        Ok(true)
    }
}
