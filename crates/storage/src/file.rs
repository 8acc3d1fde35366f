//! FileBlobStore: JSON snapshot file on disk
//!
//! The snapshot is a single JSON array written with one `fs::write` call
//! per save. The file path acts as the storage key. Parent directories
//! are created on first save.

use crate::blob::BlobStore;
use recipebox_core::RecipeRecord;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File-backed blob store holding one JSON array of records
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    path: PathBuf,
}

impl FileBlobStore {
    /// Create a store backed by the given snapshot file path
    ///
    /// The file is not touched until the first `save`; a nonexistent file
    /// loads as an empty collection.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The snapshot file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BlobStore for FileBlobStore {
    fn load(&self) -> Vec<RecipeRecord> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No snapshot file, starting empty");
                return Vec::new();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to read snapshot, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<RecipeRecord>>(&text) {
            Ok(records) => {
                debug!(path = %self.path.display(), count = records.len(), "Loaded snapshot");
                records
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Corrupt snapshot, starting empty");
                Vec::new()
            }
        }
    }

    fn save(&self, records: &[RecipeRecord]) {
        let text = match serde_json::to_string(records) {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "Failed to serialize collection, snapshot not written");
                return;
            }
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(e) = fs::create_dir_all(parent) {
                    warn!(path = %parent.display(), error = %e, "Failed to create snapshot directory");
                    return;
                }
            }
        }

        match fs::write(&self.path, text) {
            Ok(()) => debug!(path = %self.path.display(), count = records.len(), "Saved snapshot"),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to write snapshot, in-memory state remains authoritative");
            }
        }
    }

    fn clear(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "Removed snapshot"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!(path = %self.path.display(), error = %e, "Failed to remove snapshot"),
        }
    }
}
