//! MemoryBlobStore: in-process snapshot for tests and ephemeral use
//!
//! Holds the serialized snapshot text rather than the records themselves
//! so that the same serialize/deserialize path as the file store is
//! exercised, corrupt-snapshot behavior included.

use crate::blob::BlobStore;
use recipebox_core::RecipeRecord;
use std::cell::RefCell;
use tracing::warn;

/// In-memory blob store holding the serialized snapshot text
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    snapshot: RefCell<Option<String>>,
}

impl MemoryBlobStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with raw snapshot text
    ///
    /// Useful for testing load behavior against arbitrary (including
    /// malformed) persisted content.
    pub fn with_snapshot(text: impl Into<String>) -> Self {
        Self {
            snapshot: RefCell::new(Some(text.into())),
        }
    }

    /// The current raw snapshot text, if any
    pub fn snapshot_text(&self) -> Option<String> {
        self.snapshot.borrow().clone()
    }
}

impl BlobStore for MemoryBlobStore {
    fn load(&self) -> Vec<RecipeRecord> {
        let snapshot = self.snapshot.borrow();
        let Some(text) = snapshot.as_deref() else {
            return Vec::new();
        };
        match serde_json::from_str(text) {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, "Corrupt in-memory snapshot, starting empty");
                Vec::new()
            }
        }
    }

    fn save(&self, records: &[RecipeRecord]) {
        match serde_json::to_string(records) {
            Ok(text) => *self.snapshot.borrow_mut() = Some(text),
            Err(e) => warn!(error = %e, "Failed to serialize collection, snapshot unchanged"),
        }
    }

    fn clear(&self) {
        *self.snapshot.borrow_mut() = None;
    }
}
