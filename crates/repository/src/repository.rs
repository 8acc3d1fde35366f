//! RecipeRepository: owner of the canonical record collection
//!
//! ## Design
//!
//! The repository holds the ordered collection in memory and a boxed
//! `BlobStore` for persistence. It is loaded once at construction and is
//! the only writer to the store. Every mutating operation triggers exactly
//! one persist call after the in-memory change, so the persisted snapshot
//! never lags more than one operation behind memory. There is no rollback:
//! persist failures are absorbed inside the store and the in-memory
//! collection stays authoritative for the session.
//!
//! ## Ordering
//!
//! Insertion order is display order. New records are prepended
//! (most-recent-first); updates keep the record's position.

use recipebox_core::{Error, RecipeDraft, RecipeRecord, RecordId, Result};
use recipebox_storage::{BlobStore, MemoryBlobStore};
use tracing::debug;

use crate::codec;

/// In-memory owner of the canonical record collection
pub struct RecipeRepository {
    records: Vec<RecipeRecord>,
    store: Box<dyn BlobStore>,
}

impl RecipeRepository {
    /// Open a repository, loading the collection from the given store
    ///
    /// A missing or corrupt snapshot loads as an empty collection; the
    /// store's failure policy guarantees this cannot fail.
    pub fn open(store: Box<dyn BlobStore>) -> Self {
        let records = store.load();
        debug!(count = records.len(), "Opened repository");
        Self { records, store }
    }

    /// Open an ephemeral repository backed by an in-memory store
    ///
    /// Nothing outlives the repository instance. Intended for tests and
    /// embedders that manage persistence themselves.
    pub fn ephemeral() -> Self {
        Self::open(Box::new(MemoryBlobStore::new()))
    }

    fn persist(&self) {
        self.store.save(&self.records);
    }

    /// Create a record from the draft, prepend it, and persist
    ///
    /// Mints a fresh id. Returns the stored record, which is at index 0
    /// of `list_all`.
    pub fn create(&mut self, draft: RecipeDraft) -> &RecipeRecord {
        let date = draft.normalized_date();
        let record = RecipeRecord {
            id: RecordId::mint(),
            title: draft.title,
            author: draft.author,
            date,
            tags: draft.tags,
            ingredients: draft.ingredients,
            directions: draft.directions,
            notes: draft.notes,
            photo: draft.photo,
        };
        self.records.insert(0, record);
        self.persist();
        &self.records[0]
    }

    /// Replace all fields of the record with `id` except the id itself
    ///
    /// The record keeps its position in the collection. A draft with no
    /// photo keeps the record's existing photo rather than clearing it.
    ///
    /// # Errors
    /// `Error::NotFound` if no record has `id`; the collection is left
    /// unchanged.
    pub fn update(&mut self, id: &RecordId, draft: RecipeDraft) -> Result<&RecipeRecord> {
        let date = draft.normalized_date();
        let Some(pos) = self.records.iter().position(|r| &r.id == id) else {
            return Err(Error::NotFound(id.clone()));
        };

        let existing = &mut self.records[pos];
        let photo = draft.photo.or_else(|| existing.photo.clone());
        let id = existing.id.clone();
        *existing = RecipeRecord {
            id,
            title: draft.title,
            author: draft.author,
            date,
            tags: draft.tags,
            ingredients: draft.ingredients,
            directions: draft.directions,
            notes: draft.notes,
            photo,
        };
        self.persist();
        Ok(&self.records[pos])
    }

    /// Remove the record with `id` if present
    ///
    /// Returns whether anything was removed and persists either way, so
    /// the snapshot always reflects the collection after the call. A
    /// second delete of the same id returns `false` and leaves the
    /// collection unchanged.
    pub fn delete(&mut self, id: &RecordId) -> bool {
        let before = self.records.len();
        self.records.retain(|r| &r.id != id);
        self.persist();
        self.records.len() != before
    }

    /// Look up a record by id
    pub fn find_by_id(&self, id: &RecordId) -> Option<&RecipeRecord> {
        self.records.iter().find(|r| &r.id == id)
    }

    /// The full collection in display order (read-only view)
    pub fn list_all(&self) -> &[RecipeRecord] {
        &self.records
    }

    /// Number of records in the collection
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Empty the collection and remove the persisted snapshot
    pub fn clear(&mut self) {
        self.records.clear();
        self.store.clear();
    }

    /// Set the collection verbatim and persist (the import path)
    pub fn replace_all(&mut self, records: Vec<RecipeRecord>) {
        self.records = records;
        self.persist();
    }

    /// Export the full collection as pretty-printed JSON
    ///
    /// # Errors
    /// `Error::Serialization` if encoding fails.
    pub fn export_json(&self) -> Result<String> {
        codec::export(&self.records)
    }

    /// Merge an exported JSON array into the collection and persist
    ///
    /// Incoming records overwrite existing records sharing an id; see
    /// [`codec::import_merge`] for the ordering contract. Returns the
    /// resulting collection size.
    ///
    /// # Errors
    /// `Error::InvalidImportFormat` if `text` is not a JSON array of
    /// records; the collection is left unchanged.
    pub fn import_merge(&mut self, text: &str) -> Result<usize> {
        let merged = codec::import_merge(&self.records, text)?;
        debug!(count = merged.len(), "Merged import into collection");
        self.replace_all(merged);
        Ok(self.records.len())
    }
}
