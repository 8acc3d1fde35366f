//! BlobStore: the persistence seam
//!
//! ## Design
//!
//! A blob store holds exactly one serialized snapshot — the whole record
//! collection as a JSON array. There are no per-record operations and no
//! incremental writes: every `save` replaces the entire snapshot, so the
//! persisted state is never observably more than one operation behind the
//! in-memory collection.
//!
//! ## Failure policy
//!
//! No method returns a `Result`. Read failures substitute an empty
//! collection; write failures are logged and dropped. The repository is
//! the single writer and treats its in-memory state as the source of
//! truth for the remainder of the session.

use recipebox_core::RecipeRecord;

/// Abstract persistent key-value store for the record collection
pub trait BlobStore {
    /// Load the persisted collection
    ///
    /// Returns an empty vector when the snapshot is missing or malformed.
    /// Never fails; diagnostics go to the log.
    fn load(&self) -> Vec<RecipeRecord>;

    /// Persist the full collection, replacing any previous snapshot
    ///
    /// Write failures are logged and absorbed.
    fn save(&self, records: &[RecipeRecord]);

    /// Remove the persisted snapshot unconditionally
    ///
    /// Idempotent: clearing an already-empty store is a no-op.
    fn clear(&self);
}
