//! Blob storage for recipebox
//!
//! The persisted form of a collection is a single JSON array of records
//! held under a single key. This crate defines the `BlobStore` trait and
//! two implementations:
//!
//! - `FileBlobStore`: one JSON file on disk (the path is the key)
//! - `MemoryBlobStore`: an in-process snapshot, for tests and ephemeral use
//!
//! Both are fail-soft: a missing or corrupt snapshot loads as an empty
//! collection, and write failures are logged and absorbed so that the
//! in-memory collection stays authoritative for the rest of the session.

pub mod blob;
pub mod file;
pub mod memory;

pub use blob::BlobStore;
pub use file::FileBlobStore;
pub use memory::MemoryBlobStore;
