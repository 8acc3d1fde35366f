//! Error types for recipebox
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Storage-layer failures never appear here: the blob store absorbs them
//! (substituting an empty collection on read, logging on write) so that
//! callers only ever see the outcomes below.

use crate::record::RecordId;
use std::io;
use thiserror::Error;

/// Result type alias for recipebox operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the recipebox record store
#[derive(Debug, Error)]
pub enum Error {
    /// Operation referenced a record id that is not in the collection
    #[error("Record not found: {0}")]
    NotFound(RecordId),

    /// Imported content did not parse as a JSON array of records
    #[error("Invalid import format: {0}")]
    InvalidImportFormat(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O error (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
