//! Core types for recipebox
//!
//! This crate defines the foundational types used throughout the system:
//! - RecordId: Unique identifier for recipe records
//! - RecipeRecord: The sole stored entity (title, author, tags, body fields, photo)
//! - RecipeDraft: The field set supplied when creating or updating a record
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod record;

pub use error::{Error, Result};
pub use record::{RecipeDraft, RecipeRecord, RecordId};
