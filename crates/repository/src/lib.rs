//! Record collection management for recipebox
//!
//! This crate owns the canonical in-memory collection:
//!
//! - `RecipeRepository`: ordered collection of records with create/update/
//!   delete/find/replace operations, the sole writer to the blob store
//! - `filter`: derived tag/author sets and the conjunctive search predicate
//! - `codec`: portable JSON export and merge-import keyed by record id

pub mod codec;
pub mod filter;
pub mod repository;

pub use codec::{export, import_merge, EXPORT_FILE_NAME};
pub use filter::{distinct_authors, distinct_tags, filter};
pub use repository::RecipeRepository;
