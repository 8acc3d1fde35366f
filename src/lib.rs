//! Recipebox - embedded recipe-record store
//!
//! Recipebox is the core of a recipe-management application: an in-memory
//! repository of recipe records with pluggable blob-store persistence,
//! derived filtering, JSON export/merge-import, and pure HTML renderers
//! for a detail page and a 3×5 inch print card.
//!
//! # Quick Start
//!
//! ```
//! use recipebox::{RecipeDraft, RecipeRepository};
//!
//! // An ephemeral repository (in-memory persistence)
//! let mut repo = RecipeRepository::ephemeral();
//!
//! let record = repo.create(RecipeDraft {
//!     title: "Pancakes".to_string(),
//!     tags: "breakfast".to_string(),
//!     ..Default::default()
//! });
//! let id = record.id.clone();
//!
//! assert!(repo.find_by_id(&id).is_some());
//! ```
//!
//! # Architecture
//!
//! The repository owns the canonical ordered collection and is the sole
//! writer to its [`BlobStore`]. Storage failures never surface: reads
//! fall back to an empty collection and writes are logged and absorbed,
//! so the in-memory state stays authoritative for the session. Rendering
//! is pure; displaying or printing the generated documents is the
//! embedder's responsibility.

pub use recipebox_core::{Error, RecipeDraft, RecipeRecord, RecordId, Result};
pub use recipebox_render::{
    escape_html, format_date, render_detail, render_print_card, summarize, CardSummary,
    HtmlDocument,
};
pub use recipebox_repository::{
    distinct_authors, distinct_tags, export, filter, import_merge, RecipeRepository,
    EXPORT_FILE_NAME,
};
pub use recipebox_storage::{BlobStore, FileBlobStore, MemoryBlobStore};
