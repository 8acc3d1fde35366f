//! Card rendering for recipebox
//!
//! Pure document generation: each function maps one record to a value,
//! with no filesystem or display access. Opening, printing, or saving the
//! generated documents is the embedder's responsibility.
//!
//! - `render_detail`: full-page standalone document for one record
//! - `render_print_card`: fixed 3×5 inch single-page print card
//! - `summarize`: the compact data a list row needs
//!
//! All user-supplied text is HTML-escaped before embedding. Photo
//! payloads are embedded verbatim: they are trusted to be well-formed
//! encoded images produced by the embedder's file-read step.

pub mod card;
pub mod detail;
pub mod document;
pub mod summary;
pub mod text;

pub use card::render_print_card;
pub use detail::render_detail;
pub use document::HtmlDocument;
pub use summary::{summarize, CardSummary};
pub use text::{escape_html, format_date};
