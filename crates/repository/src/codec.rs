//! Export/import codec: portable JSON transfer of whole collections
//!
//! ## Export
//!
//! The export format is a pretty-printed JSON array of records, the same
//! schema as the persisted snapshot, suitable for a downloadable file.
//!
//! ## Merge-import
//!
//! Import reconciles an externally supplied array with the current
//! collection, keyed by record id, last write wins:
//!
//! - incoming records overwrite existing records sharing the same id,
//!   in place (the existing position is kept)
//! - records only in the existing collection are kept
//! - result order is existing order first, then newly introduced ids in
//!   input order
//!
//! Anything that is not a JSON array of record objects fails the whole
//! import; no partial merge is ever applied.

use recipebox_core::{Error, RecipeRecord, RecordId, Result};
use serde::Deserialize;
use std::collections::HashMap;

/// Canonical file name for a downloaded export
pub const EXPORT_FILE_NAME: &str = "family-recipes.json";

/// Serialize the full collection as pretty-printed JSON
///
/// # Errors
/// `Error::Serialization` if encoding fails.
pub fn export(records: &[RecipeRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// One element of an imported array
///
/// Lenient shape: every field is optional so that hand-edited or foreign
/// exports still import. A missing or empty id gets a freshly minted one.
#[derive(Debug, Default, Deserialize)]
struct ImportedRecord {
    #[serde(default)]
    id: Option<RecordId>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    author: String,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    tags: String,
    #[serde(default)]
    ingredients: String,
    #[serde(default)]
    directions: String,
    #[serde(default)]
    notes: String,
    #[serde(default)]
    photo: Option<String>,
}

impl ImportedRecord {
    fn into_record(self) -> RecipeRecord {
        let id = self
            .id
            .filter(|id| !id.as_str().is_empty())
            .unwrap_or_else(RecordId::mint);
        RecipeRecord {
            id,
            title: self.title,
            author: self.author,
            date: self.date,
            tags: self.tags,
            ingredients: self.ingredients,
            directions: self.directions,
            notes: self.notes,
            photo: self.photo,
        }
    }
}

/// Merge an imported JSON array into an existing collection
///
/// Returns the merged collection; the input slices are untouched, so a
/// failed import leaves the caller's state exactly as it was.
///
/// # Errors
/// `Error::InvalidImportFormat` if `text` is not valid JSON, not an
/// array, or contains elements that do not deserialize as records.
pub fn import_merge(existing: &[RecipeRecord], text: &str) -> Result<Vec<RecipeRecord>> {
    let value: serde_json::Value = serde_json::from_str(text)
        .map_err(|e| Error::InvalidImportFormat(format!("not valid JSON: {e}")))?;

    let serde_json::Value::Array(items) = value else {
        return Err(Error::InvalidImportFormat(
            "expected a JSON array of recipes".to_string(),
        ));
    };

    // Deserialize every element before touching the result: all-or-nothing.
    let incoming = items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            serde_json::from_value::<ImportedRecord>(item)
                .map(ImportedRecord::into_record)
                .map_err(|e| Error::InvalidImportFormat(format!("entry {i}: {e}")))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut merged: Vec<RecipeRecord> = existing.to_vec();
    let mut index: HashMap<RecordId, usize> = merged
        .iter()
        .enumerate()
        .map(|(i, r)| (r.id.clone(), i))
        .collect();

    for record in incoming {
        match index.get(&record.id) {
            Some(&pos) => merged[pos] = record,
            None => {
                index.insert(record.id.clone(), merged.len());
                merged.push(record);
            }
        }
    }

    Ok(merged)
}
