//! Record types for recipebox
//!
//! This module defines the foundational types:
//! - RecordId: Opaque unique identifier for a record
//! - RecipeRecord: The stored entity, one per recipe
//! - RecipeDraft: Caller-supplied fields for create/update
//!
//! Tags are stored exactly as entered (a single comma-separated string);
//! splitting and normalization happen only at filter time so the persisted
//! schema stays compatible with exports from other installations.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque unique identifier for a recipe record
///
/// Freshly minted ids are UUID v4 strings, but the wrapper holds an
/// arbitrary string so that ids carried in from imported files survive
/// verbatim. Uniqueness within a collection is a repository invariant,
/// not a property of the id itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Mint a new random RecordId using UUID v4
    pub fn mint() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap an existing identifier (e.g. one carried in an imported file)
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// The identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One recipe entry, the system's only entity
///
/// All text fields are free-form. `date` is an ISO-like string when present
/// (`YYYY-MM-DD` as produced by date inputs); `photo` is a self-contained
/// encoded image payload (a data URL) when present. Optional fields
/// serialize as `null`, and records read back from snapshots or imports
/// tolerate missing text fields by defaulting them to empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeRecord {
    /// Unique identifier, assigned at creation, immutable thereafter
    pub id: RecordId,
    /// Display name (non-empty, enforced by the caller)
    #[serde(default)]
    pub title: String,
    /// Free-text owner name; empty renders as "Unknown" but is stored as-is
    #[serde(default)]
    pub author: String,
    /// Optional calendar date, ISO-like string
    #[serde(default)]
    pub date: Option<String>,
    /// Single comma-separated free-text tag field, stored verbatim
    #[serde(default)]
    pub tags: String,
    /// Multi-line ingredient list, one ingredient per line
    #[serde(default)]
    pub ingredients: String,
    /// Multi-line preparation directions
    #[serde(default)]
    pub directions: String,
    /// Free-text notes
    #[serde(default)]
    pub notes: String,
    /// Optional embedded image payload (data URL)
    #[serde(default)]
    pub photo: Option<String>,
}

/// The field set supplied to create/update — everything except the id
///
/// On update, `photo: None` means "keep the record's existing photo";
/// there is no way to clear a photo once set, matching the photo
/// preservation rule of the form flow this store backs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeDraft {
    /// Display name
    pub title: String,
    /// Owner name, may be empty
    pub author: String,
    /// Calendar date; empty strings are normalized to absent
    pub date: Option<String>,
    /// Comma-separated tags
    pub tags: String,
    /// Multi-line ingredient list
    pub ingredients: String,
    /// Multi-line directions
    pub directions: String,
    /// Free-text notes
    pub notes: String,
    /// New photo payload, or `None` to keep the existing one
    pub photo: Option<String>,
}

impl RecipeDraft {
    /// Normalized date: empty strings become absent
    pub fn normalized_date(&self) -> Option<String> {
        self.date.clone().filter(|d| !d.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minted_ids_are_unique() {
        let a = RecordId::mint();
        let b = RecordId::mint();
        assert_ne!(a, b);
    }

    #[test]
    fn test_record_id_serializes_transparently() {
        let id = RecordId::from_string("abc-123");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"abc-123\"");
        let back: RecordId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_record_round_trips_through_json() {
        let record = RecipeRecord {
            id: RecordId::mint(),
            title: "Lemon Bars".to_string(),
            author: "Grandma".to_string(),
            date: Some("2024-06-01".to_string()),
            tags: "dessert, baking".to_string(),
            ingredients: "lemons\nsugar\nflour".to_string(),
            directions: "Mix.\nBake.".to_string(),
            notes: "Double the zest.".to_string(),
            photo: None,
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: RecipeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_record_tolerates_missing_fields() {
        let record: RecipeRecord = serde_json::from_str(r#"{"id":"x1","title":"Toast"}"#).unwrap();
        assert_eq!(record.id.as_str(), "x1");
        assert_eq!(record.title, "Toast");
        assert_eq!(record.author, "");
        assert_eq!(record.date, None);
        assert_eq!(record.photo, None);
    }

    #[test]
    fn test_optional_fields_accept_null() {
        let record: RecipeRecord =
            serde_json::from_str(r#"{"id":"x2","title":"Soup","date":null,"photo":null}"#).unwrap();
        assert_eq!(record.date, None);
        assert_eq!(record.photo, None);
    }

    #[test]
    fn test_draft_normalizes_empty_date() {
        let draft = RecipeDraft {
            date: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(draft.normalized_date(), None);

        let draft = RecipeDraft {
            date: Some("2023-11-23".to_string()),
            ..Default::default()
        };
        assert_eq!(draft.normalized_date(), Some("2023-11-23".to_string()));
    }
}
