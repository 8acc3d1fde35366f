//! Shared fixtures for integration tests

// Not every test binary uses every helper.
#![allow(dead_code)]

use recipebox::{RecipeDraft, RecipeRecord, RecordId};

/// Initialize test logging (idempotent across tests in one binary)
pub fn init_logging() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

pub fn draft(title: &str) -> RecipeDraft {
    RecipeDraft {
        title: title.to_string(),
        ..Default::default()
    }
}

pub fn full_draft(title: &str, author: &str, tags: &str) -> RecipeDraft {
    RecipeDraft {
        title: title.to_string(),
        author: author.to_string(),
        date: Some("2024-01-02".to_string()),
        tags: tags.to_string(),
        ingredients: "one\ntwo\nthree\nfour".to_string(),
        directions: "Mix.\nCook.".to_string(),
        notes: "A note.".to_string(),
        photo: None,
    }
}

pub fn record(id: &str, title: &str, tags: &str, author: &str) -> RecipeRecord {
    RecipeRecord {
        id: RecordId::from_string(id),
        title: title.to_string(),
        author: author.to_string(),
        date: None,
        tags: tags.to_string(),
        ingredients: String::new(),
        directions: String::new(),
        notes: String::new(),
        photo: None,
    }
}
