//! End-to-end rendering tests
//!
//! Records flow from the repository into both generated documents; the
//! escaping guarantee must hold for every user-supplied field.

mod common;

use common::*;
use recipebox::{render_detail, render_print_card, summarize, RecipeDraft, RecipeRepository};

#[test]
fn hostile_title_is_escaped_in_both_documents() {
    let mut repo = RecipeRepository::ephemeral();
    let id = repo
        .create(RecipeDraft {
            title: r#"<script>alert("pwn")</script>"#.to_string(),
            ..Default::default()
        })
        .id
        .clone();

    let record = repo.find_by_id(&id).unwrap();
    for doc in [render_detail(record), render_print_card(record)] {
        assert!(!doc.as_str().contains("<script>alert"));
        assert!(doc.as_str().contains("&lt;script&gt;alert(&quot;pwn&quot;)&lt;/script&gt;"));
    }
}

#[test]
fn print_card_preserves_line_counts() {
    let mut repo = RecipeRepository::ephemeral();
    let id = repo
        .create(RecipeDraft {
            title: "Stock".to_string(),
            directions: "Roast bones.\n\nSimmer overnight.".to_string(),
            ..Default::default()
        })
        .id
        .clone();

    let doc = render_print_card(repo.find_by_id(&id).unwrap());
    assert!(doc
        .as_str()
        .contains("<div>Roast bones.</div><div></div><div>Simmer overnight.</div>"));
}

#[test]
fn summary_reflects_stored_record() {
    let mut repo = RecipeRepository::ephemeral();
    let id = repo.create(full_draft("Minestrone", "", "soup")).id.clone();

    let summary = summarize(repo.find_by_id(&id).unwrap());
    assert_eq!(summary.title, "Minestrone");
    assert_eq!(summary.author, "Unknown");
    assert_eq!(summary.excerpt, "one, two, three");
    assert_eq!(summary.formatted_date, "1/2/2024");
    assert!(!summary.has_photo);
}
