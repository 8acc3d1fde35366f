//! Compact list-row data for one record

use crate::text::{display_author, format_date};
use recipebox_core::RecipeRecord;

/// How many ingredient lines the excerpt keeps
const EXCERPT_LINES: usize = 3;

/// The data a list row needs, precomputed from one record
///
/// Plain values, not markup: list rendering is the embedder's concern,
/// and set-as-text APIs need no escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSummary {
    /// Record title, verbatim
    pub title: String,
    /// Author with the "Unknown" default applied
    pub author: String,
    /// Display-formatted date, empty when absent
    pub formatted_date: String,
    /// First few ingredient lines joined with ", "
    pub excerpt: String,
    /// Tag field verbatim
    pub tags: String,
    /// Whether a photo payload is present
    pub has_photo: bool,
}

/// Summarize a record for a list row
pub fn summarize(record: &RecipeRecord) -> CardSummary {
    let excerpt = record
        .ingredients
        .split('\n')
        .take(EXCERPT_LINES)
        .collect::<Vec<_>>()
        .join(", ");

    CardSummary {
        title: record.title.clone(),
        author: display_author(&record.author).to_string(),
        formatted_date: record.date.as_deref().map(format_date).unwrap_or_default(),
        excerpt,
        tags: record.tags.clone(),
        has_photo: record.photo.is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipebox_core::RecordId;

    fn record() -> RecipeRecord {
        RecipeRecord {
            id: RecordId::mint(),
            title: "Minestrone".to_string(),
            author: String::new(),
            date: Some("2022-03-09".to_string()),
            tags: "soup, dinner".to_string(),
            ingredients: "beans\ncarrots\ncelery\nonion\npasta".to_string(),
            directions: String::new(),
            notes: String::new(),
            photo: None,
        }
    }

    #[test]
    fn test_excerpt_keeps_first_three_lines() {
        let summary = summarize(&record());
        assert_eq!(summary.excerpt, "beans, carrots, celery");
    }

    #[test]
    fn test_short_ingredient_lists_pass_through() {
        let mut r = record();
        r.ingredients = "water".to_string();
        assert_eq!(summarize(&r).excerpt, "water");
    }

    #[test]
    fn test_author_default_and_date_formatting() {
        let summary = summarize(&record());
        assert_eq!(summary.author, "Unknown");
        assert_eq!(summary.formatted_date, "3/9/2022");

        let mut r = record();
        r.date = None;
        assert_eq!(summarize(&r).formatted_date, "");
    }

    #[test]
    fn test_reports_photo_presence() {
        let mut r = record();
        assert!(!summarize(&r).has_photo);
        r.photo = Some("data:image/png;base64,AAAA".to_string());
        assert!(summarize(&r).has_photo);
    }
}
