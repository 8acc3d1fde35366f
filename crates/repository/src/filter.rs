//! FilterEngine: derived tag/author sets and the search predicate
//!
//! Tags live in each record as one comma-separated string; all splitting
//! and normalization happens here so the stored schema never changes.
//! The filter clauses are conjunctive: a record must pass the tag clause,
//! the author clause, and the free-text clause to be included.

use recipebox_core::RecipeRecord;

/// Distinct tags across the collection
///
/// Splits each record's tag field on commas, trims whitespace, and drops
/// empty entries. Case is preserved as stored; order is first occurrence.
pub fn distinct_tags(records: &[RecipeRecord]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for record in records {
        for tag in record.tags.split(',') {
            let tag = tag.trim();
            if !tag.is_empty() && !tags.iter().any(|t| t == tag) {
                tags.push(tag.to_string());
            }
        }
    }
    tags
}

/// Distinct non-empty authors across the collection, verbatim
///
/// Order is first occurrence.
pub fn distinct_authors(records: &[RecipeRecord]) -> Vec<String> {
    let mut authors: Vec<String> = Vec::new();
    for record in records {
        if !record.author.is_empty() && !authors.iter().any(|a| a == &record.author) {
            authors.push(record.author.clone());
        }
    }
    authors
}

/// Order-preserving filtered view of the collection
///
/// A record is included iff all three clauses pass:
/// 1. `tag` empty, or the record's tag set contains `tag` (case-insensitive)
/// 2. `author` empty, or the record's author equals `author` (case-insensitive)
/// 3. `query` (trimmed) empty, or the concatenation of title, ingredients,
///    directions, and notes contains `query` as a case-insensitive substring
pub fn filter<'a>(
    records: &'a [RecipeRecord],
    query: &str,
    tag: &str,
    author: &str,
) -> Vec<&'a RecipeRecord> {
    let query = query.trim().to_lowercase();
    let tag = tag.to_lowercase();
    let author = author.to_lowercase();

    records
        .iter()
        .filter(|r| {
            if !tag.is_empty()
                && !r
                    .tags
                    .split(',')
                    .any(|t| t.trim().to_lowercase() == tag)
            {
                return false;
            }
            if !author.is_empty() && r.author.to_lowercase() != author {
                return false;
            }
            if query.is_empty() {
                return true;
            }
            let haystack = format!(
                "{} {} {} {}",
                r.title, r.ingredients, r.directions, r.notes
            )
            .to_lowercase();
            haystack.contains(&query)
        })
        .collect()
}
