//! 3×5 inch print card document for one record
//!
//! The card declares a fixed physical page size and lays out a single
//! page: title, compact author/date line, an optional photo cropped to a
//! fixed band, line-wrapped ingredients and directions, and notes pinned
//! to the bottom. A deferred script triggers the host print action
//! shortly after load.

use crate::document::HtmlDocument;
use crate::text::{display_author, escape_html, format_date};
use recipebox_core::RecipeRecord;

const PRINT_CSS: &str = r#"
    @page { size: 3in 5in; margin: 0; }
    body { margin: 0; font-family: Inter, system-ui, -apple-system, "Segoe UI", Roboto, Arial; }
    .print-card { box-sizing: border-box; width: 3in; height: 5in; padding: 0.35in; color: #111; background: #fff; display:flex; flex-direction:column; gap:0.3rem; }
    .print-card h1 { font-size: 1.1rem; margin:0; line-height:1.05; }
    .print-meta { font-size:0.75rem; color:#666; }
    .print-photo { width:100%; height:1.3in; object-fit:cover; border-radius:4px; display:block; }
    .print-section-title { font-weight:600; font-size:0.85rem; margin-top:0.25rem; }
    .print-ingredients, .print-directions { font-size:0.78rem; overflow:hidden; }
    .print-notes { font-size:0.7rem; color:#444; margin-top:auto; }
"#;

/// One `<div>` per newline-delimited input line, each escaped
///
/// Empty lines become empty elements so the printed line count matches
/// the input line count.
fn lines_to_divs(text: &str) -> String {
    text.split('\n')
        .map(|line| format!("<div>{}</div>", escape_html(line)))
        .collect()
}

/// Render a record as a fixed-size print card
pub fn render_print_card(record: &RecipeRecord) -> HtmlDocument {
    let title = escape_html(&record.title);
    let author = escape_html(display_author(&record.author));
    let date_part = match record.date.as_deref() {
        Some(date) => format!(" · {}", escape_html(&format_date(date))),
        None => String::new(),
    };
    let photo_html = match record.photo.as_deref() {
        Some(photo) => format!(r#"<img class="print-photo" src="{photo}" alt="{title}">"#),
        None => String::new(),
    };

    let html = format!(
        r#"<!doctype html>
<html>
<head>
  <meta charset="utf-8"/>
  <title>{title}</title>
  <style>{PRINT_CSS}</style>
</head>
<body>
  <div class="print-card" role="article" aria-label="{title}">
    <h1>{title}</h1>
    <div class="print-meta"><strong>{author}</strong>{date_part}</div>
    {photo_html}
    <div class="print-section">
      <div class="print-section-title">Ingredients</div>
      <div class="print-ingredients">{ingredients}</div>
    </div>
    <div class="print-section">
      <div class="print-section-title">Directions</div>
      <div class="print-directions">{directions}</div>
    </div>
    <div class="print-notes">{notes}</div>
  </div>
  <script>window.onload = () => {{ setTimeout(() => {{ window.print(); }}, 120); }};</script>
</body>
</html>"#,
        ingredients = lines_to_divs(&record.ingredients),
        directions = lines_to_divs(&record.directions),
        notes = escape_html(&record.notes),
    );
    HtmlDocument::new(html)
}
