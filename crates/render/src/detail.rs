//! Full-detail standalone document for one record

use crate::document::HtmlDocument;
use crate::text::{display_author, escape_html, format_date};
use recipebox_core::RecipeRecord;

const DETAIL_CSS: &str = "body{font-family:Arial,Helvetica,sans-serif;padding:20px;color:#111}\
h1{margin-top:0}\
pre{white-space:pre-wrap;font-family:inherit}\
button{padding:.4rem .6rem;border-radius:6px;border:1px solid #888;background:#eee;cursor:pointer}";

/// Render a record as a full-page document
///
/// Escaped title (also the page title), a "By:" line defaulting to
/// "Unknown" with the formatted date when present, the full-size photo
/// when present, ingredients and directions as preformatted blocks, and
/// notes as plain text. Includes a button wired to the host print action;
/// triggering it is the viewer's choice, unlike the print card.
pub fn render_detail(record: &RecipeRecord) -> HtmlDocument {
    let title = escape_html(&record.title);
    let author = escape_html(display_author(&record.author));
    let date_part = match record.date.as_deref() {
        Some(date) => format!(" · {}", escape_html(&format_date(date))),
        None => String::new(),
    };
    let photo_html = match record.photo.as_deref() {
        Some(photo) => format!(
            r#"<img style="max-width:100%;height:auto;border-radius:6px;margin:.5rem 0" src="{photo}" alt="{title}">"#
        ),
        None => String::new(),
    };

    let html = format!(
        "<html><head><meta charset=\"utf-8\"/><title>{title}</title><style>{DETAIL_CSS}</style></head>\
<body><button onclick=\"window.print()\">Print</button>\
<h1>{title}</h1>\
<p><strong>By:</strong> {author}{date_part}</p>\
{photo_html}\
<h2>Ingredients</h2><pre>{ingredients}</pre>\
<h2>Directions</h2><pre>{directions}</pre>\
<h3>Notes</h3><p>{notes}</p>\
</body></html>",
        ingredients = escape_html(&record.ingredients),
        directions = escape_html(&record.directions),
        notes = escape_html(&record.notes),
    );
    HtmlDocument::new(html)
}
