//! Text helpers shared by the renderers

use chrono::NaiveDate;

/// Escape text for embedding in HTML
///
/// Replaces `&`, `<`, `>`, and `"` in that order. Applied to every
/// user-supplied field before it reaches a generated document.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Format a stored date string for display
///
/// ISO `YYYY-MM-DD` input (what date pickers produce) becomes `M/D/YYYY`.
/// Anything that does not parse is shown verbatim rather than dropped.
pub fn format_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%-m/%-d/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// The author name to display: empty stored values read as "Unknown"
pub fn display_author(author: &str) -> &str {
    if author.is_empty() {
        "Unknown"
    } else {
        author
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_escapes_all_four_characters() {
        assert_eq!(
            escape_html(r#"<b>"Fish & Chips"</b>"#),
            "&lt;b&gt;&quot;Fish &amp; Chips&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_escape_order_does_not_double_escape() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_formats_iso_dates() {
        assert_eq!(format_date("2024-06-01"), "6/1/2024");
        assert_eq!(format_date("1999-12-31"), "12/31/1999");
    }

    #[test]
    fn test_unparseable_dates_pass_through() {
        assert_eq!(format_date("last Tuesday"), "last Tuesday");
        assert_eq!(format_date("2024-13-99"), "2024-13-99");
    }

    #[test]
    fn test_display_author_defaults_to_unknown() {
        assert_eq!(display_author(""), "Unknown");
        assert_eq!(display_author("Grandma"), "Grandma");
    }

    proptest! {
        #[test]
        fn prop_escaped_text_has_no_raw_markup(text in ".{0,64}") {
            let escaped = escape_html(&text);
            prop_assert!(!escaped.contains('<'));
            prop_assert!(!escaped.contains('>'));
            prop_assert!(!escaped.contains('"'));
        }
    }
}
