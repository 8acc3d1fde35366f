//! HtmlDocument: a generated document value

use std::fmt;

/// A complete generated HTML document
///
/// Wraps the markup so renderer outputs are not interchangeable with
/// arbitrary strings. The embedder decides how to display it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlDocument(String);

impl HtmlDocument {
    /// Wrap finished markup
    pub(crate) fn new(html: String) -> Self {
        Self(html)
    }

    /// The markup as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the document, yielding the markup
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for HtmlDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
