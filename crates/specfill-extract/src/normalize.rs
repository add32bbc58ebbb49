//! Markup stripping and whitespace normalization.

use scraper::Html;

/// Strip markup from a raw text blob.
///
/// Text nodes are trimmed and joined with single spaces, then every
/// whitespace run is collapsed. `None` yields an empty string.
pub fn clean_html(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    if raw.trim().is_empty() {
        return String::new();
    }

    let fragment = Html::parse_fragment(raw);
    let joined = fragment
        .root_element()
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    collapse_whitespace(&joined)
}

/// Collapse all whitespace runs to a single space and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
