/*!
 * Text normalization for caption payloads.
 *
 * WebVTT cue payloads treat `&`, `<` and `>` as markup, so free text is
 * escaped before any exporter sees it. The DELETE control character shows up
 * in real Granicus feeds and is dropped outright.
 */

use once_cell::sync::Lazy;
use regex::Regex;

// @const: Numeric or well-known named reference at the start of a slice
static CHAR_REFERENCE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^&(?:amp|lt|gt|quot|apos|nbsp|lrm|rlm|#[0-9]+|#[xX][0-9A-Fa-f]+);").unwrap()
});

// @const: Unicode DELETE
const DELETE_CHAR: char = '\u{7f}';

/// Escape `&`, `<`, `>` and strip U+007F from caption text.
///
/// An `&` that already opens a numeric reference or one of the named
/// references `amp lt gt quot apos nbsp lrm rlm` is kept as is, which makes
/// the function idempotent. Any other `&name;` is plain text and escaped.
pub fn escape_cue_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for (idx, ch) in text.char_indices() {
        match ch {
            '&' => {
                if CHAR_REFERENCE_REGEX.is_match(&text[idx..]) {
                    escaped.push('&');
                } else {
                    escaped.push_str("&amp;");
                }
            }
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            DELETE_CHAR => {}
            other => escaped.push(other),
        }
    }

    escaped
}

/// Collapse a multi-line title to its first line with single spaces
pub fn collapse_title(title: &str) -> String {
    title
        .lines()
        .next()
        .unwrap_or_default()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
