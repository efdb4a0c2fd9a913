//! Whitespace normalization: raw extracted text → one canonical line.
//!
//! Extraction output is messy — PDF text comes with hard line breaks mid
//! sentence, plain-text notes carry tabs and Windows line endings. Every
//! maximal run of whitespace collapses to a single space and the ends are
//! trimmed, so every later stage can assume "words separated by single
//! spaces" and nothing else.

/// Collapse all whitespace runs to single spaces and trim the ends.
///
/// Total over all inputs (the empty string maps to the empty string) and
/// idempotent: `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for word in raw.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}
