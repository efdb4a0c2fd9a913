//! Sentence segmentation: one normalized text blob → ordered sentences.
//!
//! A rule-based scanner, not a linguistic model: a run of `.`, `!` or `?`
//! ends a sentence only when whitespace or end-of-input follows, so
//! decimals ("3.14") and dotted names ("v1.2.3") stay intact, while an
//! abbreviation followed by a space ("U.S. Navy") still splits. Any
//! trailing fragment without a terminator is emitted as a final sentence.
//! Every word of the input lands in exactly one sentence — the segmenter
//! never discards text.

use once_cell::sync::Lazy;
use regex::Regex;

/// A sentence boundary: a terminator run followed by whitespace or
/// end-of-input. Interior terminators (no whitespace after) never match.
static RE_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+(?:\s+|$)").unwrap());

/// Split `text` into an ordered list of trimmed, non-empty sentences.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in RE_BOUNDARY.find_iter(text) {
        let sentence = text[start..boundary.end()].trim();
        if !sentence.is_empty() {
            sentences.push(sentence.to_string());
        }
        start = boundary.end();
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }

    sentences
}
