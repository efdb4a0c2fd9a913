//! Greedy word wrap against an injected width measurer.
//!
//! The wrap never sees a font: callers hand in whatever `measure` fits —
//! a scaled glyph-advance sum in production, a character count in tests.
//! One left-to-right pass, no look-ahead, no balancing: a candidate line is
//! the current buffer plus the next word, and the buffer is flushed the
//! moment a candidate stops fitting. A single word wider than the box is
//! emitted on its own line anyway; overflow is accepted, not corrected, and
//! there is no character-level splitting.

/// Wrap `text` into lines that each measure at most `max_width`.
///
/// The only exception to the width bound is a lone oversized word. Empty
/// input produces no lines. Joining the words of the returned lines in
/// order reproduces the whitespace-delimited word sequence of `text`
/// exactly.
pub fn wrap_lines<F>(text: &str, measure: F, max_width: f32) -> Vec<String>
where
    F: Fn(&str) -> f32,
{
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let candidate = if line.is_empty() {
            word.to_string()
        } else {
            format!("{line} {word}")
        };
        if measure(&candidate) <= max_width {
            line = candidate;
        } else {
            if !line.is_empty() {
                lines.push(line);
            }
            line = word.to_string();
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }

    lines
}
