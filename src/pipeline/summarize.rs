//! Bullet extraction: ordered sentences → a bounded list of short bullets.
//!
//! Deliberately naive: a pass/fail length filter plus document-order
//! truncation, no scoring or salience ranking. Scanning stops as soon as
//! the cap is reached, so the output depends only on where sentences appear
//! in the document. Callers wanting quality ranking need a different
//! extractor; this one exists to be predictable.

use crate::config::SummaryOptions;
use crate::pipeline::{normalize, segment};
use tracing::debug;

/// The sentinel bullet produced when no sentence passes the length filter.
/// Empty input is a handled case, never an error.
pub const FALLBACK_BULLET: &str =
    "Key ideas not detected. Add clearer notes or increase summary length.";

/// Distill normalized text into at most `opts.max_bullets` bullet strings.
///
/// Guarantees:
/// * output length is in `1..=max_bullets`
/// * every bullet is at most `max_len` characters with no trailing
///   whitespace and no internal whitespace runs
/// * bullet order is sentence order of first appearance
pub fn extract_bullets(text: &str, opts: &SummaryOptions) -> Vec<String> {
    let mut bullets = Vec::new();

    for sentence in segment::split_sentences(text) {
        // The segmenter upstream may reintroduce line breaks (PDF page
        // text often does); re-normalize before measuring.
        let s = normalize::normalize(&sentence);
        if s.chars().count() < opts.min_sentence_len {
            continue;
        }
        let truncated: String = s.chars().take(opts.max_len).collect();
        bullets.push(truncated.trim_end().to_string());
        if bullets.len() >= opts.max_bullets {
            break;
        }
    }

    if bullets.is_empty() {
        debug!("no sentence passed the length filter, using fallback bullet");
        bullets.push(FALLBACK_BULLET.to_string());
    }

    bullets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(max_bullets: usize, max_len: usize) -> SummaryOptions {
        SummaryOptions::builder()
            .max_bullets(max_bullets)
            .max_len(max_len)
            .build()
            .unwrap()
    }

    #[test]
    fn short_sentences_are_discarded() {
        let text = "A. B. This is a long enough sentence to qualify as a bullet point for sure.";
        let got = extract_bullets(text, &opts(7, 120));
        assert_eq!(
            got,
            vec!["This is a long enough sentence to qualify as a bullet point for sure."]
        );
    }

    #[test]
    fn empty_input_yields_fallback() {
        let got = extract_bullets("", &opts(7, 120));
        assert_eq!(got, vec![FALLBACK_BULLET]);
    }

    #[test]
    fn all_short_input_yields_fallback() {
        let got = extract_bullets("Tiny. Also tiny. Nope.", &opts(7, 120));
        assert_eq!(got, vec![FALLBACK_BULLET]);
    }

    #[test]
    fn long_sentence_truncates_to_max_len() {
        // A 300-char sentence with maxlen 50 comes back at exactly 50.
        let text = format!("{}.", "x".repeat(299));
        let got = extract_bullets(&text, &opts(7, 50));
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].chars().count(), 50);
    }

    #[test]
    fn truncation_strips_trailing_whitespace() {
        // Cutting right after a word boundary leaves a trailing space,
        // which must be stripped (result dips below max_len).
        let text = format!("{}.", "word ".repeat(60).trim_end());
        let got = extract_bullets(&text, &opts(7, 50));
        assert_eq!(got[0].chars().count(), 49);
        assert_eq!(got[0], got[0].trim_end());
    }

    #[test]
    fn cap_stops_the_scan_early() {
        let text = "This sentence is easily long enough one. \
                    This sentence is easily long enough two. \
                    This sentence is easily long enough three.";
        let got = extract_bullets(text, &opts(2, 120));
        assert_eq!(got.len(), 2);
        assert!(got[0].ends_with("one."));
        assert!(got[1].ends_with("two."));
    }

    #[test]
    fn bullets_never_exceed_bounds() {
        let text = "Some adequately sized sentence number one here. \
                    Another adequately sized sentence number two here. \
                    Yet another adequately sized sentence three here.";
        for max_len in [30, 47, 120] {
            for max_bullets in [1, 2, 7] {
                let got = extract_bullets(text, &opts(max_bullets, max_len));
                assert!(!got.is_empty() && got.len() <= max_bullets);
                for b in &got {
                    assert!(b.chars().count() <= max_len, "{b:?} vs {max_len}");
                    assert!(!b.contains("  "));
                }
            }
        }
    }

    #[test]
    fn internal_whitespace_is_renormalized() {
        // Feed a sentence whose internal runs survived upstream cleanup.
        let text = "This  sentence\thas   odd internal whitespace everywhere.";
        let got = extract_bullets(text, &opts(7, 120));
        assert_eq!(
            got,
            vec!["This sentence has odd internal whitespace everywhere."]
        );
    }

    #[test]
    fn decimal_bearing_sentences_survive_intact() {
        // An interior period must not shear the sentence below the
        // length threshold and trigger the fallback.
        let text = "The value of pi is approximately 3.14159 in most textbooks.";
        let got = extract_bullets(text, &SummaryOptions::default());
        assert_eq!(got, vec![text]);
    }

    #[test]
    fn threshold_is_tunable() {
        let loose = SummaryOptions::builder()
            .min_sentence_len(1)
            .build()
            .unwrap();
        let got = extract_bullets("Tiny. Also tiny.", &loose);
        assert_eq!(got, vec!["Tiny.", "Also tiny."]);
    }

    #[test]
    fn truncation_counts_chars_not_bytes() {
        let text = "Qualità è più che quantità, dicono sempre gli chef üçü.";
        let got = extract_bullets(text, &opts(1, 30));
        assert_eq!(got[0].chars().count(), 30);
    }
}
