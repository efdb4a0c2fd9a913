//! End-to-end integration tests for notereel.
//!
//! The text half of the pipeline (extract → normalize → segment →
//! summarize) runs everywhere. Stages that need host capabilities degrade
//! to a printed SKIP: slide composition needs a system TrueType font, and
//! the final encoding test additionally needs `ffmpeg` on PATH.

use notereel::pipeline::encode;
use notereel::{FontBook, SlideStyle, SummaryOptions, VideoOptions, FALLBACK_BULLET};
use std::io::Write;

// ── Test helpers ─────────────────────────────────────────────────────────

/// Write `content` to a fresh temp file with the given suffix.
fn notes_file(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create temp file");
    f.write_all(content.as_bytes()).expect("write temp file");
    f
}

fn summary(max_bullets: usize, max_len: usize) -> SummaryOptions {
    SummaryOptions::builder()
        .max_bullets(max_bullets)
        .max_len(max_len)
        .build()
        .unwrap()
}

/// Resolve the default font chain, or skip the calling test.
fn fonts_or_skip() -> Option<FontBook> {
    match FontBook::resolve(&SlideStyle::default()) {
        Ok(book) => Some(book),
        Err(_) => {
            println!("SKIP — no usable font on this host");
            None
        }
    }
}

// ── Text pipeline ────────────────────────────────────────────────────────

#[test]
fn short_sentences_are_filtered_out() {
    let f = notes_file(
        ".txt",
        "A. B. This is a long enough sentence to qualify as a bullet point for sure.",
    );
    let bullets = notereel::summarize(f.path().to_str().unwrap(), &summary(7, 120)).unwrap();
    assert_eq!(
        bullets,
        vec!["This is a long enough sentence to qualify as a bullet point for sure."]
    );
}

#[test]
fn empty_input_yields_the_fallback_bullet() {
    let f = notes_file(".txt", "");
    let bullets = notereel::summarize(f.path().to_str().unwrap(), &summary(7, 120)).unwrap();
    assert_eq!(bullets, vec![FALLBACK_BULLET]);
}

#[test]
fn long_bullets_are_truncated_to_maxlen() {
    let f = notes_file(".txt", &format!("{}.", "x".repeat(299)));
    let bullets = notereel::summarize(f.path().to_str().unwrap(), &summary(7, 50)).unwrap();
    assert_eq!(bullets.len(), 1);
    assert_eq!(bullets[0].chars().count(), 50);
}

#[test]
fn multiline_notes_are_normalized_before_segmentation() {
    let f = notes_file(
        ".txt",
        "Photosynthesis converts light energy\ninto chemical energy.\r\n\r\nRespiration releases\tthat energy again.",
    );
    let bullets = notereel::summarize(f.path().to_str().unwrap(), &summary(7, 120)).unwrap();
    assert_eq!(
        bullets,
        vec![
            "Photosynthesis converts light energy into chemical energy.",
            "Respiration releases that energy again.",
        ]
    );
}

#[test]
fn decimals_and_dotted_names_do_not_break_sentences() {
    let f = notes_file(
        ".txt",
        "The value of pi is approximately 3.14159 in most textbooks. \
         Release v1.2.3 shipped the fix everyone was waiting for.",
    );
    let bullets = notereel::summarize(f.path().to_str().unwrap(), &summary(7, 120)).unwrap();
    assert_eq!(
        bullets,
        vec![
            "The value of pi is approximately 3.14159 in most textbooks.",
            "Release v1.2.3 shipped the fix everyone was waiting for.",
        ]
    );
}

#[test]
fn bullet_cap_respects_document_order() {
    let f = notes_file(
        ".txt",
        "The first qualifying sentence of the document. \
         The second qualifying sentence of the document. \
         The third qualifying sentence of the document.",
    );
    let bullets = notereel::summarize(f.path().to_str().unwrap(), &summary(2, 120)).unwrap();
    assert_eq!(bullets.len(), 2);
    assert!(bullets[0].starts_with("The first"));
    assert!(bullets[1].starts_with("The second"));
}

#[test]
fn unknown_extensions_are_read_as_text() {
    let f = notes_file(
        ".notes",
        "Anything that is not a pdf is treated as plain text input.",
    );
    let bullets = notereel::summarize(f.path().to_str().unwrap(), &summary(7, 120)).unwrap();
    assert_eq!(
        bullets,
        vec!["Anything that is not a pdf is treated as plain text input."]
    );
}

#[test]
fn missing_source_is_a_fatal_error() {
    let err = notereel::summarize("/definitely/not/a/real/file.txt", &summary(7, 120)).unwrap_err();
    assert!(matches!(err, notereel::NotereelError::SourceNotFound { .. }));
}

#[test]
fn garbage_pdf_degrades_to_the_fallback_bullet() {
    let f = notes_file(".pdf", "not a real pdf body");
    let bullets = notereel::summarize(f.path().to_str().unwrap(), &summary(7, 120)).unwrap();
    assert_eq!(bullets, vec![FALLBACK_BULLET]);
}

// ── Slide sequence (needs a font) ────────────────────────────────────────

#[test]
fn assemble_produces_one_slide_per_bullet_in_order() {
    let Some(fonts) = fonts_or_skip() else { return };
    let style = SlideStyle::default();
    let bullets = vec![
        "First bullet with enough words to wrap.".to_string(),
        "Second bullet, also perfectly ordinary.".to_string(),
        "Third bullet closes out the sequence.".to_string(),
    ];

    let seq = encode::assemble(&bullets, &style, &fonts, 2.0, 24);

    assert_eq!(seq.len(), 3);
    assert!((seq.slide_duration_secs - 2.0).abs() < 1e-6);
    assert!((seq.total_duration_secs() - 6.0).abs() < 1e-6);
    assert_eq!(seq.frames_per_slide(), 48);
    for (slide, bullet) in seq.slides.iter().zip(&bullets) {
        assert_eq!(&slide.bullet, bullet);
        assert_eq!(slide.image.width(), style.width);
        assert_eq!(slide.image.height(), style.height);
    }
}

// ── Full render (needs a font and ffmpeg) ────────────────────────────────

#[test]
fn render_video_writes_an_mp4() {
    if fonts_or_skip().is_none() {
        return;
    }
    if !encode::is_ffmpeg_available() {
        println!("SKIP — ffmpeg not on PATH");
        return;
    }

    let f = notes_file(
        ".txt",
        "Mitochondria are the powerhouse of the cell, as everyone knows. \
         The Krebs cycle produces electron carriers for the transport chain.",
    );
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested/reel.mp4");

    // A small canvas keeps the encode fast; the pipeline is identical.
    let style = SlideStyle {
        width: 270,
        height: 480,
        margin: 20,
        title_size: 18.0,
        body_size: 13.0,
        footer_size: 10.0,
        title_y: 30,
        body_top: 100,
        body_bottom_inset: 90,
        footer_inset: 35,
        ..SlideStyle::default()
    };
    let opts = VideoOptions::builder()
        .style(style)
        .slide_duration_secs(0.5)
        .build()
        .unwrap();

    let stats = notereel::render_video(f.path().to_str().unwrap(), &out, &opts).unwrap();

    assert_eq!(stats.bullets, 2);
    assert_eq!(stats.slides, 2);
    assert!((stats.total_duration_secs - 1.0).abs() < 1e-6);
    // The output directory was created and the file is non-trivial.
    let meta = std::fs::metadata(&out).expect("output file exists");
    assert!(meta.len() > 0, "encoded file is empty");
}
