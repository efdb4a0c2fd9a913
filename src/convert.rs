//! Top-level conversion entry points.
//!
//! The whole pipeline is one linear forward pass — source file →
//! normalized text → bullet list → slide sequence → encoded video — with
//! no branching states, no retries and no checkpoints. Each stage owns and
//! fully consumes its input; a failure at any stage aborts the run.

use crate::config::{SummaryOptions, VideoOptions};
use crate::error::NotereelError;
use crate::pipeline::{encode, font::FontBook, input, normalize, summarize};
use serde::Serialize;
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Timing and size figures for one completed video run.
#[derive(Debug, Clone, Serialize)]
pub struct RenderStats {
    /// Bullets extracted (1..=max_bullets; the fallback counts as one).
    pub bullets: usize,
    /// Slides rendered (always equal to `bullets`).
    pub slides: usize,
    /// Nominal playback length in seconds.
    pub total_duration_secs: f32,
    /// Wall-clock milliseconds spent composing slides.
    pub compose_ms: u64,
    /// Wall-clock milliseconds spent inside the encoder.
    pub encode_ms: u64,
}

/// Extract bullets from a notes file (`.txt` or `.pdf`).
///
/// This is the whole extractor-tool pipeline: resolve → extract →
/// normalize → bullets. Always returns at least one bullet; an input with
/// no usable sentences yields the fixed fallback bullet.
pub fn summarize(src: &str, opts: &SummaryOptions) -> Result<Vec<String>, NotereelError> {
    let path = input::resolve_source(src)?;
    let raw = input::extract_text(&path)?;
    let text = normalize::normalize(&raw);
    let bullets = summarize::extract_bullets(&text, opts);
    info!(
        "extracted {} bullets from {} ({} chars of text)",
        bullets.len(),
        path.display(),
        text.len()
    );
    Ok(bullets)
}

/// Convert a notes file into a vertical slide video at `out_path`.
pub fn render_video(
    src: &str,
    out_path: impl AsRef<Path>,
    opts: &VideoOptions,
) -> Result<RenderStats, NotereelError> {
    let out_path = out_path.as_ref();
    info!("starting render: {} → {}", src, out_path.display());

    // ── Step 1: Text → bullets ───────────────────────────────────────────
    let bullets = summarize(src, &opts.summary)?;

    // ── Step 2: Resolve fonts ────────────────────────────────────────────
    let fonts = FontBook::resolve(&opts.style)?;

    // ── Step 3: Compose slides ───────────────────────────────────────────
    let compose_start = Instant::now();
    let sequence = encode::assemble(
        &bullets,
        &opts.style,
        &fonts,
        opts.slide_duration_secs,
        opts.fps,
    );
    let compose_ms = compose_start.elapsed().as_millis() as u64;

    // ── Step 4: Encode ───────────────────────────────────────────────────
    let encode_start = Instant::now();
    encode::write_video(&sequence, out_path)?;
    let encode_ms = encode_start.elapsed().as_millis() as u64;

    let stats = RenderStats {
        bullets: bullets.len(),
        slides: sequence.len(),
        total_duration_secs: sequence.total_duration_secs(),
        compose_ms,
        encode_ms,
    };
    info!(
        "render complete: {} slides, {:.1}s of video, {}ms compose + {}ms encode",
        stats.slides, stats.total_duration_secs, stats.compose_ms, stats.encode_ms
    );
    Ok(stats)
}
