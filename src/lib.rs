//! # notereel
//!
//! Turn a page of study notes (plain text or PDF) into a short vertical
//! slide video.
//!
//! Long documents don't survive contact with a phone screen. This crate
//! distills notes into a handful of short bullet statements and renders
//! each one as a timed 1080×1920 title/body/footer slide, concatenated
//! into a single MP4 — the "study snippets" format.
//!
//! ## Pipeline Overview
//!
//! ```text
//! notes (.txt / .pdf)
//!  │
//!  ├─ 1. Input      read text (.pdf routed through page-text extraction)
//!  ├─ 2. Normalize  collapse whitespace into one canonical line
//!  ├─ 3. Segment    split into ordered sentences
//!  ├─ 4. Summarize  length-filter + truncate into ≤ N bullets
//!  ├─ 5. Compose    one 1080×1920 still per bullet (wrapped body text)
//!  └─ 6. Encode     stream frames to ffmpeg → H.264 MP4, no audio
//! ```
//!
//! The summarizer is deliberately naive — a pass/fail length filter in
//! document order, no scoring — so output is predictable and testable.
//! Rendering needs a TrueType font on the host (a fallback chain ending in
//! a system scan finds one), and encoding needs `ffmpeg` on PATH.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use notereel::{render_video, summarize, SummaryOptions, VideoOptions};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Just the bullets:
//!     for b in summarize("notes.txt", &SummaryOptions::default())? {
//!         println!("- {b}");
//!     }
//!
//!     // Or the full video:
//!     let stats = render_video("notes.txt", "output/reel.mp4", &VideoOptions::default())?;
//!     eprintln!("{} slides, {:.1}s", stats.slides, stats.total_duration_secs);
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `notereel` / `notereel-bullets` binaries (clap + anyhow + tracing-subscriber + indicatif) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! notereel = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod pipeline;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{Rgb, SlideStyle, SummaryOptions, VideoOptions};
pub use convert::{render_video, summarize, RenderStats};
pub use error::NotereelError;
pub use pipeline::compose::Slide;
pub use pipeline::encode::SlideSequence;
pub use pipeline::font::FontBook;
pub use pipeline::summarize::FALLBACK_BULLET;
