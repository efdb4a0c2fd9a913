//! Pipeline stages for the notes-to-video conversion.
//!
//! Each submodule implements exactly one transformation step. Keeping stages
//! separate makes each independently testable and lets us swap
//! implementations (e.g. a smarter sentence segmenter) without touching
//! other stages.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ normalize ──▶ segment ──▶ summarize ──▶ compose ──▶ encode
//! (file)    (one line)   (sentences)  (bullets)     (slides)    (mp4)
//! ```
//!
//! 1. [`input`]     — resolve the source path and extract raw text
//!    (`.pdf` via page-text extraction, anything else as lossy UTF-8)
//! 2. [`normalize`] — collapse whitespace runs into canonical single spaces
//! 3. [`segment`]   — split the normalized text into ordered sentences
//! 4. [`summarize`] — filter and truncate sentences into bullet strings
//! 5. [`font`]      — resolve the font fallback chain into scaled faces
//! 6. [`layout`]    — greedy word wrap against an injected width measurer
//! 7. [`compose`]   — render one 1080×1920 still per bullet
//! 8. [`encode`]    — tag slides with durations and stream frames to ffmpeg

pub mod compose;
pub mod encode;
pub mod font;
pub mod input;
pub mod layout;
pub mod normalize;
pub mod segment;
pub mod summarize;
