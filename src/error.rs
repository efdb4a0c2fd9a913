//! Error types for the notereel library.
//!
//! Only failures with no safe default appear here. The pipeline absorbs
//! everything it can recover from locally: unparseable PDF text degrades to
//! an empty string, a missing output directory is created, a font candidate
//! that fails to load falls through to the next one, and an input with no
//! usable sentences produces the fixed fallback bullet instead of an error.
//! What remains is fatal by design — a source file we cannot read, a host
//! with no fonts at all, or an encoder that refused to produce output.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the notereel library.
#[derive(Debug, Error)]
pub enum NotereelError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Source file was not found at the given path.
    #[error("Source file not found: '{path}'\nCheck the path exists and is readable.")]
    SourceNotFound { path: PathBuf },

    /// Process does not have read permission on the source file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    // ── Rendering errors ──────────────────────────────────────────────────
    /// No candidate font loaded and the platform font directories held
    /// nothing usable either.
    #[error(
        "No usable font found on this system.\n\
Searched the configured candidates and the platform font directories\n\
({searched} paths tried). Install a TrueType font (e.g. the DejaVu family)\n\
or add a path to SlideStyle::font_candidates."
    )]
    FontUnavailable { searched: usize },

    // ── Encoding errors ───────────────────────────────────────────────────
    /// The `ffmpeg` binary is not on PATH.
    #[error(
        "ffmpeg was not found on PATH.\n\
notereel streams frames to the system ffmpeg binary for H.264 encoding.\n\
Install it (e.g. `apt install ffmpeg` / `brew install ffmpeg`) and retry."
    )]
    FfmpegMissing,

    /// ffmpeg started but exited with a failure status.
    #[error("Video encoding failed (ffmpeg exit {status}):\n{stderr}")]
    EncodeFailed { status: i32, stderr: String },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create the output directory or write the video file.
    #[error("Failed to write output '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}
