//! Configuration types for the notes-to-video pipeline.
//!
//! Three structs, one per concern:
//!
//! * [`SummaryOptions`] — how raw text becomes bullets
//! * [`SlideStyle`]     — every visual constant of a rendered slide
//! * [`VideoOptions`]   — the full video run (summary + style + timing)
//!
//! The slide look (canvas size, colors, captions, font sizes, offsets) is
//! deliberately *data*, threaded through the composer, so styles can be
//! swapped and layout logic tested without touching rendering code. Defaults
//! reproduce the classic 1080×1920 dark-background study-snippet look.

use crate::error::NotereelError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// An RGB color triple.
pub type Rgb = [u8; 3];

// ── Summary options ──────────────────────────────────────────────────────

/// Controls how extracted text is distilled into bullet strings.
///
/// # Example
/// ```rust
/// use notereel::SummaryOptions;
///
/// let opts = SummaryOptions::builder()
///     .max_bullets(5)
///     .max_len(80)
///     .build()
///     .unwrap();
/// assert_eq!(opts.max_bullets, 5);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryOptions {
    /// Maximum number of bullets to keep. Scanning stops as soon as this many
    /// sentences qualify, so the result depends on document order alone.
    /// Default: 7.
    pub max_bullets: usize,

    /// Maximum characters per bullet; longer sentences are truncated, not
    /// dropped. Default: 120.
    pub max_len: usize,

    /// Sentences shorter than this are discarded as noise (headers, page
    /// numbers, fragment artifacts). Default: 25.
    pub min_sentence_len: usize,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            max_bullets: 7,
            max_len: 120,
            min_sentence_len: 25,
        }
    }
}

impl SummaryOptions {
    /// Create a new builder for `SummaryOptions`.
    pub fn builder() -> SummaryOptionsBuilder {
        SummaryOptionsBuilder {
            opts: Self::default(),
        }
    }
}

/// Builder for [`SummaryOptions`].
#[derive(Debug)]
pub struct SummaryOptionsBuilder {
    opts: SummaryOptions,
}

impl SummaryOptionsBuilder {
    pub fn max_bullets(mut self, n: usize) -> Self {
        self.opts.max_bullets = n;
        self
    }

    pub fn max_len(mut self, n: usize) -> Self {
        self.opts.max_len = n;
        self
    }

    pub fn min_sentence_len(mut self, n: usize) -> Self {
        self.opts.min_sentence_len = n;
        self
    }

    /// Build the options, validating constraints.
    pub fn build(self) -> Result<SummaryOptions, NotereelError> {
        let o = &self.opts;
        if o.max_bullets == 0 {
            return Err(NotereelError::InvalidConfig(
                "max_bullets must be ≥ 1".into(),
            ));
        }
        if o.max_len == 0 {
            return Err(NotereelError::InvalidConfig("max_len must be ≥ 1".into()));
        }
        Ok(self.opts)
    }
}

// ── Slide style ──────────────────────────────────────────────────────────

/// Every visual constant of a rendered slide.
///
/// A slide is three text blocks over a solid background: a fixed title
/// caption near the top, the word-wrapped bullet body, and a fixed footer
/// handle near the bottom. Title and footer are horizontally centered; body
/// lines are left-aligned at the margin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideStyle {
    /// Canvas width in pixels. Default: 1080.
    pub width: u32,
    /// Canvas height in pixels. Default: 1920.
    pub height: u32,

    /// Background fill. Default: dark navy (20, 20, 30).
    pub background: Rgb,
    /// Title text color. Default: light blue (142, 202, 230).
    pub title_color: Rgb,
    /// Body text color. Default: white.
    pub body_color: Rgb,
    /// Footer text color. Default: gray (173, 181, 189).
    pub footer_color: Rgb,

    /// Fixed title caption. Default: "Study Snippets".
    pub title_text: String,
    /// Fixed footer handle. Default: "@brainrot2learn".
    pub footer_text: String,

    /// Title font size in pixels. Default: 72.
    pub title_size: f32,
    /// Body font size in pixels. Default: 52.
    pub body_size: f32,
    /// Footer font size in pixels. Default: 38.
    pub footer_size: f32,

    /// Horizontal body margin in pixels; the wrap box spans
    /// `margin .. width - margin`. Default: 80.
    pub margin: u32,
    /// Vertical offset of the title block. Default: 120.
    pub title_y: u32,
    /// Top of the body box. Default: 400.
    pub body_top: u32,
    /// The body box ends this many pixels above the bottom edge.
    /// Default: 350.
    pub body_bottom_inset: u32,
    /// The footer sits this many pixels above the bottom edge. Default: 140.
    pub footer_inset: u32,
    /// Extra pixels between wrapped body lines. Default: 12.
    pub line_spacing: f32,

    /// Ordered font fallback chain, tried first-to-last; the first path that
    /// loads wins. When none load, the platform font directories are scanned
    /// for any usable face before giving up.
    pub font_candidates: Vec<PathBuf>,
}

impl Default for SlideStyle {
    fn default() -> Self {
        Self {
            width: 1080,
            height: 1920,
            background: [20, 20, 30],
            title_color: [142, 202, 230],
            body_color: [255, 255, 255],
            footer_color: [173, 181, 189],
            title_text: "Study Snippets".to_string(),
            footer_text: "@brainrot2learn".to_string(),
            title_size: 72.0,
            body_size: 52.0,
            footer_size: 38.0,
            margin: 80,
            title_y: 120,
            body_top: 400,
            body_bottom_inset: 350,
            footer_inset: 140,
            line_spacing: 12.0,
            font_candidates: default_font_candidates(),
        }
    }
}

impl SlideStyle {
    /// Width of the body wrap box in pixels.
    pub fn body_box_width(&self) -> f32 {
        self.width.saturating_sub(self.margin * 2) as f32
    }

    /// Y coordinate of the bottom of the body box.
    pub fn body_bottom(&self) -> u32 {
        self.height.saturating_sub(self.body_bottom_inset)
    }

    /// Y coordinate of the footer block.
    pub fn footer_y(&self) -> u32 {
        self.height.saturating_sub(self.footer_inset)
    }
}

/// The classic candidate list: common Arial installs first, DejaVu paths for
/// Linux hosts after.
fn default_font_candidates() -> Vec<PathBuf> {
    [
        "Arial.ttf",
        "Arial Bold.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
        "/Library/Fonts/Arial.ttf",
        "/Library/Fonts/Arial Bold.ttf",
    ]
    .into_iter()
    .map(PathBuf::from)
    .collect()
}

// ── Video options ────────────────────────────────────────────────────────

/// Configuration for a full notes-to-video run.
///
/// Built via [`VideoOptions::builder()`] or [`VideoOptions::default()`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoOptions {
    /// Bullet extraction settings.
    pub summary: SummaryOptions,
    /// Slide look.
    pub style: SlideStyle,
    /// Seconds each slide stays on screen. Default: 3.5.
    pub slide_duration_secs: f32,
    /// Output frame rate. Default: 24.
    pub fps: u32,
}

impl Default for VideoOptions {
    fn default() -> Self {
        Self {
            summary: SummaryOptions::default(),
            style: SlideStyle::default(),
            slide_duration_secs: 3.5,
            fps: 24,
        }
    }
}

impl VideoOptions {
    /// Create a new builder for `VideoOptions`.
    pub fn builder() -> VideoOptionsBuilder {
        VideoOptionsBuilder {
            opts: Self::default(),
        }
    }
}

/// Builder for [`VideoOptions`].
#[derive(Debug)]
pub struct VideoOptionsBuilder {
    opts: VideoOptions,
}

impl VideoOptionsBuilder {
    pub fn summary(mut self, summary: SummaryOptions) -> Self {
        self.opts.summary = summary;
        self
    }

    pub fn style(mut self, style: SlideStyle) -> Self {
        self.opts.style = style;
        self
    }

    pub fn slide_duration_secs(mut self, secs: f32) -> Self {
        self.opts.slide_duration_secs = secs;
        self
    }

    pub fn fps(mut self, fps: u32) -> Self {
        self.opts.fps = fps.max(1);
        self
    }

    /// Build the options, validating constraints.
    pub fn build(self) -> Result<VideoOptions, NotereelError> {
        let o = &self.opts;
        if !(o.slide_duration_secs > 0.0) {
            return Err(NotereelError::InvalidConfig(format!(
                "slide duration must be positive, got {}",
                o.slide_duration_secs
            )));
        }
        if o.style.width == 0 || o.style.height == 0 {
            return Err(NotereelError::InvalidConfig(
                "canvas dimensions must be non-zero".into(),
            ));
        }
        if o.style.margin * 2 >= o.style.width {
            return Err(NotereelError::InvalidConfig(format!(
                "margin {} leaves no body box in a {}px-wide canvas",
                o.style.margin, o.style.width
            )));
        }
        Ok(self.opts)
    }
}
