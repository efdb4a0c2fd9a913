//! Font resolution: an ordered fallback chain ending in a system scan.
//!
//! Resolution is a prioritized list of providers, tried in order, first
//! success wins: the style's candidate paths (Arial installs, then DejaVu)
//! and finally a recursive scan of the platform font directories that picks
//! the first loadable face. Only a host with no font files at all fails —
//! Rust ships no built-in raster font, so the scan is the terminal default.

use crate::config::SlideStyle;
use crate::error::NotereelError;
use rusttype::{point, Font, Scale};
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Directories scanned as the terminal fallback, per platform.
const FONT_DIRS: &[&str] = &[
    "/usr/share/fonts",
    "/usr/local/share/fonts",
    "/System/Library/Fonts",
    "/Library/Fonts",
    "C:\\Windows\\Fonts",
];

/// A font face paired with a fixed pixel scale.
///
/// This is the measurement capability handed to the line wrapper: width is
/// the sum of scaled glyph advances plus pair kerning, matching what the
/// rasterizer will actually lay down.
#[derive(Clone)]
pub struct ScaledFont {
    font: Font<'static>,
    scale: Scale,
}

impl ScaledFont {
    pub fn new(font: Font<'static>, size_px: f32) -> Self {
        Self {
            font,
            scale: Scale::uniform(size_px),
        }
    }

    /// Measured pixel width of `text` at this scale.
    pub fn text_width(&self, text: &str) -> f32 {
        let mut width = 0.0;
        let mut last = None;
        for ch in text.chars() {
            let glyph = self.font.glyph(ch);
            if let Some(prev) = last {
                width += self.font.pair_kerning(self.scale, prev, glyph.id());
            }
            width += glyph.clone().scaled(self.scale).h_metrics().advance_width;
            last = Some(glyph.id());
        }
        width
    }

    /// Pixel height of one line (ascent to descent) at this scale.
    pub fn line_height(&self) -> f32 {
        let v = self.font.v_metrics(self.scale);
        v.ascent - v.descent
    }

    /// Distance from the top of a line to its baseline.
    pub fn ascent(&self) -> f32 {
        self.font.v_metrics(self.scale).ascent
    }

    /// Lay out `text` with baselines starting at `(x, y + ascent)`,
    /// yielding positioned glyphs ready for rasterization.
    pub fn layout_at(&self, text: &str, x: f32, y: f32) -> Vec<rusttype::PositionedGlyph<'static>> {
        let origin = point(x, y + self.ascent());
        self.font.layout(text, self.scale, origin).collect()
    }
}

/// The three scaled faces a slide needs.
pub struct FontBook {
    pub title: ScaledFont,
    pub body: ScaledFont,
    pub footer: ScaledFont,
}

impl FontBook {
    /// Resolve the style's fallback chain into scaled faces.
    pub fn resolve(style: &SlideStyle) -> Result<Self, NotereelError> {
        let face = resolve_face(style)?;
        Ok(Self {
            title: ScaledFont::new(face.clone(), style.title_size),
            body: ScaledFont::new(face.clone(), style.body_size),
            footer: ScaledFont::new(face, style.footer_size),
        })
    }
}

/// Walk the fallback chain: explicit candidates first, then the platform
/// directory scan.
fn resolve_face(style: &SlideStyle) -> Result<Font<'static>, NotereelError> {
    let mut tried = 0;

    for candidate in &style.font_candidates {
        tried += 1;
        if let Some(font) = load_face(candidate) {
            debug!("Resolved font: {}", candidate.display());
            return Ok(font);
        }
    }

    warn!("No configured font candidate loaded, scanning system font directories");
    for dir in FONT_DIRS {
        for entry in WalkDir::new(dir)
            .follow_links(true)
            .into_iter()
            .filter_map(Result::ok)
        {
            let path = entry.path();
            let is_face = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("ttf") || e.eq_ignore_ascii_case("otf"));
            if !is_face {
                continue;
            }
            tried += 1;
            if let Some(font) = load_face(path) {
                debug!("Resolved font via system scan: {}", path.display());
                return Ok(font);
            }
        }
    }

    Err(NotereelError::FontUnavailable { searched: tried })
}

/// Try to load one face; any read or parse failure means "next candidate".
fn load_face(path: &Path) -> Option<Font<'static>> {
    let bytes = std::fs::read(path).ok()?;
    Font::try_from_vec(bytes)
}
