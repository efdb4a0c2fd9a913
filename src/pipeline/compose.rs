//! Slide composition: one bullet → one fixed-size still image.
//!
//! A slide is a solid-background canvas with three text blocks. The title
//! and footer are fixed captions, horizontally centered against their own
//! measured widths. The body is the bullet, wrapped by [`layout::wrap_lines`]
//! against the body face and the margin-bounded box, drawn top-to-bottom and
//! left-aligned at the margin. Glyph coverage is alpha-blended into the
//! canvas pixel by pixel.
//!
//! Body lines that would not fully fit above the bottom of the body box are
//! dropped with a warning instead of being drawn over the footer.

use crate::config::{Rgb, SlideStyle};
use crate::pipeline::font::{FontBook, ScaledFont};
use crate::pipeline::layout;
use image::RgbImage;
use tracing::{debug, warn};

/// One rendered still image, tied to the bullet it displays.
pub struct Slide {
    /// The 1080×1920 (by default) RGB canvas.
    pub image: RgbImage,
    /// The bullet this slide displays.
    pub bullet: String,
}

/// Render one bullet into a slide.
pub fn compose_slide(bullet: &str, style: &SlideStyle, fonts: &FontBook) -> Slide {
    let mut canvas = RgbImage::from_pixel(style.width, style.height, image::Rgb(style.background));

    // Title, centered near the top.
    let title_x = centered_x(style.width, fonts.title.text_width(&style.title_text));
    draw_text(
        &mut canvas,
        &fonts.title,
        &style.title_text,
        title_x,
        style.title_y as f32,
        style.title_color,
    );

    // Body: wrapped against the margin-bounded box, left-aligned.
    let lines = layout::wrap_lines(
        bullet,
        |s| fonts.body.text_width(s),
        style.body_box_width(),
    );
    let capacity = body_line_capacity(style, fonts.body.line_height());
    if lines.len() > capacity {
        warn!(
            "body overflows the box: {} of {} lines dropped",
            lines.len() - capacity,
            lines.len()
        );
    }
    let mut y = style.body_top as f32;
    for line in lines.iter().take(capacity) {
        draw_text(
            &mut canvas,
            &fonts.body,
            line,
            style.margin as f32,
            y,
            style.body_color,
        );
        y += fonts.body.line_height() + style.line_spacing;
    }

    // Footer, centered near the bottom.
    let footer_x = centered_x(style.width, fonts.footer.text_width(&style.footer_text));
    draw_text(
        &mut canvas,
        &fonts.footer,
        &style.footer_text,
        footer_x,
        style.footer_y() as f32,
        style.footer_color,
    );

    debug!(
        "composed slide ({} body lines): {:.40}…",
        lines.len().min(capacity),
        bullet
    );

    Slide {
        image: canvas,
        bullet: bullet.to_string(),
    }
}

/// X offset that centers a block of the given width on the canvas.
fn centered_x(canvas_width: u32, text_width: f32) -> f32 {
    ((canvas_width as f32 - text_width) / 2.0).max(0.0)
}

/// How many body lines fit fully between the box top and bottom.
fn body_line_capacity(style: &SlideStyle, line_height: f32) -> usize {
    let box_height = style.body_bottom().saturating_sub(style.body_top) as f32;
    if line_height <= 0.0 || box_height < line_height {
        return 0;
    }
    // n lines occupy n * line_height + (n - 1) * spacing.
    (((box_height + style.line_spacing) / (line_height + style.line_spacing)).floor()) as usize
}

/// Rasterize `text` at `(x, y)` (top-left of the line) in `color`,
/// alpha-blending glyph coverage over whatever is on the canvas.
fn draw_text(canvas: &mut RgbImage, font: &ScaledFont, text: &str, x: f32, y: f32, color: Rgb) {
    let (w, h) = (canvas.width() as i32, canvas.height() as i32);
    for glyph in font.layout_at(text, x, y) {
        if let Some(bb) = glyph.pixel_bounding_box() {
            glyph.draw(|gx, gy, coverage| {
                let px = bb.min.x + gx as i32;
                let py = bb.min.y + gy as i32;
                if px < 0 || py < 0 || px >= w || py >= h {
                    return;
                }
                let pixel = canvas.get_pixel_mut(px as u32, py as u32);
                for (dst, src) in pixel.0.iter_mut().zip(color) {
                    *dst = (*dst as f32 * (1.0 - coverage) + src as f32 * coverage) as u8;
                }
            });
        }
    }
}
