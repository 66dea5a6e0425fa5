//! Numeric overlay: thousands-grouped formatting and text rasterization.
//!
//! The overlay number is formatted with a grouping separator (e.g.
//! `1,234`), rasterized through the same resvg pipeline used for the rest
//! of the icon, and measured by its ink bounds so the glyph block can be
//! visually centered on the canvas. Font size is a fixed heuristic of half
//! the canvas height, not derived from font metrics.

use std::fmt::Write as _;

use image::RgbaImage;
use image::imageops;
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};

use crate::color::Rgba;
use crate::raster::pixmap_to_rgba_image;

/// Formats a number with a grouping separator every three digits.
///
/// Negative numbers keep their sign: `format_grouped(-1234, ',')` is
/// `"-1,234"`.
pub fn format_grouped(n: i64, separator: char) -> String {
    let digits = (n as i128).unsigned_abs().to_string();
    let len = digits.len();

    let mut out = String::with_capacity(len + len / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

/// A rasterized overlay label, cropped to its ink bounds, together with
/// the canvas position it should be composited at.
#[derive(Debug)]
pub struct OverlayRaster {
    /// The cropped glyph raster.
    pub image: RgbaImage,
    /// Destination x on the canvas.
    pub x: i32,
    /// Destination y on the canvas.
    pub y: i32,
}

/// Rasterizes `label` for a `width`×`height` canvas.
///
/// The label is drawn at half the canvas height and positioned so that
/// its ink box is horizontally centered and its baseline sits at
/// `height/2 + ink_height/2`, which visually centers the glyph block
/// despite font ascent/descent asymmetry.
///
/// Returns `None` when nothing can be rasterized: a zero font size, an
/// unparsable document, or no resolvable sans-serif font (in which case
/// no glyphs produce ink).
pub fn render_overlay(
    opts: &Options,
    label: &str,
    color: Rgba,
    width: u32,
    height: u32,
) -> Option<OverlayRaster> {
    let font_px = height / 2;
    if font_px == 0 {
        return None;
    }

    // Oversized scratch canvas so long labels are never clipped before
    // measurement; the baseline sits at mid-height.
    let scratch_w = width.saturating_mul(4).max(64);
    let scratch_h = height.saturating_mul(2).max(32);
    let baseline = (scratch_h / 2) as i32;

    let svg = label_svg(label, color, scratch_w, scratch_h, font_px);
    let tree = Tree::from_str(&svg, opts).ok()?;

    let mut pixmap = Pixmap::new(scratch_w, scratch_h)?;
    resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());

    let (left, top, right, bottom) = ink_bounds(&pixmap)?;
    let ink_w = right - left + 1;
    let ink_h = bottom - top + 1;

    let full = pixmap_to_rgba_image(&pixmap);
    let cropped = imageops::crop_imm(&full, left, top, ink_w, ink_h).to_image();

    // Match the original placement math, including its integer division:
    // baseline at height/2 + ink_height/2, ink box centered horizontally.
    let dest_baseline = (height / 2 + ink_h / 2) as i32;
    let dest_x = width as i32 / 2 - ink_w as i32 / 2;
    let dest_y = dest_baseline + (top as i32 - baseline);

    Some(OverlayRaster {
        image: cropped,
        x: dest_x,
        y: dest_y,
    })
}

/// Builds the one-element SVG document for the label.
fn label_svg(label: &str, color: Rgba, width: u32, height: u32, font_px: u32) -> String {
    let mut escaped = String::with_capacity(label.len());
    for ch in label.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }

    let mut svg = String::with_capacity(256 + escaped.len());
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}">"#
    );
    let _ = write!(
        svg,
        r#"<text x="{x}" y="{y}" text-anchor="middle" font-family="sans-serif" font-size="{font_px}" fill="{fill}" fill-opacity="{opacity:.4}">{escaped}</text>"#,
        x = width / 2,
        y = height / 2,
        fill = color.to_hex(),
        opacity = color.a as f32 / 255.0,
    );
    svg.push_str("</svg>");
    svg
}

/// Tight bounding box of all pixels with nonzero alpha, as
/// `(left, top, right, bottom)` inclusive. `None` if the pixmap is blank.
fn ink_bounds(pixmap: &Pixmap) -> Option<(u32, u32, u32, u32)> {
    let mut left = u32::MAX;
    let mut top = u32::MAX;
    let mut right = 0u32;
    let mut bottom = 0u32;
    let mut found = false;

    for y in 0..pixmap.height() {
        for x in 0..pixmap.width() {
            if pixmap.pixel(x, y).is_some_and(|p| p.alpha() > 0) {
                left = left.min(x);
                top = top.min(y);
                right = right.max(x);
                bottom = bottom.max(y);
                found = true;
            }
        }
    }

    found.then_some((left, top, right, bottom))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping_examples() {
        assert_eq!(format_grouped(0, ','), "0");
        assert_eq!(format_grouped(7, ','), "7");
        assert_eq!(format_grouped(999, ','), "999");
        assert_eq!(format_grouped(1_000, ','), "1,000");
        assert_eq!(format_grouped(1_234, ','), "1,234");
        assert_eq!(format_grouped(1_234_567, ','), "1,234,567");
    }

    #[test]
    fn grouping_respects_separator() {
        assert_eq!(format_grouped(1_234_567, '.'), "1.234.567");
        assert_eq!(format_grouped(1_234, '\u{202f}'), "1\u{202f}234");
    }

    #[test]
    fn grouping_keeps_sign() {
        assert_eq!(format_grouped(-1, ','), "-1");
        assert_eq!(format_grouped(-1_234, ','), "-1,234");
    }

    #[test]
    fn grouping_handles_extremes() {
        assert_eq!(format_grouped(i64::MAX, ','), "9,223,372,036,854,775,807");
        assert_eq!(format_grouped(i64::MIN, ','), "-9,223,372,036,854,775,808");
    }

    #[test]
    fn label_svg_escapes_markup() {
        let svg = label_svg("1<2&3", Rgba::WHITE, 64, 64, 32);
        assert!(svg.contains("1&lt;2&amp;3"));
        assert!(svg.contains(r##"fill="#ffffff""##));
    }

    #[test]
    fn ink_bounds_of_blank_pixmap_is_none() {
        let pixmap = Pixmap::new(8, 8).unwrap();
        assert!(ink_bounds(&pixmap).is_none());
    }

    #[test]
    fn ink_bounds_finds_tight_box() {
        use crate::raster::fill_circle;

        let mut pixmap = Pixmap::new(32, 32).unwrap();
        fill_circle(&mut pixmap, 16.0, 16.0, 4.0, Rgba::WHITE);

        let (left, top, right, bottom) = ink_bounds(&pixmap).unwrap();
        assert!(left >= 10 && right <= 22, "left={left} right={right}");
        assert!(top >= 10 && bottom <= 22, "top={top} bottom={bottom}");
        assert!(right > left && bottom > top);
    }

    #[test]
    fn render_overlay_zero_height_is_none() {
        let opts = Options::default();
        assert!(render_overlay(&opts, "1", Rgba::WHITE, 64, 0).is_none());
        assert!(render_overlay(&opts, "1", Rgba::WHITE, 64, 1).is_none());
    }

    #[test]
    fn render_overlay_is_deterministic() {
        // Glyph availability depends on the host fontdb; whichever way it
        // goes, two identical calls must agree pixel for pixel.
        let mut opts = Options::default();
        opts.fontdb_mut().load_system_fonts();

        let a = render_overlay(&opts, "1,234", Rgba::WHITE, 96, 96);
        let b = render_overlay(&opts, "1,234", Rgba::WHITE, 96, 96);

        match (a, b) {
            (None, None) => {}
            (Some(a), Some(b)) => {
                assert_eq!(a.x, b.x);
                assert_eq!(a.y, b.y);
                assert_eq!(a.image, b.image);
            }
            _ => panic!("identical inputs disagreed on rasterizability"),
        }
    }
}
