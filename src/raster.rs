//! Raster primitives: circle and sector fills, pixmap conversion and
//! alpha compositing.
//!
//! Drawing happens on premultiplied [`tiny_skia`] pixmaps with anti-aliased
//! path fills; the public raster type is [`image::RgbaImage`], so finished
//! pixmaps are unpremultiplied on the way out.

use image::{Rgba as ImageRgba, RgbaImage};
use resvg::tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Rect, Transform};

use crate::color::Rgba;

/// Angular step, in degrees, used to flatten arcs into line segments.
/// Fine enough that the polygonal error stays below the anti-aliasing
/// footprint at notification-icon sizes.
const ARC_STEP_DEG: f64 = 2.0;

fn solid_paint(color: Rgba) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = true;
    paint
}

/// Fills a circle of the given center and radius.
pub fn fill_circle(pixmap: &mut Pixmap, cx: f32, cy: f32, radius: f32, color: Rgba) {
    if radius <= 0.0 {
        return;
    }
    let mut pb = PathBuilder::new();
    pb.push_circle(cx, cy, radius);
    let Some(path) = pb.finish() else {
        return;
    };
    pixmap.fill_path(
        &path,
        &solid_paint(color),
        FillRule::Winding,
        Transform::identity(),
        None,
    );
}

/// Fills an elliptical sector (pie slice) of the ellipse inscribed in the
/// `width`×`height` canvas rectangle.
///
/// `start_deg` follows the screen convention (0° at 3-o'clock, clockwise
/// positive). A sweep of 360° or more fills the whole ellipse; a sweep of
/// zero or less draws nothing.
pub fn fill_sector(
    pixmap: &mut Pixmap,
    width: u32,
    height: u32,
    start_deg: f64,
    sweep_deg: f64,
    color: Rgba,
) {
    if sweep_deg <= 0.0 {
        return;
    }

    let rx = width as f64 / 2.0;
    let ry = height as f64 / 2.0;
    let cx = rx;
    let cy = ry;

    let path = if sweep_deg >= 360.0 {
        let mut pb = PathBuilder::new();
        let Some(rect) = Rect::from_ltrb(0.0, 0.0, width as f32, height as f32) else {
            return;
        };
        pb.push_oval(rect);
        pb.finish()
    } else {
        // Flatten the arc into short line segments and close through the
        // center to form the sector polygon.
        let steps = (sweep_deg / ARC_STEP_DEG).ceil().max(2.0) as u32;
        let mut pb = PathBuilder::new();
        pb.move_to(cx as f32, cy as f32);
        for i in 0..=steps {
            let angle = (start_deg + sweep_deg * (i as f64 / steps as f64)).to_radians();
            let x = cx + rx * angle.cos();
            let y = cy + ry * angle.sin();
            pb.line_to(x as f32, y as f32);
        }
        pb.close();
        pb.finish()
    };

    let Some(path) = path else {
        return;
    };
    pixmap.fill_path(
        &path,
        &solid_paint(color),
        FillRule::Winding,
        Transform::identity(),
        None,
    );
}

/// Converts a premultiplied tiny-skia pixmap to an `image::RgbaImage`.
pub fn pixmap_to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let width = pixmap.width();
    let height = pixmap.height();
    let mut img = RgbaImage::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let pixel = pixmap.pixel(x, y).unwrap();
            let (r, g, b, a) =
                unpremultiply(pixel.red(), pixel.green(), pixel.blue(), pixel.alpha());
            img.put_pixel(x, y, ImageRgba([r, g, b, a]));
        }
    }

    img
}

/// Unpremultiplies a premultiplied alpha pixel.
fn unpremultiply(r: u8, g: u8, b: u8, a: u8) -> (u8, u8, u8, u8) {
    if a == 0 {
        (0, 0, 0, 0)
    } else {
        let a_f = a as f32 / 255.0;
        (
            (r as f32 / a_f).round().min(255.0) as u8,
            (g as f32 / a_f).round().min(255.0) as u8,
            (b as f32 / a_f).round().min(255.0) as u8,
            a,
        )
    }
}

/// Composites a source image onto a destination image at the specified
/// position, clipping at the destination bounds.
///
/// Uses standard alpha blending (source over destination).
pub fn composite_over(dest: &mut RgbaImage, src: &RgbaImage, x: i32, y: i32) {
    let dest_width = dest.width() as i32;
    let dest_height = dest.height() as i32;

    for sy in 0..src.height() {
        for sx in 0..src.width() {
            let dx = x + sx as i32;
            let dy = y + sy as i32;

            if dx < 0 || dy < 0 || dx >= dest_width || dy >= dest_height {
                continue;
            }

            let src_pixel = src.get_pixel(sx, sy);
            let dst_pixel = dest.get_pixel(dx as u32, dy as u32);

            let blended = alpha_blend(*src_pixel, *dst_pixel);
            dest.put_pixel(dx as u32, dy as u32, blended);
        }
    }
}

/// Alpha blends two RGBA pixels (source over destination).
fn alpha_blend(src: ImageRgba<u8>, dst: ImageRgba<u8>) -> ImageRgba<u8> {
    let sa = src[3] as f32 / 255.0;
    let da = dst[3] as f32 / 255.0;

    let out_a = sa + da * (1.0 - sa);

    if out_a == 0.0 {
        return ImageRgba([0, 0, 0, 0]);
    }

    let blend = |s: u8, d: u8| -> u8 {
        let sf = s as f32 / 255.0;
        let df = d as f32 / 255.0;
        let out = (sf * sa + df * da * (1.0 - sa)) / out_a;
        (out * 255.0).round() as u8
    };

    ImageRgba([
        blend(src[0], dst[0]),
        blend(src[1], dst[1]),
        blend(src[2], dst[2]),
        (out_a * 255.0).round() as u8,
    ])
}

// ============================================================================
// Tests
// ============================================================================
