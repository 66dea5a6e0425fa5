//! The rendered badge icon type.

use image::RgbaImage;

/// A 2D size in pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizePx {
    pub width: u32,
    pub height: u32,
}

impl SizePx {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns true if width equals height.
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

/// A fully rendered badge icon.
///
/// The pixel buffer is plain (non-premultiplied) RGBA8 of exactly the
/// requested canvas dimensions, ready to hand to whatever surfaces it as
/// a notification's large icon.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedIcon {
    /// The image data in RGBA format.
    pub data: RgbaImage,
}

impl RenderedIcon {
    /// Wraps an RGBA image as a rendered icon.
    pub fn new(data: RgbaImage) -> Self {
        Self { data }
    }

    /// Returns the pixel dimensions of the icon.
    pub fn dimensions(&self) -> SizePx {
        SizePx::new(self.data.width(), self.data.height())
    }

    /// Returns one pixel as `[r, g, b, a]`.
    ///
    /// Panics if `(x, y)` is out of bounds, matching `RgbaImage`.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.data.get_pixel(x, y).0
    }

    /// Consumes the icon and returns the raw RGBA byte buffer
    /// (row-major, 4 bytes per pixel).
    pub fn into_raw(self) -> Vec<u8> {
        self.data.into_raw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_px_is_square() {
        assert!(SizePx::new(100, 100).is_square());
        assert!(!SizePx::new(100, 200).is_square());
    }

    #[test]
    fn icon_dimensions_and_raw_layout() {
        let icon = RenderedIcon::new(RgbaImage::new(3, 2));
        assert_eq!(icon.dimensions(), SizePx::new(3, 2));

        let raw = icon.into_raw();
        assert_eq!(raw.len(), 3 * 2 * 4);
    }

    #[test]
    fn pixel_accessor_reads_rgba() {
        let mut img = RgbaImage::new(2, 2);
        img.put_pixel(1, 0, image::Rgba([1, 2, 3, 4]));
        let icon = RenderedIcon::new(img);
        assert_eq!(icon.pixel(1, 0), [1, 2, 3, 4]);
    }
}
