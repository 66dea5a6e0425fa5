//! RGBA color values used throughout the badge renderer.
//!
//! Colors arrive from the configuration surface as hex strings
//! (e.g. `"#1e88e5"`) and are carried through rendering as plain
//! 8-bit RGBA. Hex parsing is delegated to [`palette`].

use std::str::FromStr;

use palette::Srgb;

use crate::error::ComposeError;

/// An 8-bit RGBA color value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Opaque black, the default base color.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Opaque white, the default overlay text color.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Fully transparent. An overlay with this text color is skipped entirely.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Creates a color from individual channel values.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a fully opaque color from RGB channel values.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parses a hex color string such as `"#1e88e5"` or `"abc"`.
    ///
    /// Accepts 3- and 6-digit hex, with or without a leading `#`.
    /// The result is fully opaque.
    pub fn from_hex(hex: &str) -> Result<Self, ComposeError> {
        let rgb = Srgb::<u8>::from_str(hex)
            .map_err(|e| ComposeError::InvalidInput(format!("bad hex color {hex:?}: {e}")))?;
        Ok(Self::rgb(rgb.red, rgb.green, rgb.blue))
    }

    /// Formats this color as a 6-digit hex string with a leading `#`.
    ///
    /// The alpha channel is not encoded; callers that need it read
    /// [`Rgba::a`] directly.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Returns this color with the given alpha channel.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Returns true if this color is fully transparent.
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(c: [u8; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(c: Rgba) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}
