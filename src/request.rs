//! Render request types: styles, slices, and the request builder.
//!
//! A [`RenderRequest`] is the complete, immutable description of one badge
//! icon: its style, colors, numeric overlay and ordered slice list. Requests
//! are built fresh for each notification update and consumed once by
//! [`IconComposer`](crate::IconComposer); there is no caching and no
//! persistence.

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::error::ComposeError;

// ============================================================================
// Style
// ============================================================================

/// The rendering style of the badge icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// A solid disc of the base color. Ignores slices.
    Disc,
    /// A pie chart with one proportional sector per slice.
    #[default]
    Pie,
    /// A pie chart with a solid center disc of the base color, leaving
    /// the slices visible as a colored rim.
    Ring,
}

impl Style {
    /// All supported styles, in declaration order.
    pub const ALL: [Style; 3] = [Style::Disc, Style::Pie, Style::Ring];

    /// Resolves a style from its configuration name.
    ///
    /// Returns [`ComposeError::UnknownStyle`] for names outside the
    /// supported set; callers typically fall back to [`Style::default`]
    /// rather than rendering nothing.
    pub fn from_name(name: &str) -> Result<Self, ComposeError> {
        match name {
            "disc" => Ok(Style::Disc),
            "pie" => Ok(Style::Pie),
            "ring" => Ok(Style::Ring),
            other => Err(ComposeError::UnknownStyle(other.to_string())),
        }
    }

    /// The configuration name of this style.
    pub fn name(self) -> &'static str {
        match self {
            Style::Disc => "disc",
            Style::Pie => "pie",
            Style::Ring => "ring",
        }
    }
}

// ============================================================================
// Slice
// ============================================================================

/// One account's contribution to the chart.
///
/// Ordering is caller-supplied and significant: slices are laid out in the
/// order given, starting at the 12-o'clock position and proceeding
/// clockwise. Counts are unsigned, so negative contributions are
/// unrepresentable by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slice {
    /// The unread count backing this slice. The angular sweep is
    /// proportional to `count / total`.
    pub count: u32,

    /// The fill color of the slice.
    pub color: Rgba,
}

impl Slice {
    /// Creates a new slice.
    pub fn new(count: u32, color: Rgba) -> Self {
        Self { count, color }
    }
}

// ============================================================================
// RenderRequest
// ============================================================================

/// A complete description of one badge icon to render.
///
/// Built incrementally with the `with_*`/[`add_slice`](Self::add_slice)
/// methods, then handed to [`IconComposer`](crate::IconComposer) once.
///
/// # Example
///
/// ```
/// use mailring::{RenderRequest, Rgba, Style};
///
/// let request = RenderRequest::new(96, 96)
///     .with_style(Style::Pie)
///     .with_base_color(Rgba::rgb(0x1e, 0x88, 0xe5))
///     .with_number(1234)
///     .add_slice(4, Rgba::rgb(255, 0, 0))
///     .add_slice(3, Rgba::rgb(0, 255, 0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    /// The rendering style.
    pub style: Style,

    /// Base color: the whole disc for [`Style::Disc`], the center disc
    /// for [`Style::Ring`]. Unused by [`Style::Pie`].
    pub base_color: Rgba,

    /// Fill color of the centered numeric overlay. A fully transparent
    /// color suppresses the overlay.
    pub text_color: Rgba,

    /// The number rendered in the center of the icon, typically the
    /// total unread count. Formatted with thousands grouping.
    pub number: i64,

    /// Grouping separator for the numeric overlay, e.g. `,` for "1,234".
    pub group_separator: char,

    /// Ordered slice list. May be empty; only [`Style::Disc`] produces a
    /// meaningful icon from an empty list.
    pub slices: Vec<Slice>,

    /// Canvas width in pixels. Must be positive.
    pub width: u32,

    /// Canvas height in pixels. Must be positive.
    pub height: u32,
}

impl RenderRequest {
    /// Creates a request with the default style (pie), a black base,
    /// white text, `,` grouping, number 0 and no slices.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            style: Style::default(),
            base_color: Rgba::BLACK,
            text_color: Rgba::WHITE,
            number: 0,
            group_separator: ',',
            slices: Vec::new(),
            width,
            height,
        }
    }

    /// Sets the rendering style.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Sets the base color.
    pub fn with_base_color(mut self, color: Rgba) -> Self {
        self.base_color = color;
        self
    }

    /// Sets the overlay text color.
    pub fn with_text_color(mut self, color: Rgba) -> Self {
        self.text_color = color;
        self
    }

    /// Sets the number displayed in the middle of the icon.
    pub fn with_number(mut self, number: i64) -> Self {
        self.number = number;
        self
    }

    /// Sets the thousands-grouping separator for the overlay.
    pub fn with_group_separator(mut self, separator: char) -> Self {
        self.group_separator = separator;
        self
    }

    /// Appends a slice to the chart.
    pub fn add_slice(mut self, count: u32, color: Rgba) -> Self {
        self.slices.push(Slice::new(count, color));
        self
    }

    /// Replaces the slice list wholesale, preserving order.
    pub fn with_slices(mut self, slices: Vec<Slice>) -> Self {
        self.slices = slices;
        self
    }

    /// Sum of all slice counts.
    pub fn total_count(&self) -> u64 {
        self.slices.iter().map(|s| s.count as u64).sum()
    }

    /// Validates the request, returning the first problem found.
    ///
    /// Called by the composer before any drawing.
    pub fn validate(&self) -> Result<(), ComposeError> {
        if self.width == 0 || self.height == 0 {
            return Err(ComposeError::InvalidInput(format!(
                "canvas dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_from_name() {
        assert_eq!(Style::from_name("disc").unwrap(), Style::Disc);
        assert_eq!(Style::from_name("pie").unwrap(), Style::Pie);
        assert_eq!(Style::from_name("ring").unwrap(), Style::Ring);
    }

    #[test]
    fn style_unknown_name_fails() {
        let err = Style::from_name("donut").unwrap_err();
        assert!(matches!(err, ComposeError::UnknownStyle(ref s) if s == "donut"));

        // Case-sensitive, like the original preference values
        assert!(Style::from_name("Pie").is_err());
        assert!(Style::from_name("").is_err());
    }

    #[test]
    fn style_name_round_trip() {
        for style in Style::ALL {
            assert_eq!(Style::from_name(style.name()).unwrap(), style);
        }
    }

    #[test]
    fn default_style_is_pie() {
        assert_eq!(Style::default(), Style::Pie);
    }

    #[test]
    fn request_builder_accumulates_slices_in_order() {
        let request = RenderRequest::new(64, 64)
            .add_slice(4, Rgba::rgb(255, 0, 0))
            .add_slice(3, Rgba::rgb(0, 255, 0))
            .add_slice(2, Rgba::rgb(0, 0, 255));

        assert_eq!(request.slices.len(), 3);
        assert_eq!(request.slices[0].count, 4);
        assert_eq!(request.slices[2].color, Rgba::rgb(0, 0, 255));
        assert_eq!(request.total_count(), 9);
    }

    #[test]
    fn request_defaults() {
        let request = RenderRequest::new(48, 48);
        assert_eq!(request.style, Style::Pie);
        assert_eq!(request.base_color, Rgba::BLACK);
        assert_eq!(request.text_color, Rgba::WHITE);
        assert_eq!(request.number, 0);
        assert_eq!(request.group_separator, ',');
        assert!(request.slices.is_empty());
    }

    #[test]
    fn validate_rejects_zero_dimensions() {
        assert!(RenderRequest::new(0, 64).validate().is_err());
        assert!(RenderRequest::new(64, 0).validate().is_err());
        assert!(RenderRequest::new(64, 64).validate().is_ok());
    }

    #[test]
    fn total_count_does_not_overflow_u32() {
        let request = RenderRequest::new(8, 8)
            .add_slice(u32::MAX, Rgba::BLACK)
            .add_slice(u32::MAX, Rgba::WHITE);
        assert_eq!(request.total_count(), 2 * (u32::MAX as u64));
    }
}
