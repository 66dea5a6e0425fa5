//! The icon composer: turns a [`RenderRequest`] into a [`RenderedIcon`].
//!
//! Composition is a pure, single-pass transformation: validate, draw the
//! style-specific background, then composite the centered numeric overlay.
//! One call owns one pixmap; there is no cache and no shared state, so
//! concurrent calls on separate requests need no synchronization.

use resvg::tiny_skia::Pixmap;
use resvg::usvg::Options;

use crate::error::ComposeError;
use crate::geometry::slice_arcs;
use crate::icon::RenderedIcon;
use crate::raster::{composite_over, fill_circle, fill_sector, pixmap_to_rgba_image};
use crate::request::{RenderRequest, Style};
use crate::text::{format_grouped, render_overlay};

/// Renders badge icons from [`RenderRequest`] values.
///
/// The composer owns the font database used for the numeric overlay, so
/// construct it once and reuse it across notification updates; system
/// font discovery is the only non-trivial setup cost.
///
/// # Example
///
/// ```
/// use mailring::{IconComposer, RenderRequest, Rgba, Style};
///
/// let composer = IconComposer::new();
/// let request = RenderRequest::new(96, 96)
///     .with_style(Style::Pie)
///     .with_number(9)
///     .add_slice(4, Rgba::rgb(255, 0, 0))
///     .add_slice(3, Rgba::rgb(0, 255, 0))
///     .add_slice(2, Rgba::rgb(0, 0, 255));
///
/// let icon = composer.compose(&request).unwrap();
/// assert_eq!(icon.dimensions().width, 96);
/// ```
pub struct IconComposer {
    opts: Options<'static>,
}

impl IconComposer {
    /// Creates a composer with the host's system fonts loaded for the
    /// numeric overlay.
    pub fn new() -> Self {
        let mut opts = Options::default();
        opts.fontdb_mut().load_system_fonts();
        Self { opts }
    }

    /// Creates a composer without loading system fonts.
    ///
    /// The numeric overlay will be skipped (with a warning) unless the
    /// request's text color is transparent. Mostly useful in tests and
    /// sandboxed environments.
    pub fn without_fonts() -> Self {
        Self {
            opts: Options::default(),
        }
    }

    /// Renders the request into an icon.
    ///
    /// Deterministic for identical inputs, no side effects beyond the
    /// returned raster. Invalid input is rejected before any drawing and
    /// no partial bitmap is produced on failure.
    pub fn compose(&self, request: &RenderRequest) -> Result<RenderedIcon, ComposeError> {
        request.validate()?;

        let (width, height) = (request.width, request.height);
        log::debug!(
            "composing {}x{} {} icon with {} slices",
            width,
            height,
            request.style.name(),
            request.slices.len()
        );

        let mut pixmap = Pixmap::new(width, height).ok_or(ComposeError::Raster { width, height })?;

        match request.style {
            Style::Disc => draw_disc(&mut pixmap, request),
            Style::Pie => draw_pie(&mut pixmap, request),
            Style::Ring => draw_ring(&mut pixmap, request),
        }

        let mut image = pixmap_to_rgba_image(&pixmap);
        self.draw_overlay(&mut image, request);

        Ok(RenderedIcon::new(image))
    }

    /// Draws the formatted overlay number in the dead center of the icon.
    fn draw_overlay(&self, image: &mut image::RgbaImage, request: &RenderRequest) {
        if request.text_color.is_transparent() {
            return;
        }

        let label = format_grouped(request.number, request.group_separator);
        match render_overlay(
            &self.opts,
            &label,
            request.text_color,
            request.width,
            request.height,
        ) {
            Some(overlay) => composite_over(image, &overlay.image, overlay.x, overlay.y),
            None => log::warn!(
                "overlay label {label:?} produced no glyphs; is a sans-serif font available?"
            ),
        }
    }
}

impl Default for IconComposer {
    fn default() -> Self {
        Self::new()
    }
}

/// Disc: a solid circle of the base color, ignoring slices.
fn draw_disc(pixmap: &mut Pixmap, request: &RenderRequest) {
    let diameter = request.width.min(request.height);
    fill_circle(
        pixmap,
        request.width as f32 / 2.0,
        request.height as f32 / 2.0,
        diameter as f32 / 2.0,
        request.base_color,
    );
}

/// Pie: one proportional sector per slice, clockwise from 12-o'clock.
fn draw_pie(pixmap: &mut Pixmap, request: &RenderRequest) {
    for arc in slice_arcs(&request.slices) {
        fill_sector(
            pixmap,
            request.width,
            request.height,
            arc.start,
            arc.sweep,
            arc.color,
        );
    }
}

/// Ring: the pie, then a solid center disc of the base color with radius
/// `⌊width / 3⌋`, leaving the slices visible as a rim.
fn draw_ring(pixmap: &mut Pixmap, request: &RenderRequest) {
    draw_pie(pixmap, request);
    fill_circle(
        pixmap,
        request.width as f32 / 2.0,
        request.height as f32 / 2.0,
        (request.width / 3) as f32,
        request.base_color,
    );
}

// ============================================================================
// Tests
// ============================================================================
