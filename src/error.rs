//! Error types for badge composition.

use thiserror::Error;

/// Errors that can occur while composing a badge icon.
///
/// Validation is eager: every variant is raised before any drawing
/// happens, and no partial bitmap is ever returned alongside an error.
/// The composer never catches or retries; callers own the decision to
/// fall back to a default icon or suppress the notification.
#[derive(Error, Debug)]
pub enum ComposeError {
    /// The request failed validation (zero canvas dimensions, malformed color).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A style name outside the supported set (`disc`, `pie`, `ring`).
    #[error("unknown style: {0:?}")]
    UnknownStyle(String),

    /// The raster target could not be allocated.
    #[error("raster allocation failed for {width}x{height} canvas")]
    Raster { width: u32, height: u32 },
}
