//! mailring: unread-mail badge icon rendering
//!
//! This crate renders the notification badge icon for a set of mail
//! accounts: a colored disc, a proportional pie chart, or a ring with a
//! solid center, with the total unread count drawn in the middle. It is a
//! pure in-process library — account discovery, preference storage and
//! notification posting all live in the host.
//!
//! # Example
//!
//! ```
//! use mailring::{IconComposer, RenderRequest, Rgba, Style};
//!
//! let composer = IconComposer::new();
//!
//! let request = RenderRequest::new(96, 96)
//!     .with_style(Style::Ring)
//!     .with_base_color(Rgba::rgb(0x1e, 0x88, 0xe5))
//!     .with_number(9)
//!     .add_slice(4, Rgba::rgb(0xe5, 0x39, 0x35))
//!     .add_slice(3, Rgba::rgb(0x43, 0xa0, 0x47))
//!     .add_slice(2, Rgba::rgb(0xfb, 0x8c, 0x00));
//!
//! let icon = composer.compose(&request).unwrap();
//! assert!(icon.dimensions().is_square());
//! ```
//!
//! # From counts to a notification
//!
//! The usual flow is: gather per-account unread counts, run them through
//! [`summarize`] with the user's [`BadgeProfile`], and render the
//! resulting request:
//!
//! ```
//! use mailring::{AccountStatus, BadgeProfile, IconComposer, summarize};
//!
//! let profile = BadgeProfile::new().with_style("pie");
//! let statuses = [
//!     AccountStatus::new("work@example.com", 7),
//!     AccountStatus::new("home@example.com", 2),
//! ];
//!
//! if let Some(summary) = summarize(&statuses, &profile) {
//!     let request = summary.to_request(&profile, 96, 96).unwrap();
//!     let icon = IconComposer::new().compose(&request).unwrap();
//!     assert_eq!(summary.content_info, "work@example.com (7), home@example.com (2)");
//!     assert_eq!(icon.dimensions().width, 96);
//! }
//! ```

mod color;
mod composer;
mod error;
mod geometry;
mod icon;
mod profile;
mod raster;
mod request;
mod summary;
mod text;

pub use color::Rgba;
pub use composer::IconComposer;
pub use error::ComposeError;
pub use geometry::{ArcSpan, TOP_ANGLE, slice_arcs};
pub use icon::{RenderedIcon, SizePx};
pub use profile::{ALL_MAIL_LABEL, AccountSettings, BadgeProfile};
pub use request::{RenderRequest, Slice, Style};
pub use summary::{AccountStatus, NotificationSummary, summarize};
pub use text::format_grouped;
