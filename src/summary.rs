//! Notification content assembly.
//!
//! The step between "here are the unread counts per account" and "here is
//! what to show": drop accounts with nothing unread, order the rest by
//! descending count, pick the primary account (most unread) for the tap
//! action and base color, build the human-readable summary line, and
//! produce the ordered slice list for the composer. All pure data — the
//! host owns querying the counts and posting the notification.

use crate::color::Rgba;
use crate::error::ComposeError;
use crate::profile::BadgeProfile;
use crate::request::{RenderRequest, Slice};
use crate::text::format_grouped;

/// One account's unread count, as gathered by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountStatus {
    /// The account name, e.g. `work@example.com`.
    pub name: String,
    /// Unread conversations in the account's watched label.
    pub unread: u32,
}

impl AccountStatus {
    pub fn new(name: impl Into<String>, unread: u32) -> Self {
        Self {
            name: name.into(),
            unread,
        }
    }
}

/// Everything the host needs to post (or refresh) the notification.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationSummary {
    /// Total unread across all contributing accounts; also the badge count
    /// and the overlay number.
    pub total_unread: u64,

    /// Comma-joined `alias (count)` line, ordered by descending unread,
    /// counts grouped per the profile separator.
    pub content_info: String,

    /// The account with the most unread mail; target of the tap action.
    pub primary_account: String,

    /// Resolved color of the primary account, used as the request's base
    /// color and the notification accent.
    pub primary_color: Rgba,

    /// The watched canonical label of the primary account.
    pub primary_label: String,

    /// Ordered slices (descending unread), ready for the composer.
    pub slices: Vec<Slice>,
}

impl NotificationSummary {
    /// Builds the render request for this summary on the given canvas.
    ///
    /// Fails with [`ComposeError::UnknownStyle`] if the profile's style
    /// name is not recognized.
    pub fn to_request(
        &self,
        profile: &BadgeProfile,
        width: u32,
        height: u32,
    ) -> Result<RenderRequest, ComposeError> {
        let style = profile.resolve_style()?;
        Ok(RenderRequest::new(width, height)
            .with_style(style)
            .with_base_color(self.primary_color)
            .with_text_color(profile.resolved_text_color())
            .with_number(self.total_unread as i64)
            .with_group_separator(profile.group_separator)
            .with_slices(self.slices.clone()))
    }
}

/// Assembles notification content from raw per-account counts.
///
/// Accounts with zero unread are dropped. Returns `None` when nothing is
/// unread at all — the caller cancels the notification instead of showing
/// an empty one. Ties in unread counts keep the input order (stable sort).
pub fn summarize(statuses: &[AccountStatus], profile: &BadgeProfile) -> Option<NotificationSummary> {
    let mut unread: Vec<&AccountStatus> = statuses.iter().filter(|s| s.unread > 0).collect();
    if unread.is_empty() {
        return None;
    }
    unread.sort_by_key(|s| std::cmp::Reverse(s.unread));

    let total_unread: u64 = unread.iter().map(|s| s.unread as u64).sum();

    let mut content_info = String::new();
    let mut slices = Vec::with_capacity(unread.len());
    for (i, status) in unread.iter().enumerate() {
        if i > 0 {
            content_info.push_str(", ");
        }
        content_info.push_str(&format!(
            "{} ({})",
            profile.account_alias(&status.name),
            format_grouped(status.unread as i64, profile.group_separator)
        ));
        slices.push(Slice::new(status.unread, profile.account_color(&status.name)));
    }

    let primary = unread[0];
    Some(NotificationSummary {
        total_unread,
        content_info,
        primary_account: primary.name.clone(),
        primary_color: profile.account_color(&primary.name),
        primary_label: profile.account_label(&primary.name).to_string(),
        slices,
    })
}

// ============================================================================
// Tests
// ============================================================================
