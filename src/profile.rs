//! Serializable badge configuration.
//!
//! A [`BadgeProfile`] captures the user-facing settings of the badge — the
//! style name, base/text colors and per-account overrides — in a format
//! that can be round-tripped through JSON by whatever preference store the
//! host uses. Colors are stored as hex strings and parsed on access;
//! unparsable values fall back to the profile defaults with a warning
//! rather than failing the whole render.
//!
//! # Example
//!
//! ```
//! use mailring::{AccountSettings, BadgeProfile, Style};
//!
//! let profile = BadgeProfile::new()
//!     .with_style("ring")
//!     .with_account(
//!         "work@example.com",
//!         AccountSettings::new().alias("work").color("#1e88e5"),
//!     );
//!
//! assert_eq!(profile.resolve_style().unwrap(), Style::Ring);
//! assert_eq!(profile.account_alias("work@example.com"), "work");
//!
//! let json = profile.to_json().unwrap();
//! let restored = BadgeProfile::from_json(&json).unwrap();
//! assert_eq!(restored.account_alias("work@example.com"), "work");
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::error::ComposeError;
use crate::request::Style;

/// The platform's canonical name for the all-mail label, used as the
/// default label to read unread counts from.
pub const ALL_MAIL_LABEL: &str = "^all";

// ============================================================================
// AccountSettings
// ============================================================================

/// Per-account overrides. Unset fields fall back to profile defaults:
/// the account name itself for the alias, the profile base color, and
/// [`ALL_MAIL_LABEL`] for the label.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AccountSettings {
    /// Display alias, e.g. "work" instead of "work@example.com".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    /// Slice color as a hex string, e.g. `"#1e88e5"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Canonical label name whose unread count is watched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl AccountSettings {
    /// Creates empty settings (everything falls back to defaults).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the display alias.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Sets the slice color hex string.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets the watched canonical label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

// ============================================================================
// BadgeProfile
// ============================================================================

/// A serializable profile of all badge settings.
///
/// # JSON format
///
/// ```json
/// {
///   "style": "ring",
///   "baseColor": "#000000",
///   "textColor": "#ffffff",
///   "groupSeparator": ",",
///   "accounts": {
///     "work@example.com": { "alias": "work", "color": "#1e88e5" }
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeProfile {
    /// Style name: one of `"disc"`, `"pie"`, `"ring"`.
    #[serde(default = "default_style")]
    pub style: String,

    /// Base color hex string (disc fill / ring center).
    #[serde(default = "default_base_color")]
    pub base_color: String,

    /// Overlay text color hex string.
    #[serde(default = "default_text_color")]
    pub text_color: String,

    /// Thousands-grouping separator for displayed counts.
    #[serde(default = "default_separator")]
    pub group_separator: char,

    /// Per-account overrides, keyed by account name.
    #[serde(default)]
    pub accounts: BTreeMap<String, AccountSettings>,
}

fn default_style() -> String {
    Style::default().name().to_string()
}

fn default_base_color() -> String {
    Rgba::BLACK.to_hex()
}

fn default_text_color() -> String {
    Rgba::WHITE.to_hex()
}

fn default_separator() -> char {
    ','
}

impl Default for BadgeProfile {
    fn default() -> Self {
        Self {
            style: default_style(),
            base_color: default_base_color(),
            text_color: default_text_color(),
            group_separator: default_separator(),
            accounts: BTreeMap::new(),
        }
    }
}

impl BadgeProfile {
    /// Creates a profile with all defaults: pie style, black base,
    /// white text, `,` grouping, no account overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the style name. Not validated here; see [`resolve_style`](Self::resolve_style).
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    /// Sets the base color hex string.
    pub fn with_base_color(mut self, color: impl Into<String>) -> Self {
        self.base_color = color.into();
        self
    }

    /// Sets the overlay text color hex string.
    pub fn with_text_color(mut self, color: impl Into<String>) -> Self {
        self.text_color = color.into();
        self
    }

    /// Adds or replaces the overrides for one account.
    pub fn with_account(mut self, name: impl Into<String>, settings: AccountSettings) -> Self {
        self.accounts.insert(name.into(), settings);
        self
    }

    /// Resolves the configured style name.
    ///
    /// Fails with [`ComposeError::UnknownStyle`] for names outside the
    /// supported set; the caller decides whether to fall back to
    /// [`Style::default`] or refuse to render.
    pub fn resolve_style(&self) -> Result<Style, ComposeError> {
        Style::from_name(&self.style)
    }

    /// The parsed base color, falling back to black on a malformed value.
    pub fn resolved_base_color(&self) -> Rgba {
        parse_or(&self.base_color, Rgba::BLACK)
    }

    /// The parsed text color, falling back to white on a malformed value.
    pub fn resolved_text_color(&self) -> Rgba {
        parse_or(&self.text_color, Rgba::WHITE)
    }

    /// The display alias for an account, defaulting to the account name.
    pub fn account_alias<'a>(&'a self, account: &'a str) -> &'a str {
        self.accounts
            .get(account)
            .and_then(|s| s.alias.as_deref())
            .unwrap_or(account)
    }

    /// The watched canonical label for an account, defaulting to
    /// [`ALL_MAIL_LABEL`].
    pub fn account_label<'a>(&'a self, account: &str) -> &'a str {
        self.accounts
            .get(account)
            .and_then(|s| s.label.as_deref())
            .unwrap_or(ALL_MAIL_LABEL)
    }

    /// The slice color for an account, defaulting to the profile base
    /// color (and ultimately to black if that is malformed too).
    pub fn account_color(&self, account: &str) -> Rgba {
        match self.accounts.get(account).and_then(|s| s.color.as_deref()) {
            Some(hex) => parse_or(hex, self.resolved_base_color()),
            None => self.resolved_base_color(),
        }
    }

    /// Serializes the profile to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the profile to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a profile from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

fn parse_or(hex: &str, fallback: Rgba) -> Rgba {
    Rgba::from_hex(hex).unwrap_or_else(|e| {
        log::warn!("{e}; using {} instead", fallback.to_hex());
        fallback
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let profile = BadgeProfile::new();
        assert_eq!(profile.resolve_style().unwrap(), Style::Pie);
        assert_eq!(profile.resolved_base_color(), Rgba::BLACK);
        assert_eq!(profile.resolved_text_color(), Rgba::WHITE);
        assert_eq!(profile.group_separator, ',');
        assert!(profile.accounts.is_empty());
    }

    #[test]
    fn unknown_style_fails_resolution() {
        let profile = BadgeProfile::new().with_style("hexagon");
        assert!(matches!(
            profile.resolve_style().unwrap_err(),
            ComposeError::UnknownStyle(ref s) if s == "hexagon"
        ));
    }

    #[test]
    fn account_fallbacks() {
        let profile = BadgeProfile::new().with_base_color("#102030");

        assert_eq!(profile.account_alias("a@example.com"), "a@example.com");
        assert_eq!(profile.account_label("a@example.com"), ALL_MAIL_LABEL);
        assert_eq!(
            profile.account_color("a@example.com"),
            Rgba::rgb(0x10, 0x20, 0x30)
        );
    }

    #[test]
    fn account_overrides_win() {
        let profile = BadgeProfile::new().with_account(
            "a@example.com",
            AccountSettings::new()
                .alias("work")
                .color("#ff0000")
                .label("^sq_ig_i_personal"),
        );

        assert_eq!(profile.account_alias("a@example.com"), "work");
        assert_eq!(profile.account_label("a@example.com"), "^sq_ig_i_personal");
        assert_eq!(profile.account_color("a@example.com"), Rgba::rgb(255, 0, 0));
    }

    #[test]
    fn malformed_color_falls_back_quietly() {
        let profile = BadgeProfile::new()
            .with_base_color("#00ff00")
            .with_account("a@example.com", AccountSettings::new().color("not-a-color"));

        // Falls back to the base color, not an error
        assert_eq!(profile.account_color("a@example.com"), Rgba::rgb(0, 255, 0));

        // And a malformed base color falls back to black
        let broken = BadgeProfile::new().with_base_color("oops");
        assert_eq!(broken.resolved_base_color(), Rgba::BLACK);
    }

    #[test]
    fn json_round_trip() {
        let profile = BadgeProfile::new()
            .with_style("ring")
            .with_base_color("#112233")
            .with_account("a@example.com", AccountSettings::new().alias("home"));

        let json = profile.to_json().unwrap();
        let restored = BadgeProfile::from_json(&json).unwrap();

        assert_eq!(restored.style, "ring");
        assert_eq!(restored.base_color, "#112233");
        assert_eq!(restored.account_alias("a@example.com"), "home");
    }

    #[test]
    fn json_uses_camel_case() {
        let json = BadgeProfile::new().to_json_pretty().unwrap();
        assert!(json.contains("\"baseColor\""));
        assert!(json.contains("\"textColor\""));
        assert!(json.contains("\"groupSeparator\""));
    }

    #[test]
    fn empty_json_gets_defaults() {
        let profile = BadgeProfile::from_json("{}").unwrap();
        assert_eq!(profile.style, "pie");
        assert_eq!(profile.base_color, "#000000");
        assert_eq!(profile.text_color, "#ffffff");
    }

    #[test]
    fn unset_optional_fields_are_omitted() {
        let profile =
            BadgeProfile::new().with_account("a@example.com", AccountSettings::new().alias("x"));
        let json = profile.to_json().unwrap();
        assert!(!json.contains("\"color\""), "unset color should be omitted");
        assert!(!json.contains("\"label\""), "unset label should be omitted");
    }
}
