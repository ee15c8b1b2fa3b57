//! Application configuration.
//!
//! Centralizes the default constants used throughout the application and
//! the [`AppConfig`] overrides read from the mount element's `data-*`
//! attributes.

use crate::core::error::ConfigError;

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the page header.
pub const APP_NAME: &str = "filedrop";

/// DOM id of the element the application mounts into.
pub const MOUNT_ID: &str = "app";

// =============================================================================
// Server Endpoints
// =============================================================================

/// File-listing endpoint (JSON array of file records).
pub const LISTING_URL: &str = "/api/files";

/// Server-sent events endpoint announcing listing changes.
pub const EVENTS_URL: &str = "/events";

/// Prefix for download links; the url-encoded file name is appended.
pub const DOWNLOAD_PREFIX: &str = "/download/";

/// Payload of an event that signals "listing changed, re-fetch".
pub const UPDATE_EVENT: &str = "update";

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: u32 = 10_000;

/// Live-update reconnect delays.
pub mod backoff {
    /// Delay before the first reconnect after a transport error.
    pub const INITIAL_MS: u32 = 3_000;
    /// Upper bound for the reconnect delay.
    pub const MAX_MS: u32 = 30_000;
}

/// Fixed polling interval used when server-sent events are unavailable.
pub const POLL_INTERVAL_MS: u32 = 5_000;

// =============================================================================
// UI Configuration
// =============================================================================

/// How long the clipboard confirmation stays on screen.
pub const TOAST_DURATION_MS: u32 = 2_000;

/// Locale used for name collation and date display.
pub const DEFAULT_LOCALE: &str = "fr-FR";

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

// =============================================================================
// Runtime Configuration
// =============================================================================

/// Runtime configuration, defaulting to the constants above.
///
/// The host page can override any field through `data-*` attributes on the
/// mount element, e.g. `<div id="app" data-locale="en-GB">`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub listing_url: String,
    pub events_url: String,
    pub download_prefix: String,
    /// Locale for collation and date formatting (BCP 47 tag).
    pub locale: String,
    pub poll_interval_ms: u32,
    pub log_level: log::LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listing_url: LISTING_URL.to_string(),
            events_url: EVENTS_URL.to_string(),
            download_prefix: DOWNLOAD_PREFIX.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            poll_interval_ms: POLL_INTERVAL_MS,
            log_level: log::LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Build a configuration from `(attribute, value)` pairs.
    ///
    /// Unknown attributes are ignored. Invalid values leave the default in
    /// place and are reported back so the caller can log them once a
    /// logger is installed.
    pub fn from_attributes<'a>(
        attrs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> (Self, Vec<ConfigError>) {
        let mut config = Self::default();
        let mut errors = Vec::new();

        for (key, value) in attrs {
            if let Err(e) = config.apply(key, value.trim()) {
                errors.push(e);
            }
        }

        (config, errors)
    }

    fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        if value.is_empty() {
            return Err(ConfigError::Empty(key.to_string()));
        }

        match key {
            "listing-url" => self.listing_url = value.to_string(),
            "events-url" => self.events_url = value.to_string(),
            "download-prefix" => {
                self.download_prefix = if value.ends_with('/') {
                    value.to_string()
                } else {
                    format!("{}/", value)
                };
            }
            "locale" => self.locale = value.to_string(),
            "poll-interval-ms" => {
                self.poll_interval_ms = match value.parse::<u32>() {
                    Ok(ms) if ms > 0 => ms,
                    _ => {
                        return Err(ConfigError::InvalidNumber {
                            key: key.to_string(),
                            value: value.to_string(),
                        });
                    }
                };
            }
            "log-level" => {
                self.log_level = value.parse().map_err(|_| ConfigError::InvalidLogLevel {
                    value: value.to_string(),
                })?;
            }
            _ => {}
        }
        Ok(())
    }
}

/// Names of the `data-*` attributes read from the mount element.
pub const CONFIG_ATTRIBUTES: &[&str] = &[
    "listing-url",
    "events-url",
    "download-prefix",
    "locale",
    "poll-interval-ms",
    "log-level",
];
