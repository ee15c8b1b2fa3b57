//! Utility modules for web, DOM, and formatting operations.
//!
//! Provides:
//! - [`format`] - Human-readable sizes and dates
//! - [`fetch_json`] - Network fetching with timeout
//! - [`download_url`], [`download_hint`] - Download links
//! - [`logger`] - `log` backend for the browser console

pub mod dom;
mod fetch;
pub mod format;
pub mod logger;
mod url;

pub use fetch::{fetch_json, parse_json};
pub use url::{download_hint, download_url};
