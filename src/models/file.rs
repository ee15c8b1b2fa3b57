use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// File Record
// =============================================================================

/// One entry of the file inventory returned by the listing endpoint.
///
/// Records are immutable once fetched; a refresh replaces the whole list.
/// `name` is the identity used for display, search and download links.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct FileRecord {
    /// File name (unique within a listing)
    pub name: String,
    /// Size in bytes
    pub size: i64,
    /// Last modification time as sent by the server
    pub modified: Modified,
    /// Hex-encoded SHA-256 digest of the content
    pub sha256: String,
}

impl FileRecord {
    /// Length of a hex-encoded SHA-256 digest.
    pub const DIGEST_HEX_LEN: usize = 64;

    /// Check whether `sha256` looks like a well-formed hex digest.
    pub fn has_valid_digest(&self) -> bool {
        self.sha256.len() == Self::DIGEST_HEX_LEN && hex::decode(&self.sha256).is_ok()
    }

    /// Text value of a field, by its JSON name.
    ///
    /// Used for sorting by keys without a dedicated comparison. Unknown
    /// fields yield an empty string.
    pub fn field_text(&self, field: &str) -> String {
        match field {
            "name" => self.name.clone(),
            "size" => self.size.to_string(),
            "modified" => self.modified.raw().to_string(),
            "sha256" => self.sha256.clone(),
            _ => String::new(),
        }
    }
}

// =============================================================================
// Modification Time
// =============================================================================

/// A server-provided timestamp, kept verbatim alongside its parsed value.
///
/// The server emits naive ISO 8601 strings (`2024-03-01T09:15:00.123456`).
/// RFC 3339 strings with an offset are accepted too and keep their absolute
/// instant. Values that parse to nothing still round-trip and display as sent.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub struct Modified {
    raw: String,
    timestamp: Option<Timestamp>,
}

/// A parsed modification time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Timestamp {
    /// Wall-clock time without a zone, shown as written.
    Local(NaiveDateTime),
    /// A point in time from a string carrying an offset; shown in the
    /// viewer's zone.
    Absolute(DateTime<Utc>),
}

impl Timestamp {
    /// Ordering key. Absolute instants compare by their UTC time.
    pub fn sort_key(&self) -> NaiveDateTime {
        match self {
            Self::Local(naive) => *naive,
            Self::Absolute(utc) => utc.naive_utc(),
        }
    }
}

impl Modified {
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn timestamp(&self) -> Option<Timestamp> {
        self.timestamp
    }

    /// Chronological ordering. Unparseable values sort first.
    pub fn cmp_instant(&self, other: &Self) -> Ordering {
        let key = |m: &Self| m.timestamp.map(|t| t.sort_key());
        key(self).cmp(&key(other))
    }
}

impl From<String> for Modified {
    fn from(raw: String) -> Self {
        let timestamp = parse_timestamp(raw.trim());
        Self { raw, timestamp }
    }
}

impl From<&str> for Modified {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<Modified> for String {
    fn from(modified: Modified) -> Self {
        modified.raw
    }
}

fn parse_timestamp(s: &str) -> Option<Timestamp> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(Timestamp::Absolute(dt.with_timezone(&Utc)));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(Timestamp::Local(dt));
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(Timestamp::Local)
}
