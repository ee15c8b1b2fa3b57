//! Live-update status shown in the page footer.

/// How the listing is being kept up to date.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionState {
    /// No subscription yet, or waiting for a reconnect timer.
    #[default]
    Disconnected,
    /// Subscription being opened.
    Connecting,
    /// Subscription open, receiving update notices.
    Connected,
    /// Server-sent events unavailable; fixed-interval polling.
    Polling,
}

impl ConnectionState {
    pub fn label(self) -> &'static str {
        match self {
            Self::Disconnected => "Reconnecting",
            Self::Connecting => "Connecting",
            Self::Connected => "Live",
            Self::Polling => "Polling",
        }
    }
}

/// Outcome of the most recent listing refreshes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SyncStatus {
    pub connection: ConnectionState,
    /// Local time of the last successful fetch (`HH:MM:SS`).
    pub last_refresh: Option<String>,
    /// Message of the last failed fetch, cleared on success.
    pub last_error: Option<String>,
}
