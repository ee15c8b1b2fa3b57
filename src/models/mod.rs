//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`FileRecord`], [`Modified`] - Entries of the server's file inventory
//! - [`SortKey`], [`SortSpec`] - Active table sort
//! - [`ConnectionState`], [`SyncStatus`] - Live-update status

mod file;
mod sort;
mod sync;

pub use file::{FileRecord, Modified, Timestamp};
pub use sort::{SortKey, SortSpec};
pub use sync::{ConnectionState, SyncStatus};
