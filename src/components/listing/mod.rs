//! File listing UI components.
//!
//! Components:
//! - [`Listing`] - Page layout: header, search, table, status bar
//! - [`FileTable`] - Sortable table of files
//! - [`HashButton`] - Digest reveal and copy control
//! - [`SearchBox`] - Name filter input
//! - [`StatusBar`] - Live-update status

mod hash;
#[allow(clippy::module_inception)]
mod listing;
mod search;
mod status;
mod table;

pub use hash::HashButton;
pub use listing::Listing;
pub use search::SearchBox;
pub use status::StatusBar;
pub use table::FileTable;
