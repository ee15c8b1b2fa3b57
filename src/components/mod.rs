//! UI components built with Leptos.
//!
//! - [`listing`] - File listing page (table, search, status)
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`toast`] - Transient confirmation notice

pub mod icons;
pub mod listing;
pub mod toast;

pub use listing::Listing;
