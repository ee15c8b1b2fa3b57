//! Core logic for the file listing.
//!
//! This module provides:
//! - [`ListingState`], [`sort_files`], [`filter_files`] - the client-side pipeline
//! - [`Collation`] - locale-aware name comparison
//! - [`live`] - live-update state machine and driver
//! - [`sync`] - fetch cycle and channel wiring

mod collate;
pub mod error;
mod listing;
pub mod live;
pub mod sync;
#[cfg(target_arch = "wasm32")]
pub mod transport;

pub use collate::{Collation, base_letters};
pub use listing::{ListingState, filter_files, sort_files};
