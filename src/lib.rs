//! Live file listing for the browser.
//!
//! Fetches the server's file inventory, sorts and filters it client-side,
//! and keeps it fresh over server-sent events, falling back to polling.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;
