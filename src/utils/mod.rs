//! Utility modules for web, DOM, logging and formatting.
//!
//! Provides:
//! - [`fetch_json`], [`post_json`] - Network fetching with timeout
//! - [`dom`] - Window, document and navigator access
//! - [`format`] - Timestamp formatting
//! - [`log`] - `tracing` subscriber writing to the browser console

pub mod dom;
mod fetch;
pub mod format;
pub mod log;

pub use fetch::{fetch_json, post_json};
