//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`OutputLine`] - Transcript line types
//! - [`SessionState`], [`ShellFlavor`], [`Visibility`] - Per-page shell session
//! - [`ScriptResource`], [`Project`] - Static content records

mod content;
mod session;
mod terminal;

pub use content::{Project, ScriptResource};
pub use session::{SessionState, ShellFlavor, Visibility};
pub use terminal::{OutputLine, OutputLineData};
