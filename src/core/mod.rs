//! Core logic of the terminal widget, free of DOM access.
//!
//! This module provides:
//! - [`Console`] tying the interpreter, transcript and animation together
//! - [`commands`] parsing, the built-in [`Registry`] and dispatch
//! - [`rain`] the matrix animation engine and its host traits
//! - [`locale`] greeting selection and [`prefs`] persisted preferences

pub mod commands;
mod console;
pub mod error;
pub mod host;
pub mod locale;
pub mod prefs;
pub mod rain;
mod scripts;
mod transcript;

pub use commands::{Command, PendingTask, Registry};
pub use console::{Console, Engine, Platform};
pub use host::{Clock, ShellHost};
pub use scripts::ScriptLibrary;
pub use transcript::{CommandHistory, Transcript};
