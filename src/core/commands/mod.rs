//! Command parsing and execution.
//!
//! This module provides:
//! - `Command` enum for parsed terminal commands
//! - `Registry` of built-in names, aliases and help text
//! - `CommandResult` and `Effect` for what a command asks of the console
//! - `PendingTask` for the network-bound remainder of a command
//!
//! # Architecture
//!
//! Input is split on whitespace. The lowercase first token is looked up in
//! the [`Registry`]; anything it does not know is handed to the remote
//! fallback as a [`PendingTask::Remote`].

mod execute;
mod pending;
pub mod registry;
mod result;

pub use execute::execute_command;
pub use pending::{IP_FAILURE, PendingTask, REMOTE_INVALID, REMOTE_UNREACHABLE, not_found};
pub use registry::{CommandKind, CommandSpec, Registry};
pub use result::{CommandResult, Effect};

use std::fmt;

use crate::config::HOME_PATH;

// =============================================================================
// Path Argument Type
// =============================================================================

/// A path argument passed to a command (e.g., `cd foo`, `cat bar.sh`).
///
/// Stored as typed; `cd` and `cat` interpret it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathArg(String);

impl PathArg {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PathArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<&str> for PathArg {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// Command Enum
// =============================================================================

/// Parsed terminal command
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Help,
    Ls,
    Cd(PathArg),
    Ifconfig,
    Curl,
    Cmatrix,
    /// `sudo ... cmatrix`: install hint only.
    SudoCmatrix,
    Clear,
    Exit,
    Whoami,
    Projects,
    Contact,
    Scripts,
    Cat(Option<PathArg>),
    /// Not built in. `key` is the lowercase first token, `line` the trimmed input.
    Unknown { key: String, line: String },
}

impl Command {
    /// Parse a raw input line. Returns `None` for blank input.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let mut tokens = line.split_whitespace();
        let key = tokens.next()?.to_lowercase();
        let args: Vec<&str> = tokens.collect();

        if key == "sudo" && args.iter().any(|a| a.eq_ignore_ascii_case("cmatrix")) {
            return Some(Self::SudoCmatrix);
        }

        let Some(spec) = Registry::builtin().lookup(&key) else {
            return Some(Self::Unknown {
                key,
                line: line.to_string(),
            });
        };

        Some(match spec.kind {
            CommandKind::Help => Self::Help,
            CommandKind::Ls => Self::Ls,
            CommandKind::Cd => Self::Cd(PathArg::new(args.first().copied().unwrap_or(HOME_PATH))),
            CommandKind::Ifconfig => Self::Ifconfig,
            CommandKind::Curl => Self::Curl,
            CommandKind::Cmatrix => Self::Cmatrix,
            CommandKind::Clear => Self::Clear,
            CommandKind::Exit => Self::Exit,
            CommandKind::Whoami => Self::Whoami,
            CommandKind::Projects => Self::Projects,
            CommandKind::Contact => Self::Contact,
            CommandKind::Scripts => Self::Scripts,
            CommandKind::Cat => Self::Cat(args.first().map(|a| PathArg::new(*a))),
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
