//! Command execution result type.

use crate::core::rain::RainParams;
use crate::models::OutputLine;

use super::PendingTask;

/// State change a command asks the console to apply after its output.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Replace any running animation with a new one.
    StartRain { duration_ms: u32, params: RainParams },
    /// Stop the animation and wipe the transcript.
    Clear,
    /// Stop the animation and hide the terminal.
    Exit,
}

/// Result of executing a command.
///
/// Commands produce output immediately and may request a console effect or
/// defer to a network-bound [`PendingTask`].
#[derive(Clone, Debug)]
pub struct CommandResult {
    /// Output lines to display
    pub output: Vec<OutputLine>,
    pub effect: Option<Effect>,
    /// Asynchronous remainder whose lines are appended when it resolves
    pub pending: Option<PendingTask>,
}

impl CommandResult {
    /// Create a result with just output.
    pub fn output(lines: Vec<OutputLine>) -> Self {
        Self {
            output: lines,
            effect: None,
            pending: None,
        }
    }

    /// Output followed by a console effect.
    pub fn with_effect(lines: Vec<OutputLine>, effect: Effect) -> Self {
        Self {
            output: lines,
            effect: Some(effect),
            pending: None,
        }
    }

    /// Output now, more later.
    pub fn deferred(lines: Vec<OutputLine>, task: PendingTask) -> Self {
        Self {
            output: lines,
            effect: None,
            pending: Some(task),
        }
    }

    /// Create an empty result.
    pub fn empty() -> Self {
        Self::output(vec![])
    }
}
