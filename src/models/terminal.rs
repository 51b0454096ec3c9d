//! Transcript line types for output rendering.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Represents a single line of the transcript with a unique ID
#[derive(Clone, Debug)]
pub struct OutputLine {
    /// Unique ID for efficient keying in For loops
    pub id: usize,
    /// The actual output data
    pub data: OutputLineData,
}

/// The actual content of a transcript line
#[derive(Clone, Debug, PartialEq)]
pub enum OutputLineData {
    /// Echoed input with the prompt that was active when it was submitted
    Command { prompt: String, input: String },
    /// Plain text output
    Text(String),
    /// Error message (red)
    Error(String),
    /// Success message (green)
    Success(String),
    /// Info message (yellow)
    Info(String),
    /// Greeting and section markers
    Banner(String),
}

// Global counter for generating unique IDs
static OUTPUT_LINE_COUNTER: AtomicUsize = AtomicUsize::new(0);

impl OutputLine {
    /// Create a new OutputLine with a unique ID
    fn new(data: OutputLineData) -> Self {
        Self {
            id: OUTPUT_LINE_COUNTER.fetch_add(1, Ordering::Relaxed),
            data,
        }
    }
}

impl PartialEq for OutputLine {
    fn eq(&self, other: &Self) -> bool {
        // Only compare data, not ID
        self.data == other.data
    }
}

impl OutputLine {
    pub fn text(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Text(s.into()))
    }

    pub fn error(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Error(s.into()))
    }

    pub fn success(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Success(s.into()))
    }

    pub fn info(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Info(s.into()))
    }

    pub fn banner(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Banner(s.into()))
    }

    pub fn command(prompt: impl Into<String>, input: impl Into<String>) -> Self {
        Self::new(OutputLineData::Command {
            prompt: prompt.into(),
            input: input.into(),
        })
    }

    /// The visible text of the line, without the prompt for echoed commands.
    pub fn content(&self) -> &str {
        match &self.data {
            OutputLineData::Command { input, .. } => input,
            OutputLineData::Text(s)
            | OutputLineData::Error(s)
            | OutputLineData::Success(s)
            | OutputLineData::Info(s)
            | OutputLineData::Banner(s) => s,
        }
    }
}
