//! Bounded scrollback and command history.

use std::collections::VecDeque;

use crate::models::OutputLine;

/// Append-only log of output lines that drops the oldest past capacity.
#[derive(Clone, Debug)]
pub struct Transcript {
    lines: VecDeque<OutputLine>,
    capacity: usize,
}

impl Transcript {
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Transcript capacity must be greater than 0");
        Self {
            lines: VecDeque::with_capacity(capacity.min(256)),
            capacity,
        }
    }

    pub fn push(&mut self, line: OutputLine) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn extend(&mut self, lines: impl IntoIterator<Item = OutputLine>) {
        for line in lines {
            self.push(line);
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &OutputLine> + '_ {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn to_vec(&self) -> Vec<OutputLine> {
        self.lines.iter().cloned().collect()
    }
}

/// Previously submitted lines for ArrowUp/ArrowDown recall.
#[derive(Clone, Debug)]
pub struct CommandHistory {
    entries: VecDeque<String>,
    cursor: Option<usize>,
    capacity: usize,
}

impl CommandHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            cursor: None,
            capacity: capacity.max(1),
        }
    }

    /// Record a submitted line. Repeats of the latest entry are collapsed.
    /// Resets navigation.
    pub fn record(&mut self, line: &str) {
        let line = line.trim();
        self.cursor = None;
        if line.is_empty() || self.entries.back().is_some_and(|last| last == line) {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(line.to_string());
    }

    /// Step backwards in time.
    pub fn previous(&mut self) -> Option<&str> {
        let index = match self.cursor {
            _ if self.entries.is_empty() => return None,
            None => self.entries.len() - 1,
            Some(0) => 0,
            Some(i) => i - 1,
        };
        self.cursor = Some(index);
        self.entries.get(index).map(String::as_str)
    }

    /// Step forwards; past the newest entry yields an empty line.
    pub fn next(&mut self) -> Option<&str> {
        match self.cursor {
            Some(i) if i + 1 < self.entries.len() => {
                self.cursor = Some(i + 1);
                self.entries.get(i + 1).map(String::as_str)
            }
            Some(_) => {
                self.cursor = None;
                Some("")
            }
            None => None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
