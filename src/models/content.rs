//! Static content records shown by the informational commands.

/// A named, non-executable text blob displayed by `cat`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScriptResource {
    /// Canonical id, e.g. `forensics-linux`.
    pub key: &'static str,
    /// File name shown in headers, e.g. `collect_forensics_linux.sh`.
    pub title: &'static str,
    pub description: &'static str,
    /// Extra names accepted by `cat` (lowercase).
    pub aliases: &'static [&'static str],
    /// Verbatim multi-line content.
    pub content: &'static str,
}

/// A featured project listed by `projects`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub reference: Option<&'static str>,
}
