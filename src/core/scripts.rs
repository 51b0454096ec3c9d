//! Demonstration script library and `cat` name resolution.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::SCRIPTS;
use crate::models::ScriptResource;

static EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(sh|ps1|bat)$").expect("valid extension pattern"));
static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_]+").expect("valid separator pattern"));

/// Read-only table of [`ScriptResource`]s keyed by canonical id.
#[derive(Clone, Copy, Debug)]
pub struct ScriptLibrary {
    entries: &'static [ScriptResource],
}

impl ScriptLibrary {
    pub const fn new(entries: &'static [ScriptResource]) -> Self {
        Self { entries }
    }

    /// The bundled library.
    pub const fn builtin() -> Self {
        Self::new(SCRIPTS)
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'static, ScriptResource> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, key: &str) -> Option<&'static ScriptResource> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    /// Resolve a user-typed name to a script.
    ///
    /// The token is lowercased, stripped of a `.sh`/`.ps1`/`.bat` extension and
    /// has runs of whitespace or underscores turned into hyphens. A canonical
    /// key match wins; otherwise exact title/alias matches are tried before
    /// aliases matching the normalized form.
    pub fn resolve(&self, token: &str) -> Option<&'static ScriptResource> {
        let token = token.trim();
        if token.is_empty() {
            return None;
        }

        let lowered = token.to_lowercase();
        let normalized = normalize(&lowered);

        if let Some(entry) = self.get(&normalized) {
            return Some(entry);
        }

        self.entries
            .iter()
            .find(|entry| {
                entry.title.eq_ignore_ascii_case(&lowered) || entry.aliases.contains(&lowered.as_str())
            })
            .or_else(|| {
                self.entries
                    .iter()
                    .find(|entry| entry.aliases.contains(&normalized.as_str()))
            })
    }
}

/// Strip a known extension and collapse whitespace/underscores into hyphens.
fn normalize(lowered: &str) -> String {
    let stem = EXTENSION.replace(lowered, "");
    SEPARATORS.replace_all(&stem, "-").into_owned()
}
