//! Session state for the simulated shell.

use crate::config::{HOME_PATH, HOST_LABEL};

/// Shell style chosen once at load from platform hints.
///
/// Only affects how the prompt and a few command outputs are rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShellFlavor {
    #[default]
    Posix,
    Windows,
}

impl ShellFlavor {
    /// Pick a flavor from `navigator.platform` and `navigator.userAgent`.
    pub fn detect(platform: &str, user_agent: &str) -> Self {
        if platform.contains("Win") || user_agent.contains("Windows") {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    /// Render the input prompt for `path`.
    pub fn prompt(self, path: &str) -> String {
        match self {
            Self::Posix => format!("└──╼ {} $", path),
            Self::Windows => format!("PS C:\\{}>", path),
        }
    }
}

/// Whether the terminal is showing its prompt or the "closed" placeholder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Closed,
    Open,
}

/// Mutable state of one page session.
///
/// Created at load with defaults and mutated only by the console
/// (`cd`, `clear`, `exit`, open/hide/pause).
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    /// Simulated working directory.
    pub current_path: String,
    pub flavor: ShellFlavor,
    pub opened: bool,
    pub hidden: bool,
    /// Freezes the animation loop; command processing is unaffected.
    pub paused: bool,
    /// Set after the one-time greeting has been printed.
    pub welcomed: bool,
}

impl SessionState {
    pub fn new(flavor: ShellFlavor) -> Self {
        Self {
            current_path: HOME_PATH.to_string(),
            flavor,
            opened: false,
            hidden: false,
            paused: false,
            welcomed: false,
        }
    }

    pub fn visibility(&self) -> Visibility {
        if self.opened && !self.hidden {
            Visibility::Open
        } else {
            Visibility::Closed
        }
    }

    /// Current input prompt.
    pub fn prompt(&self) -> String {
        self.flavor.prompt(&self.current_path)
    }

    /// Decorative line shown above the prompt.
    pub fn top_line(&self) -> String {
        format!("┌─[{}]─[{}]", HOST_LABEL, self.current_path)
    }

    /// Whether the render loop should hold still this frame.
    pub fn frozen(&self) -> bool {
        self.paused || self.hidden
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(ShellFlavor::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_flavor() {
        assert_eq!(ShellFlavor::detect("Win32", ""), ShellFlavor::Windows);
        assert_eq!(
            ShellFlavor::detect("", "Mozilla/5.0 (Windows NT 10.0; Win64; x64)"),
            ShellFlavor::Windows
        );
        assert_eq!(ShellFlavor::detect("Linux x86_64", "X11"), ShellFlavor::Posix);
        assert_eq!(ShellFlavor::detect("MacIntel", ""), ShellFlavor::Posix);
    }

    #[test]
    fn test_prompt_rendering() {
        let mut state = SessionState::new(ShellFlavor::Posix);
        assert_eq!(state.prompt(), "└──╼ ~ $");
        assert_eq!(state.top_line(), "┌─[root@Jerr]─[~]");

        state.current_path = "/".to_string();
        state.flavor = ShellFlavor::Windows;
        assert_eq!(state.prompt(), "PS C:\\/>");
    }

    #[test]
    fn test_defaults() {
        let state = SessionState::default();
        assert_eq!(state.current_path, "~");
        assert_eq!(state.visibility(), Visibility::Closed);
        assert!(!state.frozen());
    }

    #[test]
    fn test_visibility() {
        let mut state = SessionState::default();
        state.opened = true;
        assert_eq!(state.visibility(), Visibility::Open);
        state.hidden = true;
        assert_eq!(state.visibility(), Visibility::Closed);
        assert!(state.frozen());
    }
}
