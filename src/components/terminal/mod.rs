mod input;
mod output;
mod shell;
mod terminal;

pub use input::Input;
pub use output::Output;
pub use shell::Shell;
pub use terminal::Terminal;

/// DOM id of the prompt's text field.
pub const INPUT_ID: &str = "terminal-input";
