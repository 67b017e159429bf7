//! Command execution result type.

use std::fmt;

use serde::Serialize;

use crate::config::exit;

/// What a command hands back to the session.
///
/// Most commands produce text. `clear` and `cd` instead ask the session to
/// change its own state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum Output {
    /// Text to display (may be empty)
    Text(String),
    /// Wipe the scrollback
    ClearScreen,
    /// Move the session to a new absolute directory
    ChangeDirectory(String),
}

impl Output {
    /// Wire form understood by string-based callers.
    ///
    /// `clear-screen` and `change-directory:<path>` are reserved; plain text
    /// passes through unchanged.
    pub fn sentinel(&self) -> String {
        self.to_string()
    }

    /// Displayable text, if this is not a control signal.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{}", s),
            Self::ClearScreen => write!(f, "clear-screen"),
            Self::ChangeDirectory(path) => write!(f, "change-directory:{}", path),
        }
    }
}

/// Result of executing a command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResult {
    pub output: Output,
    /// Error message, if the command failed
    pub error: Option<String>,
    /// 0 success, 1 failure, 2 missing path, 127 unknown command
    pub exit_code: i32,
}

impl CommandResult {
    /// Successful result with text output.
    pub fn text(output: impl Into<String>) -> Self {
        Self {
            output: Output::Text(output.into()),
            error: None,
            exit_code: exit::SUCCESS,
        }
    }

    /// Successful result with no output.
    pub fn empty() -> Self {
        Self::text(String::new())
    }

    /// Failed result with an error message and no output.
    pub fn failure(exit_code: i32, error: impl Into<String>) -> Self {
        Self {
            output: Output::Text(String::new()),
            error: Some(error.into()),
            exit_code,
        }
    }

    /// Ask the session to clear its scrollback.
    pub fn clear_screen() -> Self {
        Self {
            output: Output::ClearScreen,
            error: None,
            exit_code: exit::SUCCESS,
        }
    }

    /// Ask the session to change directory.
    pub fn change_directory(path: impl Into<String>) -> Self {
        Self {
            output: Output::ChangeDirectory(path.into()),
            error: None,
            exit_code: exit::SUCCESS,
        }
    }

    /// Attach an error and exit code while keeping any output produced so far.
    pub fn with_error(mut self, exit_code: i32, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self.exit_code = exit_code;
        self
    }

    /// Override the exit code.
    pub fn with_exit_code(mut self, exit_code: i32) -> Self {
        self.exit_code = exit_code;
        self
    }

    /// Check if the command succeeded.
    pub fn is_success(&self) -> bool {
        self.exit_code == exit::SUCCESS
    }

    /// Text output, or an empty string for control signals.
    pub fn text_output(&self) -> &str {
        self.output.as_text().unwrap_or_default()
    }
}
