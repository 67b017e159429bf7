//! Interactive terminal session.
//!
//! A [`Session`] owns everything one terminal needs between commands: the
//! filesystem, the current directory, the scrollback and the command history.
//! Scrollback is bounded by [`MAX_TERMINAL_HISTORY`]; once full, the oldest
//! lines are dropped.

use std::collections::VecDeque;

use crate::autocomplete::{self, AutocompleteResult};
use crate::commands::{self, CommandResult, Output};
use crate::config::{HOME_DIR, HOSTNAME, MAX_COMMAND_HISTORY, MAX_TERMINAL_HISTORY, USERNAME};
use crate::filesystem::VirtualFs;
use crate::host::{Host, SystemHost};
use crate::models::OutputLine;
use crate::parser::parse_line;

/// Terminal state between commands.
pub struct Session {
    fs: VirtualFs,
    cwd: String,
    scrollback: VecDeque<OutputLine>,
    command_history: Vec<String>,
    history_index: Option<usize>,
    host: Box<dyn Host>,
}

impl Session {
    /// Session over the built-in filesystem, using the real clock and RNG.
    pub fn new() -> Self {
        Self::with_host(VirtualFs::with_defaults(), SystemHost::new())
    }

    /// Session over `fs`, drawing time and randomness from `host`.
    pub fn with_host(fs: VirtualFs, host: impl Host + 'static) -> Self {
        Self {
            fs,
            cwd: HOME_DIR.to_string(),
            scrollback: VecDeque::new(),
            command_history: Vec::new(),
            history_index: None,
            host: Box::new(host),
        }
    }

    /// Run one line of input.
    ///
    /// The line is echoed with the prompt, then executed. `clear` wipes the
    /// scrollback and a successful `cd` moves the session. Output and error
    /// text are appended line by line.
    pub fn submit(&mut self, line: &str) -> CommandResult {
        let prompt = self.prompt();
        self.push_line(OutputLine::command(prompt, line));
        self.add_to_command_history(line.trim());

        let parsed = parse_line(line);
        let result = commands::execute(
            &parsed.name,
            &parsed.args,
            &self.cwd,
            &mut self.fs,
            self.host.as_mut(),
        );

        match &result.output {
            Output::ClearScreen => self.scrollback.clear(),
            Output::ChangeDirectory(path) => self.cwd = path.clone(),
            Output::Text(text) if !text.is_empty() => {
                for text_line in text.split('\n') {
                    self.push_line(OutputLine::text(text_line));
                }
            }
            Output::Text(_) => {}
        }
        if let Some(error) = &result.error {
            for error_line in error.split('\n') {
                self.push_line(OutputLine::error(error_line));
            }
        }

        result
    }

    /// Prompt for the next line, e.g. `user@termsim:~/documents$`.
    pub fn prompt(&self) -> String {
        format!("{}@{}:{}$", USERNAME, HOSTNAME, display_path(&self.cwd))
    }

    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    pub fn fs(&self) -> &VirtualFs {
        &self.fs
    }

    /// Scrollback, oldest first.
    pub fn lines(&self) -> impl Iterator<Item = &OutputLine> {
        self.scrollback.iter()
    }

    pub fn command_history(&self) -> &[String] {
        &self.command_history
    }

    /// Command names starting with `prefix`.
    pub fn suggest(&self, prefix: &str) -> Vec<&'static str> {
        autocomplete::suggest_commands(prefix)
    }

    /// Tab-complete `input` against the current directory.
    pub fn complete(&self, input: &str) -> AutocompleteResult {
        autocomplete::autocomplete(input, &self.cwd, &self.fs)
    }

    /// Step through command history.
    ///
    /// A negative `direction` moves to older entries, a positive one to newer.
    /// Stepping past the newest entry returns `None` and resets the cursor.
    pub fn navigate_history(&mut self, direction: i32) -> Option<String> {
        if self.command_history.is_empty() {
            return None;
        }

        let last = self.command_history.len() - 1;
        let new_index = match self.history_index {
            None if direction < 0 => Some(last),
            Some(i) if direction < 0 && i > 0 => Some(i - 1),
            Some(i) if direction > 0 && i < last => Some(i + 1),
            Some(_) if direction > 0 => None,
            current => current,
        };

        self.history_index = new_index;
        new_index.map(|i| self.command_history[i].clone())
    }

    fn add_to_command_history(&mut self, cmd: &str) {
        if !cmd.is_empty() && self.command_history.last().map(String::as_str) != Some(cmd) {
            self.command_history.push(cmd.to_string());
            if self.command_history.len() > MAX_COMMAND_HISTORY {
                self.command_history.remove(0);
            }
        }
        self.history_index = None;
    }

    fn push_line(&mut self, line: OutputLine) {
        if self.scrollback.len() == MAX_TERMINAL_HISTORY {
            self.scrollback.pop_front();
        }
        self.scrollback.push_back(line);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Show the home directory as `~`.
fn display_path(cwd: &str) -> String {
    if cwd == HOME_DIR {
        return "~".to_string();
    }
    match cwd.strip_prefix(HOME_DIR) {
        Some(rest) if rest.starts_with('/') => format!("~{}", rest),
        _ => cwd.to_string(),
    }
}
