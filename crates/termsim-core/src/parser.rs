//! Command line parsing.
//!
//! Input is split on runs of whitespace. There is no quoting, variable
//! expansion or piping: every word after the first is an argument.

/// A parsed command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCommand {
    pub name: String,
    pub args: Vec<String>,
}

impl ParsedCommand {
    /// Check if the line contained no command.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

/// Split a command line into a command name and its arguments.
///
/// Empty or blank input yields an empty name with no arguments.
pub fn parse_line(input: &str) -> ParsedCommand {
    let mut words = input.split_whitespace().map(str::to_string);
    ParsedCommand {
        name: words.next().unwrap_or_default(),
        args: words.collect(),
    }
}
