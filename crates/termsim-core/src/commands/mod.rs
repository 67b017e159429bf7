//! Command parsing and execution.
//!
//! This module provides:
//! - `Command` enum for parsed shell commands
//! - `CommandResult` for command execution results
//! - `execute` for running a command line against the filesystem
//!
//! # Architecture
//!
//! A command name and its arguments are parsed into the `Command` enum,
//! then run by `Command::run`. Filesystem builtins live in `builtins`,
//! text-reading builtins (head, tail, wc, grep, file) in `text`, and the
//! side-effect-free toys in `novelty`.

mod builtins;
mod calc;
mod novelty;
mod result;
mod text;

pub use result::{CommandResult, Output};

use crate::config::{self, exit, text_filters};
use crate::filesystem::VirtualFs;
use crate::host::Host;
use crate::path;
use crate::utils::format::format_date_time;

// =============================================================================
// Command Enum
// =============================================================================

/// Parsed shell command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// List directory contents
    Ls {
        path: Option<String>,
        long: bool,
        all: bool,
    },
    /// Change directory. `None` means home.
    Cd(Option<String>),
    Pwd,
    Cat(Vec<String>),
    Echo(Vec<String>),
    Mkdir(Vec<String>),
    Touch(Vec<String>),
    Whoami,
    Date,
    Clear,
    Help,
    Uname {
        all: bool,
    },
    Which(Option<String>),
    File(Vec<String>),
    Head {
        lines: usize,
        file: Option<String>,
    },
    Tail {
        lines: usize,
        file: Option<String>,
    },
    Wc(Option<String>),
    Grep {
        pattern: Option<String>,
        file: Option<String>,
    },
    Hello,
    Calc(String),
    Weather,
    Joke,
    Cowsay(String),
    Fortune,
    Matrix,
    Ascii(String),
    Color(Option<String>),
    Timer(Option<String>),
    Unknown(String),
}

impl Command {
    /// All command names, builtins first, for `which` and completion.
    pub fn names() -> &'static [&'static str] {
        &[
            "ls", "cd", "pwd", "cat", "echo", "mkdir", "touch", "whoami", "date", "clear",
            "help", "uname", "which", "file", "head", "tail", "wc", "grep", "hello", "calc",
            "weather", "joke", "cowsay", "fortune", "matrix", "ascii", "color", "timer",
        ]
    }

    /// Check if a name is in the command table.
    pub fn is_known(name: &str) -> bool {
        Self::names().contains(&name)
    }

    /// Parse a command from its name and arguments.
    ///
    /// Matching is exact and case-sensitive. Flags are recognized only as
    /// whole tokens.
    pub fn parse(name: &str, args: &[String]) -> Self {
        match name {
            "ls" => {
                let mut long = false;
                let mut all = false;
                let mut path = None;
                for arg in args {
                    match arg.as_str() {
                        "-l" => long = true,
                        "-a" => all = true,
                        "-la" | "-al" => {
                            long = true;
                            all = true;
                        }
                        _ if path.is_none() => path = Some(arg.clone()),
                        _ => {}
                    }
                }
                Self::Ls { path, long, all }
            }
            "cd" => Self::Cd(args.first().cloned()),
            "pwd" => Self::Pwd,
            "cat" => Self::Cat(args.to_vec()),
            "echo" => Self::Echo(args.to_vec()),
            "mkdir" => Self::Mkdir(args.to_vec()),
            "touch" => Self::Touch(args.to_vec()),
            "whoami" => Self::Whoami,
            "date" => Self::Date,
            "clear" => Self::Clear,
            "help" => Self::Help,
            "uname" => Self::Uname {
                all: args.iter().any(|a| a == "-a"),
            },
            "which" => Self::Which(args.first().cloned()),
            "file" => Self::File(args.to_vec()),
            "head" => {
                let (lines, file) = parse_line_count(args, text_filters::DEFAULT_HEAD_LINES);
                Self::Head { lines, file }
            }
            "tail" => {
                let (lines, file) = parse_line_count(args, text_filters::DEFAULT_TAIL_LINES);
                Self::Tail { lines, file }
            }
            "wc" => Self::Wc(args.first().cloned()),
            "grep" => Self::Grep {
                pattern: args.first().cloned(),
                file: args.get(1).cloned(),
            },
            "hello" => Self::Hello,
            "calc" => Self::Calc(args.join(" ")),
            "weather" => Self::Weather,
            "joke" => Self::Joke,
            "cowsay" => Self::Cowsay(args.join(" ")),
            "fortune" => Self::Fortune,
            "matrix" => Self::Matrix,
            "ascii" => Self::Ascii(args.join(" ")),
            "color" => Self::Color(args.first().cloned()),
            "timer" => Self::Timer(args.first().cloned()),
            _ => Self::Unknown(name.to_string()),
        }
    }

    /// Run this command.
    ///
    /// `mkdir` and `touch` mutate `fs`; everything else only reads it.
    pub fn run(self, cwd: &str, fs: &mut VirtualFs, host: &mut dyn Host) -> CommandResult {
        match self {
            Self::Ls { path, long, all } => builtins::ls(path.as_deref(), long, all, cwd, fs),
            Self::Cd(path) => builtins::cd(path.as_deref(), cwd, fs),
            Self::Pwd => CommandResult::text(cwd),
            Self::Cat(files) => builtins::cat(&files, cwd, fs),
            Self::Echo(args) => CommandResult::text(args.join(" ")),
            Self::Mkdir(dirs) => builtins::mkdir(&dirs, cwd, fs, host.now()),
            Self::Touch(files) => builtins::touch(&files, cwd, fs, host.now()),
            Self::Whoami => CommandResult::text(config::USERNAME),
            Self::Date => CommandResult::text(format_date_time(host.now())),
            Self::Clear => CommandResult::clear_screen(),
            Self::Help => CommandResult::text(config::HELP_TEXT.trim_end()),
            Self::Uname { all } => builtins::uname(all),
            Self::Which(cmd) => builtins::which(cmd.as_deref()),
            Self::File(paths) => text::file(&paths, cwd, fs),
            Self::Head { lines, file } => text::head(lines, file.as_deref(), cwd, fs),
            Self::Tail { lines, file } => text::tail(lines, file.as_deref(), cwd, fs),
            Self::Wc(file) => text::wc(file.as_deref(), cwd, fs),
            Self::Grep { pattern, file } => text::grep(pattern.as_deref(), file.as_deref(), cwd, fs),
            Self::Hello => novelty::hello(host),
            Self::Calc(expr) => novelty::calc(&expr),
            Self::Weather => novelty::weather(host),
            Self::Joke => novelty::joke(host),
            Self::Cowsay(message) => novelty::cowsay(&message),
            Self::Fortune => novelty::fortune(host),
            Self::Matrix => novelty::matrix(host),
            Self::Ascii(input) => novelty::ascii(&input),
            Self::Color(theme) => novelty::color(theme.as_deref()),
            Self::Timer(seconds) => novelty::timer(seconds.as_deref()),
            Self::Unknown(name) => CommandResult::failure(
                exit::UNKNOWN_COMMAND,
                format!("bash: {}: command not found", name),
            ),
        }
    }
}

/// Resolve a path operand, expanding `~` to the home directory.
pub(crate) fn resolve_operand(cwd: &str, arg: &str) -> String {
    if arg == "~" {
        return config::HOME_DIR.to_string();
    }
    if let Some(rest) = arg.strip_prefix("~/") {
        return path::resolve(config::HOME_DIR, rest);
    }
    path::resolve(cwd, arg)
}

/// Parse `[-n N] <file>` for head and tail.
///
/// A missing or non-numeric count falls back to `default`.
fn parse_line_count(args: &[String], default: usize) -> (usize, Option<String>) {
    match args {
        [flag, count, rest @ ..] if flag == "-n" => {
            (count.parse().unwrap_or(default), rest.first().cloned())
        }
        [flag] if flag == "-n" => (default, None),
        _ => (default, args.first().cloned()),
    }
}

// =============================================================================
// Dispatch
// =============================================================================

/// Execute a command by name against the filesystem.
///
/// An empty name is a no-op. Unknown names yield exit code 127.
pub fn execute(
    name: &str,
    args: &[String],
    cwd: &str,
    fs: &mut VirtualFs,
    host: &mut dyn Host,
) -> CommandResult {
    if name.is_empty() {
        return CommandResult::empty();
    }
    Command::parse(name, args).run(cwd, fs, host)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn args(strs: &[&str]) -> Vec<String> {
        strs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_help_lists_every_command() {
        for name in Command::names() {
            assert!(
                config::HELP_TEXT
                    .lines()
                    .any(|line| line.split_whitespace().next() == Some(*name)),
                "help is missing {}",
                name
            );
        }
    }

    #[test]
    fn test_parse_ls() {
        assert_eq!(
            Command::parse("ls", &[]),
            Command::Ls {
                path: None,
                long: false,
                all: false
            }
        );
        assert_eq!(
            Command::parse("ls", &args(&["-l", "docs"])),
            Command::Ls {
                path: Some("docs".to_string()),
                long: true,
                all: false
            }
        );
        assert_eq!(
            Command::parse("ls", &args(&["-al"])),
            Command::Ls {
                path: None,
                long: true,
                all: true
            }
        );
        assert_eq!(
            Command::parse("ls", &args(&["-a", "x", "y"])),
            Command::Ls {
                path: Some("x".to_string()),
                long: false,
                all: true
            }
        );
    }

    #[test]
    fn test_parse_bundled_flags_are_literal() {
        // -lah is not a recognized combo, so it is taken as a path
        assert_eq!(
            Command::parse("ls", &args(&["-lah"])),
            Command::Ls {
                path: Some("-lah".to_string()),
                long: false,
                all: false
            }
        );
    }

    #[test]
    fn test_parse_head_tail_counts() {
        assert_eq!(
            Command::parse("head", &args(&["-n", "3", "f.txt"])),
            Command::Head {
                lines: 3,
                file: Some("f.txt".to_string())
            }
        );
        assert_eq!(
            Command::parse("tail", &args(&["f.txt"])),
            Command::Tail {
                lines: 10,
                file: Some("f.txt".to_string())
            }
        );
        assert_eq!(
            Command::parse("head", &args(&["-n", "abc", "f.txt"])),
            Command::Head {
                lines: 10,
                file: Some("f.txt".to_string())
            }
        );
        assert_eq!(
            Command::parse("tail", &args(&["-n", "-4", "f.txt"])),
            Command::Tail {
                lines: 10,
                file: Some("f.txt".to_string())
            }
        );
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(Command::parse("LS", &[]), Command::Unknown("LS".to_string()));
        assert_eq!(Command::parse("Help", &[]), Command::Unknown("Help".to_string()));
    }

    #[test]
    fn test_parse_joins_text_args() {
        assert_eq!(
            Command::parse("calc", &args(&["1", "+", "2"])),
            Command::Calc("1 + 2".to_string())
        );
        assert_eq!(
            Command::parse("cowsay", &args(&["hi", "there"])),
            Command::Cowsay("hi there".to_string())
        );
    }

    #[test]
    fn test_resolve_operand_expands_home() {
        assert_eq!(resolve_operand("/", "~"), "/home/user");
        assert_eq!(resolve_operand("/", "~/documents"), "/home/user/documents");
        assert_eq!(resolve_operand("/etc", "../tmp"), "/tmp");
        assert_eq!(resolve_operand("/etc", "a~b"), "/etc/a~b");
    }

    #[test]
    fn test_command_names() {
        let names = Command::names();
        assert_eq!(names.len(), 28);
        for builtin in ["ls", "cat", "head", "tail", "wc", "grep", "file", "which"] {
            assert!(names.contains(&builtin));
        }
        for toy in ["hello", "calc", "cowsay", "matrix", "timer"] {
            assert!(Command::is_known(toy));
        }
        assert!(!Command::is_known("rm"));
    }
}
