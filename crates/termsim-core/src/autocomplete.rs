//! Command suggestions and tab completion.
//!
//! - Command names (e.g., "cl" -> "clear")
//! - Directory paths for `cd`, `ls`, `mkdir`
//! - Any entry for commands that read files
//!
//! A single match completes the whole input line. Several matches return
//! their common prefix and the candidate names for display.

use crate::commands::{Command, resolve_operand};
use crate::filesystem::VirtualFs;

// ============================================================================
// Public Types
// ============================================================================

/// Result of an autocomplete attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AutocompleteResult {
    /// Single match - replace the input with this line.
    Single(String),
    /// Multiple matches - (completed input up to the common prefix, candidates).
    Multiple(String, Vec<String>),
    /// No matches found.
    None,
}

// ============================================================================
// Configuration
// ============================================================================

/// Commands that take directory operands.
const DIR_COMMANDS: &[&str] = &["cd", "ls", "mkdir"];

/// Commands that take file operands.
const FILE_COMMANDS: &[&str] = &["cat", "head", "tail", "wc", "grep", "file", "touch"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CompletionMode {
    DirectoryPath,
    FilePath,
    None,
}

impl CompletionMode {
    fn for_command(cmd: &str) -> Self {
        if DIR_COMMANDS.contains(&cmd) {
            Self::DirectoryPath
        } else if FILE_COMMANDS.contains(&cmd) {
            Self::FilePath
        } else {
            Self::None
        }
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Command names starting with `prefix`, ignoring case.
///
/// An empty prefix returns every command.
pub fn suggest_commands(prefix: &str) -> Vec<&'static str> {
    let prefix = prefix.to_lowercase();
    Command::names()
        .iter()
        .copied()
        .filter(|name| name.starts_with(&prefix))
        .collect()
}

/// Complete the last word of `input`.
pub fn autocomplete(input: &str, cwd: &str, fs: &VirtualFs) -> AutocompleteResult {
    let input = input.trim_start();
    if input.is_empty() {
        return AutocompleteResult::None;
    }

    let Some((cmd, rest)) = input.split_once(char::is_whitespace) else {
        return complete_command(input);
    };

    let dirs_only = match CompletionMode::for_command(cmd) {
        CompletionMode::DirectoryPath => true,
        CompletionMode::FilePath => false,
        CompletionMode::None => return AutocompleteResult::None,
    };

    // Only the word under the cursor is completed
    let split = rest.rfind([' ', '\t']).map_or(0, |idx| idx + 1);
    let (earlier, partial) = rest.split_at(split);
    let line_prefix = format!("{} {}", cmd, earlier);

    complete_path(&line_prefix, partial, cwd, fs, dirs_only)
}

// ============================================================================
// Command Completion
// ============================================================================

fn complete_command(partial: &str) -> AutocompleteResult {
    let matches: Vec<String> = suggest_commands(partial)
        .into_iter()
        .map(str::to_string)
        .collect();

    match matches.len() {
        0 => AutocompleteResult::None,
        1 => AutocompleteResult::Single(format!("{} ", matches[0])),
        _ => {
            let common = find_common_prefix(&matches);
            AutocompleteResult::Multiple(common, matches)
        }
    }
}

// ============================================================================
// Path Completion
// ============================================================================

fn complete_path(
    line_prefix: &str,
    partial: &str,
    cwd: &str,
    fs: &VirtualFs,
    dirs_only: bool,
) -> AutocompleteResult {
    let (dir_part, name_part) = match partial.rfind('/') {
        Some(idx) => partial.split_at(idx + 1),
        None => ("", partial),
    };

    let search_dir = if dir_part.is_empty() {
        cwd.to_string()
    } else {
        resolve_operand(cwd, dir_part)
    };
    let Some(entries) = fs.list_dir(&search_dir) else {
        return AutocompleteResult::None;
    };

    let name_lower = name_part.to_lowercase();
    let show_hidden = name_part.starts_with('.');
    let matches: Vec<(String, bool)> = entries
        .iter()
        .filter(|node| !dirs_only || node.is_directory())
        .filter(|node| show_hidden || !node.is_hidden())
        .filter(|node| node.name.to_lowercase().starts_with(&name_lower))
        .map(|node| (node.name.clone(), node.is_directory()))
        .collect();

    match matches.as_slice() {
        [] => AutocompleteResult::None,
        [(name, is_dir)] => {
            let suffix = if *is_dir { "/" } else { " " };
            AutocompleteResult::Single(format!("{}{}{}{}", line_prefix, dir_part, name, suffix))
        }
        _ => {
            let names: Vec<String> = matches.iter().map(|(name, _)| name.clone()).collect();
            let common = find_common_prefix(&names);
            let display = matches
                .iter()
                .map(|(name, is_dir)| {
                    if *is_dir {
                        format!("{}/", name)
                    } else {
                        name.clone()
                    }
                })
                .collect();
            AutocompleteResult::Multiple(format!("{}{}{}", line_prefix, dir_part, common), display)
        }
    }
}

// ============================================================================
// Utilities
// ============================================================================

/// Find the common prefix of multiple strings (case-insensitive).
///
/// The prefix is taken from the first string.
fn find_common_prefix(strings: &[String]) -> String {
    let Some((first, rest)) = strings.split_first() else {
        return String::new();
    };

    let mut prefix_chars = first.chars().count();
    for s in rest {
        prefix_chars = first
            .chars()
            .zip(s.chars())
            .take(prefix_chars)
            .take_while(|(a, b)| a.to_lowercase().eq(b.to_lowercase()))
            .count();
    }

    first.chars().take(prefix_chars).collect()
}

// ============================================================================
// Tests
// ============================================================================
