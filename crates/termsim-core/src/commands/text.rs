//! Text-reading builtins (head, tail, wc, grep, file).
//!
//! These read a single file's content and never touch the tree.

use crate::config::exit;
use crate::config::text_filters::WC_FIELD_WIDTH;
use crate::filesystem::VirtualFs;
use crate::models::FileType;

use super::{CommandResult, resolve_operand};

/// Why a file operand could not be read.
enum ReadError {
    Missing,
    IsDirectory,
}

/// Resolve an operand and borrow its content.
fn read_text<'a>(fs: &'a VirtualFs, cwd: &str, arg: &str) -> Result<&'a str, ReadError> {
    let node = fs
        .lookup(&resolve_operand(cwd, arg))
        .ok_or(ReadError::Missing)?;
    node.content().ok_or(ReadError::IsDirectory)
}

/// Take the first `n` lines of a file.
pub(super) fn head(n: usize, file: Option<&str>, cwd: &str, fs: &VirtualFs) -> CommandResult {
    let Some(file) = file else {
        return CommandResult::failure(exit::FAILURE, "head: missing file operand");
    };
    match read_text(fs, cwd, file) {
        Ok(content) => {
            let lines: Vec<&str> = content.split('\n').take(n).collect();
            CommandResult::text(lines.join("\n"))
        }
        Err(e) => open_failure("head", file, e),
    }
}

/// Take the last `n` lines of a file.
pub(super) fn tail(n: usize, file: Option<&str>, cwd: &str, fs: &VirtualFs) -> CommandResult {
    let Some(file) = file else {
        return CommandResult::failure(exit::FAILURE, "tail: missing file operand");
    };
    match read_text(fs, cwd, file) {
        Ok(content) => {
            let lines: Vec<&str> = content.split('\n').collect();
            let start = lines.len().saturating_sub(n);
            CommandResult::text(lines[start..].join("\n"))
        }
        Err(e) => open_failure("tail", file, e),
    }
}

fn open_failure(cmd: &str, file: &str, err: ReadError) -> CommandResult {
    let message = match err {
        ReadError::Missing => format!(
            "{}: cannot open '{}' for reading: No such file or directory",
            cmd, file
        ),
        ReadError::IsDirectory => format!("{}: error reading '{}': Is a directory", cmd, file),
    };
    CommandResult::failure(exit::FAILURE, message)
}

/// Line, word and byte counts of a text.
///
/// Lines are newline-separated segments, so an empty text has one line.
fn count(content: &str) -> (usize, usize, usize) {
    let lines = content.split('\n').count();
    let words = content.split_whitespace().count();
    let bytes = content.len();
    (lines, words, bytes)
}

/// Count lines, words and bytes of a file.
pub(super) fn wc(file: Option<&str>, cwd: &str, fs: &VirtualFs) -> CommandResult {
    let Some(file) = file else {
        return CommandResult::failure(exit::FAILURE, "wc: missing file operand");
    };
    match read_text(fs, cwd, file) {
        Ok(content) => {
            let (lines, words, bytes) = count(content);
            CommandResult::text(format!(
                "{:>w$} {:>w$} {:>w$} {}",
                lines,
                words,
                bytes,
                file,
                w = WC_FIELD_WIDTH
            ))
        }
        Err(ReadError::Missing) => CommandResult::failure(
            exit::FAILURE,
            format!("wc: {}: No such file or directory", file),
        ),
        Err(ReadError::IsDirectory) => {
            CommandResult::failure(exit::FAILURE, format!("wc: {}: Is a directory", file))
        }
    }
}

/// Print lines of a file containing `pattern` as a literal substring.
///
/// Exit code 0 if any line matched, 1 if none did or the operand is a
/// directory, 2 if the file does not exist. A single matching empty line
/// gives empty output with exit 0, so callers must look at the exit code
/// rather than the output.
pub(super) fn grep(
    pattern: Option<&str>,
    file: Option<&str>,
    cwd: &str,
    fs: &VirtualFs,
) -> CommandResult {
    let (Some(pattern), Some(file)) = (pattern, file) else {
        return CommandResult::failure(exit::FAILURE, "Usage: grep <pattern> <file>");
    };

    let content = match read_text(fs, cwd, file) {
        Ok(content) => content,
        Err(ReadError::Missing) => {
            return CommandResult::failure(
                exit::NOT_FOUND,
                format!("grep: {}: No such file or directory", file),
            );
        }
        Err(ReadError::IsDirectory) => {
            return CommandResult::failure(
                exit::FAILURE,
                format!("grep: {}: Is a directory", file),
            );
        }
    };

    let matches: Vec<&str> = content
        .split('\n')
        .filter(|line| line.contains(pattern))
        .collect();

    if matches.is_empty() {
        CommandResult::empty().with_exit_code(exit::FAILURE)
    } else {
        CommandResult::text(matches.join("\n"))
    }
}

/// Describe each operand. Unreadable operands are reported inline.
pub(super) fn file(paths: &[String], cwd: &str, fs: &VirtualFs) -> CommandResult {
    if paths.is_empty() {
        return CommandResult::failure(exit::FAILURE, "Usage: file <path...>");
    }

    let lines: Vec<String> = paths
        .iter()
        .map(|arg| {
            let resolved = resolve_operand(cwd, arg);
            match fs.lookup(&resolved) {
                Some(node) if node.is_directory() => format!("{}: directory", arg),
                Some(_) => format!("{}: {}", arg, FileType::from_path(&resolved).describe()),
                None => format!(
                    "{}: cannot open `{}' (No such file or directory)",
                    arg, arg
                ),
            }
        })
        .collect();

    CommandResult::text(lines.join("\n"))
}
