//! Filesystem and system builtins: ls, cd, cat, mkdir, touch, uname, which.

use crate::config::{HOME_DIR, UNAME_FULL, UNAME_SHORT, exit};
use crate::filesystem::VirtualFs;
use crate::models::FsNode;
use crate::path;
use crate::utils::console;
use crate::utils::format::format_date_short;

use super::{Command, CommandResult, resolve_operand};

/// Execute `ls`.
///
/// Children are listed in insertion order. Dotfiles appear only with `-a`,
/// which also adds `.` and `..` rows unless the target is the root.
pub(super) fn ls(
    path: Option<&str>,
    long: bool,
    all: bool,
    cwd: &str,
    fs: &VirtualFs,
) -> CommandResult {
    let target = path.unwrap_or(".");
    let resolved = resolve_operand(cwd, target);

    let Some(node) = fs.lookup(&resolved) else {
        return CommandResult::failure(
            exit::NOT_FOUND,
            format!("ls: cannot access '{}': No such file or directory", target),
        );
    };

    let Some(children) = node.children() else {
        // A file operand lists just itself
        let line = if long {
            long_entry(node, target)
        } else {
            target.to_string()
        };
        return CommandResult::text(line);
    };

    let mut rows: Vec<(&FsNode, &str)> = Vec::new();
    if all && resolved != "/" {
        rows.push((node, "."));
        if let Some(parent) = fs.lookup(&path::parent(&resolved)) {
            rows.push((parent, ".."));
        }
    }
    rows.extend(
        children
            .iter()
            .filter(|child| all || !child.is_hidden())
            .map(|child| (child, child.name.as_str())),
    );

    let output = if long {
        rows.iter()
            .map(|(node, name)| long_entry(node, name))
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        rows.iter()
            .map(|(_, name)| *name)
            .collect::<Vec<_>>()
            .join("  ")
    };

    CommandResult::text(output)
}

/// One `ls -l` row: permissions, links, owner, group, size, date, name.
fn long_entry(node: &FsNode, name: &str) -> String {
    format!(
        "{} 1 {} {} {:>8} {} {}",
        node.permissions,
        node.owner,
        node.group,
        node.size(),
        format_date_short(node.modified),
        name
    )
}

/// Execute `cd`. Success is a directory change request, not text.
pub(super) fn cd(path: Option<&str>, cwd: &str, fs: &VirtualFs) -> CommandResult {
    let target = path.unwrap_or(HOME_DIR);
    let resolved = resolve_operand(cwd, target);

    match fs.lookup(&resolved) {
        Some(node) if node.is_directory() => CommandResult::change_directory(resolved),
        Some(_) => CommandResult::failure(
            exit::FAILURE,
            format!("cd: {}: Not a directory", target),
        ),
        None => CommandResult::failure(
            exit::FAILURE,
            format!("cd: {}: No such file or directory", target),
        ),
    }
}

/// Execute `cat`. Stops at the first operand that cannot be read.
pub(super) fn cat(files: &[String], cwd: &str, fs: &VirtualFs) -> CommandResult {
    if files.is_empty() {
        return CommandResult::failure(exit::FAILURE, "cat: missing file operand");
    }

    let mut contents: Vec<&str> = Vec::with_capacity(files.len());
    for file in files {
        let resolved = resolve_operand(cwd, file);
        let error = match fs.lookup(&resolved) {
            Some(node) => match node.content() {
                Some(content) => {
                    contents.push(content);
                    continue;
                }
                None => format!("cat: {}: Is a directory", file),
            },
            None => format!("cat: {}: No such file or directory", file),
        };
        return CommandResult::text(contents.join("\n")).with_error(exit::FAILURE, error);
    }

    CommandResult::text(contents.join("\n"))
}

/// Execute `mkdir`. Existing entries are never replaced.
pub(super) fn mkdir(dirs: &[String], cwd: &str, fs: &mut VirtualFs, now: u64) -> CommandResult {
    if dirs.is_empty() {
        return CommandResult::failure(exit::FAILURE, "mkdir: missing operand");
    }

    for dir in dirs {
        let resolved = resolve_operand(cwd, dir);
        if fs.lookup(&resolved).is_some() {
            return CommandResult::failure(
                exit::FAILURE,
                format!("mkdir: cannot create directory '{}': File exists", dir),
            );
        }
        if let Err(e) = fs.create_directory(&resolved, now) {
            console::debug(&format!("mkdir {} failed: {}", resolved, e));
            return CommandResult::failure(
                exit::FAILURE,
                format!("mkdir: cannot create directory '{}': {}", dir, e.reason()),
            );
        }
    }

    CommandResult::empty()
}

/// Execute `touch`. Existing entries keep their content.
pub(super) fn touch(files: &[String], cwd: &str, fs: &mut VirtualFs, now: u64) -> CommandResult {
    if files.is_empty() {
        return CommandResult::failure(exit::FAILURE, "touch: missing file operand");
    }

    for file in files {
        let resolved = resolve_operand(cwd, file);
        if fs.lookup(&resolved).is_some() {
            continue;
        }
        if let Err(e) = fs.create_file(&resolved, "", now) {
            console::debug(&format!("touch {} failed: {}", resolved, e));
            return CommandResult::failure(
                exit::FAILURE,
                format!("touch: cannot touch '{}': {}", file, e.reason()),
            );
        }
    }

    CommandResult::empty()
}

/// Execute `uname`.
pub(super) fn uname(all: bool) -> CommandResult {
    CommandResult::text(if all { UNAME_FULL } else { UNAME_SHORT })
}

/// Execute `which`.
pub(super) fn which(cmd: Option<&str>) -> CommandResult {
    match cmd {
        None => CommandResult::failure(exit::FAILURE, "which: missing command name"),
        Some(name) if Command::is_known(name) => CommandResult::text(format!("/bin/{}", name)),
        Some(name) => {
            CommandResult::failure(exit::FAILURE, format!("which: no {} in (/bin)", name))
        }
    }
}
