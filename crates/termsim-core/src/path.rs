//! Path resolution for the virtual filesystem.
//!
//! All paths handed to the store are absolute and normalized: `/`-rooted,
//! no trailing slash (except the root), no `.` or `..` segments.

/// Resolve `input` against `current` into an absolute path.
///
/// No existence check happens here; that is deferred to lookup.
///
/// - `/abs/path/` keeps its segments verbatim, minus one trailing slash
/// - `.` is `current`
/// - `..` drops the last segment of `current`
/// - anything else is walked segment by segment from `current`
pub fn resolve(current: &str, input: &str) -> String {
    if input.starts_with('/') {
        if input.len() > 1 {
            return input.strip_suffix('/').unwrap_or(input).to_string();
        }
        return "/".to_string();
    }

    if input == "." {
        return current.to_string();
    }

    if input == ".." {
        return parent(current);
    }

    let mut stack: Vec<&str> = segments(current).collect();
    for part in input.split('/') {
        match part {
            ".." => {
                stack.pop();
            }
            "." | "" => {}
            _ => stack.push(part),
        }
    }

    join(&stack)
}

/// Parent of an absolute path. The root is its own parent.
pub fn parent(path: &str) -> String {
    let mut parts: Vec<&str> = segments(path).collect();
    parts.pop();
    join(&parts)
}

/// Split an absolute path into its parent and leaf name.
///
/// `"/home/user/x.txt"` gives `("/home/user", "x.txt")`; a top-level entry
/// has `/` as its parent. The root has an empty leaf.
pub fn parent_and_name(path: &str) -> (String, &str) {
    match path.rsplit_once('/') {
        Some(("", name)) => ("/".to_string(), name),
        Some((parent, name)) => (parent.to_string(), name),
        None => ("/".to_string(), path),
    }
}

/// Non-empty segments of a path.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

fn join(parts: &[&str]) -> String {
    if parts.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", parts.join("/"))
    }
}
