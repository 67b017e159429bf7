use serde::{Deserialize, Serialize};

use crate::config::{DIR_BLOCK_SIZE, DIR_PERMISSIONS, FILE_PERMISSIONS, GROUP, USERNAME};

// =============================================================================
// Filesystem Node
// =============================================================================

/// A single file or directory in the virtual filesystem.
///
/// Ownership and permissions are display-only; nothing enforces them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FsNode {
    /// Local name (one path segment). Empty for the root.
    pub name: String,
    /// File content or directory children.
    pub kind: NodeKind,
    /// Unix-style permission string, e.g. `-rw-r--r--`
    pub permissions: String,
    pub owner: String,
    pub group: String,
    /// Unix timestamp (seconds) set at creation.
    pub modified: u64,
}

/// Payload of a node: files hold text, directories hold children.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeKind {
    File { content: String },
    /// Children in insertion order. Names are unique.
    Directory { children: Vec<FsNode> },
}

impl FsNode {
    /// Create a file owned by the default user.
    pub fn file(name: impl Into<String>, content: impl Into<String>, modified: u64) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::File {
                content: content.into(),
            },
            permissions: FILE_PERMISSIONS.to_string(),
            owner: USERNAME.to_string(),
            group: GROUP.to_string(),
            modified,
        }
    }

    /// Create an empty directory owned by the default user.
    pub fn directory(name: impl Into<String>, modified: u64) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Directory {
                children: Vec::new(),
            },
            permissions: DIR_PERMISSIONS.to_string(),
            owner: USERNAME.to_string(),
            group: GROUP.to_string(),
            modified,
        }
    }

    /// Check if this node is a directory.
    pub fn is_directory(&self) -> bool {
        matches!(self.kind, NodeKind::Directory { .. })
    }

    /// Check if this node is a dotfile.
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }

    /// File content (files only).
    pub fn content(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::File { content } => Some(content),
            NodeKind::Directory { .. } => None,
        }
    }

    /// Children (directories only).
    pub fn children(&self) -> Option<&[FsNode]> {
        match &self.kind {
            NodeKind::Directory { children } => Some(children),
            NodeKind::File { .. } => None,
        }
    }

    /// Mutable children (directories only).
    pub fn children_mut(&mut self) -> Option<&mut Vec<FsNode>> {
        match &mut self.kind {
            NodeKind::Directory { children } => Some(children),
            NodeKind::File { .. } => None,
        }
    }

    /// Find a direct child by name.
    pub fn child(&self, name: &str) -> Option<&FsNode> {
        self.children()?.iter().find(|c| c.name == name)
    }

    /// Size in bytes: content length for files, a fixed block for directories.
    pub fn size(&self) -> u64 {
        match &self.kind {
            NodeKind::File { content } => content.len() as u64,
            NodeKind::Directory { .. } => DIR_BLOCK_SIZE,
        }
    }

    /// Insert a child, replacing any existing entry with the same name in place.
    ///
    /// Returns `false` if this node is a file.
    pub fn insert_child(&mut self, node: FsNode) -> bool {
        let Some(children) = self.children_mut() else {
            return false;
        };
        match children.iter_mut().find(|c| c.name == node.name) {
            Some(existing) => *existing = node,
            None => children.push(node),
        }
        true
    }
}

// =============================================================================
// Manifest Types
// =============================================================================

/// Initial filesystem layout, loaded from JSON.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Manifest {
    /// Timestamp applied to every manifest node.
    #[serde(default)]
    pub modified: u64,
    /// Directories, parents listed before children.
    #[serde(default)]
    pub directories: Vec<DirectoryEntry>,
    /// Files, created after all directories.
    #[serde(default)]
    pub files: Vec<FileEntry>,
}

/// Directory entry from the manifest.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DirectoryEntry {
    /// Absolute directory path
    pub path: String,
    pub permissions: Option<String>,
}

/// File entry from the manifest.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FileEntry {
    /// Absolute file path
    pub path: String,
    #[serde(default)]
    pub content: String,
    pub permissions: Option<String>,
}

// =============================================================================
// File Type
// =============================================================================

/// Text type guessed from a file extension, as reported by `file`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileType {
    Markdown,
    ShellScript,
    PlainText,
}

impl FileType {
    /// Detect file type from path extension.
    pub fn from_path(path: &str) -> Self {
        match path.rsplit_once('.').map(|(_, ext)| ext.to_lowercase()).as_deref() {
            Some("md") => Self::Markdown,
            Some("sh") => Self::ShellScript,
            _ => Self::PlainText,
        }
    }

    /// Human-readable description.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Markdown => "Markdown text",
            Self::ShellScript => "Bourne-Again shell script, ASCII text executable",
            Self::PlainText => "ASCII text",
        }
    }
}
