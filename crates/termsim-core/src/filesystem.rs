use crate::config::FILESYSTEM_MANIFEST;
use crate::error::FsError;
use crate::models::{FsNode, Manifest};
use crate::path;
use crate::utils::console;

/// In-memory filesystem tree.
///
/// # Path Convention
///
/// Every method takes an absolute, normalized path as produced by
/// [`resolve`](crate::resolve):
///
/// - Root: `"/"`
/// - Nested entry: `"/home/user/notes.md"`
/// - No trailing slash, no `.` or `..` segments
///
/// The tree only grows. Nodes are inserted (or overwritten) under an existing
/// directory and never removed or renamed.
#[derive(Clone, Debug, PartialEq)]
pub struct VirtualFs {
    root: FsNode,
}

impl VirtualFs {
    /// Create a filesystem containing only the root directory.
    pub fn empty() -> Self {
        Self {
            root: FsNode::directory("", 0),
        }
    }

    /// Create the default filesystem from the embedded manifest.
    ///
    /// Falls back to an empty tree if the manifest is broken.
    pub fn with_defaults() -> Self {
        match Self::from_manifest_json(FILESYSTEM_MANIFEST) {
            Ok(fs) => fs,
            Err(e) => {
                console::warn(&format!("Failed to load filesystem manifest: {}", e));
                Self::empty()
            }
        }
    }

    /// Build a filesystem from manifest JSON.
    pub fn from_manifest_json(json: &str) -> Result<Self, FsError> {
        let manifest: Manifest = serde_json::from_str(json)?;
        Self::from_manifest(&manifest)
    }

    /// Build a filesystem from a manifest.
    ///
    /// Directories are created first, in listed order, then files. Parents
    /// are never created implicitly, so a manifest must list them.
    pub fn from_manifest(manifest: &Manifest) -> Result<Self, FsError> {
        let mut fs = Self::empty();
        fs.root.modified = manifest.modified;

        for dir in &manifest.directories {
            fs.create_directory(&dir.path, manifest.modified)?;
            if let Some(perms) = &dir.permissions {
                fs.set_permissions(&dir.path, perms);
            }
        }

        for file in &manifest.files {
            fs.create_file(&file.path, &file.content, manifest.modified)?;
            if let Some(perms) = &file.permissions {
                fs.set_permissions(&file.path, perms);
            }
        }

        Ok(fs)
    }

    /// Serialize the whole tree to JSON.
    pub fn snapshot(&self) -> Result<String, FsError> {
        Ok(serde_json::to_string(&self.root)?)
    }

    /// Restore a tree serialized by [`snapshot`](Self::snapshot).
    pub fn from_snapshot(json: &str) -> Result<Self, FsError> {
        let root: FsNode = serde_json::from_str(json)?;
        if !root.is_directory() {
            return Err(FsError::Manifest("root must be a directory".to_string()));
        }
        Ok(Self { root })
    }

    /// The root directory node.
    pub fn root(&self) -> &FsNode {
        &self.root
    }

    /// Look up a node by absolute path.
    ///
    /// Walks segment by segment; fails as soon as a segment is missing or a
    /// file is reached before the path is exhausted.
    pub fn lookup(&self, path: &str) -> Option<&FsNode> {
        let mut current = &self.root;
        for part in path::segments(path) {
            current = current.child(part)?;
        }
        Some(current)
    }

    fn lookup_mut(&mut self, path: &str) -> Option<&mut FsNode> {
        let mut current = &mut self.root;
        for part in path::segments(path) {
            current = current.children_mut()?.iter_mut().find(|c| c.name == part)?;
        }
        Some(current)
    }

    /// Check if a path is an existing directory.
    pub fn is_directory(&self, path: &str) -> bool {
        self.lookup(path).is_some_and(FsNode::is_directory)
    }

    /// List a directory's children in insertion order.
    ///
    /// Returns `None` if the path is missing or not a directory.
    pub fn list_dir(&self, path: &str) -> Option<&[FsNode]> {
        self.lookup(path)?.children()
    }

    /// Create or overwrite a file.
    ///
    /// The parent directory must already exist. An existing entry with the
    /// same name, file or directory, is replaced.
    pub fn create_file(&mut self, path: &str, content: &str, modified: u64) -> Result<(), FsError> {
        let (parent, name) = path::parent_and_name(path);
        let node = FsNode::file(name, content, modified);
        self.insert(path, &parent, node)
    }

    /// Create or overwrite a directory with no children.
    ///
    /// The parent directory must already exist.
    pub fn create_directory(&mut self, path: &str, modified: u64) -> Result<(), FsError> {
        let (parent, name) = path::parent_and_name(path);
        let node = FsNode::directory(name, modified);
        self.insert(path, &parent, node)
    }

    fn insert(&mut self, path: &str, parent: &str, node: FsNode) -> Result<(), FsError> {
        if matches!(node.name.as_str(), "" | "." | "..") {
            return Err(FsError::InvalidPath(path.to_string()));
        }

        let parent_node = self
            .lookup_mut(parent)
            .ok_or_else(|| FsError::ParentNotFound(path.to_string()))?;

        if parent_node.insert_child(node) {
            Ok(())
        } else {
            Err(FsError::ParentNotDirectory(path.to_string()))
        }
    }

    fn set_permissions(&mut self, path: &str, permissions: &str) {
        if let Some(node) = self.lookup_mut(path) {
            node.permissions = permissions.to_string();
        }
    }
}

impl Default for VirtualFs {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_fs() -> VirtualFs {
        let mut fs = VirtualFs::empty();
        fs.create_directory("/home", 0).unwrap();
        fs.create_directory("/home/user", 0).unwrap();
        fs.create_file("/home/user/hello.md", "# Hello", 0).unwrap();
        fs
    }

    #[test]
    fn test_lookup_root() {
        let fs = VirtualFs::empty();
        let root = fs.lookup("/").expect("root should exist");
        assert!(root.is_directory());
    }

    #[test]
    fn test_lookup_nested() {
        let fs = create_test_fs();
        assert!(fs.is_directory("/home"));
        assert!(fs.is_directory("/home/user"));
        assert_eq!(
            fs.lookup("/home/user/hello.md").and_then(FsNode::content),
            Some("# Hello")
        );
    }

    #[test]
    fn test_lookup_missing() {
        let fs = create_test_fs();
        assert!(fs.lookup("/nope").is_none());
        assert!(fs.lookup("/home/nope/deeper").is_none());
    }

    #[test]
    fn test_lookup_through_file_fails() {
        let fs = create_test_fs();
        assert!(fs.lookup("/home/user/hello.md/child").is_none());
    }

    #[test]
    fn test_create_file_round_trip() {
        let mut fs = create_test_fs();
        fs.create_file("/home/user/x.txt", "hi", 42).unwrap();

        let node = fs.lookup("/home/user/x.txt").unwrap();
        assert_eq!(node.content(), Some("hi"));
        assert_eq!(node.size(), 2);
        assert_eq!(node.modified, 42);
    }

    #[test]
    fn test_create_directory_then_file() {
        let mut fs = create_test_fs();
        fs.create_directory("/home/user/new", 0).unwrap();
        fs.create_file("/home/user/new/a.txt", "", 0).unwrap();
        assert!(fs.lookup("/home/user/new/a.txt").is_some());
    }

    #[test]
    fn test_create_file_missing_parent_leaves_tree_untouched() {
        let mut fs = create_test_fs();
        let before = fs.clone();

        let err = fs.create_file("/missing/x.txt", "hi", 0).unwrap_err();
        assert_eq!(err, FsError::ParentNotFound("/missing/x.txt".to_string()));
        assert_eq!(fs, before);
    }

    #[test]
    fn test_create_under_file_fails() {
        let mut fs = create_test_fs();
        let err = fs.create_directory("/home/user/hello.md/sub", 0).unwrap_err();
        assert_eq!(
            err,
            FsError::ParentNotDirectory("/home/user/hello.md/sub".to_string())
        );
    }

    #[test]
    fn test_create_root_is_invalid() {
        let mut fs = create_test_fs();
        assert!(matches!(
            fs.create_directory("/", 0),
            Err(FsError::InvalidPath(_))
        ));
    }

    #[test]
    fn test_overwrite_directory_with_file() {
        let mut fs = create_test_fs();
        fs.create_file("/home/user", "now a file", 0).unwrap();
        assert!(!fs.is_directory("/home/user"));
    }

    #[test]
    fn test_list_dir_keeps_insertion_order() {
        let mut fs = VirtualFs::empty();
        for name in ["zeta", "alpha", "mid"] {
            fs.create_directory(&format!("/{}", name), 0).unwrap();
        }
        let names: Vec<_> = fs
            .list_dir("/")
            .unwrap()
            .iter()
            .map(|n| n.name.as_str())
            .collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_list_dir_on_file() {
        let fs = create_test_fs();
        assert!(fs.list_dir("/home/user/hello.md").is_none());
    }

    #[test]
    fn test_dot_names_are_rejected() {
        let mut fs = create_test_fs();
        let before = fs.clone();
        for path in ["/home/..", "/home/."] {
            assert!(matches!(
                fs.create_directory(path, 0),
                Err(FsError::InvalidPath(_))
            ));
            assert!(matches!(
                fs.create_file(path, "", 0),
                Err(FsError::InvalidPath(_))
            ));
        }
        assert_eq!(fs, before);
    }

    #[test]
    fn test_default_manifest_loads() {
        let fs = VirtualFs::from_manifest_json(FILESYSTEM_MANIFEST).expect("manifest should load");
        assert!(fs.is_directory("/home/user/documents"));
        assert!(fs.lookup("/home/user/documents/readme.txt").is_some());
        assert_eq!(
            fs.lookup("/home/user/scripts/backup.sh").map(|n| n.permissions.as_str()),
            Some("-rwxr-xr-x")
        );
    }

    #[test]
    fn test_manifest_missing_parent_is_rejected() {
        let json = r#"{ "directories": [{ "path": "/a/b" }] }"#;
        assert!(matches!(
            VirtualFs::from_manifest_json(json),
            Err(FsError::ParentNotFound(_))
        ));
    }

    #[test]
    fn test_manifest_bad_json() {
        assert!(matches!(
            VirtualFs::from_manifest_json("{ nope"),
            Err(FsError::Manifest(_))
        ));
    }

    #[test]
    fn test_snapshot_restores_tree() {
        let fs = create_test_fs();
        let json = fs.snapshot().unwrap();
        assert_eq!(VirtualFs::from_snapshot(&json).unwrap(), fs);
    }

    #[test]
    fn test_snapshot_rejects_file_root() {
        let json = serde_json::to_string(&FsNode::file("", "x", 0)).unwrap();
        assert!(VirtualFs::from_snapshot(&json).is_err());
    }
}
