//! Data models for the engine.
//!
//! - [`FsNode`], [`NodeKind`], [`Manifest`], [`FileType`] - virtual filesystem representation
//! - [`OutputLine`] - scrollback lines

mod filesystem;
mod terminal;

pub use filesystem::{DirectoryEntry, FileEntry, FileType, FsNode, Manifest, NodeKind};
pub use terminal::{OutputLine, OutputLineData};
