//! Shell configuration.
//!
//! Centralizes the constants used throughout the engine.
//! Text assets are loaded at compile time using `include_str!`.

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Help text for the `help` command.
pub const HELP_TEXT: &str = include_str!("../assets/help.txt");

/// Initial filesystem manifest.
pub const FILESYSTEM_MANIFEST: &str = include_str!("../assets/filesystem.json");

// =============================================================================
// Identity
// =============================================================================

/// Host name shown in the prompt and `uname -a`.
pub const HOSTNAME: &str = "termsim";

/// The only user of the simulated system.
pub const USERNAME: &str = "user";

/// Default group for created nodes.
pub const GROUP: &str = "user";

/// Home directory, the default target of `cd`.
pub const HOME_DIR: &str = "/home/user";

/// Kernel name printed by `uname`.
pub const UNAME_SHORT: &str = "Linux";

/// Banner printed by `uname -a`.
pub const UNAME_FULL: &str =
    "Linux termsim 6.1.0-wasm #1 SMP PREEMPT_DYNAMIC wasm32 GNU/Linux";

// =============================================================================
// Filesystem Configuration
// =============================================================================

/// Reported size of every directory node.
pub const DIR_BLOCK_SIZE: u64 = 4096;

/// Display permissions for newly created files.
pub const FILE_PERMISSIONS: &str = "-rw-r--r--";

/// Display permissions for newly created directories.
pub const DIR_PERMISSIONS: &str = "drwxr-xr-x";

// =============================================================================
// Terminal Configuration
// =============================================================================

/// Maximum number of scrollback lines kept by a session.
pub const MAX_TERMINAL_HISTORY: usize = 1000;

/// Maximum number of command history entries to keep.
pub const MAX_COMMAND_HISTORY: usize = 100;

/// Text filter defaults.
pub mod text_filters {
    /// Default number of lines for `head`.
    pub const DEFAULT_HEAD_LINES: usize = 10;
    /// Default number of lines for `tail`.
    pub const DEFAULT_TAIL_LINES: usize = 10;
    /// Column width used by `wc`.
    pub const WC_FIELD_WIDTH: usize = 7;
}

/// Palette names accepted by `color`.
pub const COLOR_THEMES: &[&str] = &["green", "amber", "blue", "white", "matrix"];

/// Exit codes shared by every command.
pub mod exit {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
    pub const NOT_FOUND: i32 = 2;
    pub const UNKNOWN_COMMAND: i32 = 127;
}
