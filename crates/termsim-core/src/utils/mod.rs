//! Utility modules.
//!
//! Provides:
//! - [`console`] - browser console logging
//! - [`format`] - UTC date formatting for listings and `date`

pub mod console;
pub mod format;
