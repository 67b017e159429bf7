//! Core engine for the simulated browser shell.
//!
//! This crate provides:
//! - [`resolve`] path resolution against a current directory
//! - [`VirtualFs`] in-memory filesystem store
//! - [`execute`] command dispatch with [`CommandResult`] outcomes
//! - [`parse_line`], [`suggest_commands`] and [`autocomplete`] for input handling
//! - [`Session`] holding scrollback, history and the current directory
//!
//! Nothing here touches the DOM. Randomness and the wall clock are reached
//! only through a [`Host`], so every command is reproducible under test.

mod autocomplete;
mod commands;
pub mod config;
pub mod error;
mod filesystem;
pub mod host;
pub mod models;
mod parser;
pub mod path;
mod session;
pub mod utils;

pub use autocomplete::{AutocompleteResult, autocomplete, suggest_commands};
pub use commands::{Command, CommandResult, Output, execute};
pub use error::{CalcError, FsError};
pub use filesystem::VirtualFs;
pub use host::{Host, SystemHost};
pub use parser::{ParsedCommand, parse_line};
pub use path::resolve;
pub use session::Session;
