//! Error types for the engine.
//!
//! Command handlers never surface these directly; they are rendered into a
//! [`CommandResult`](crate::CommandResult) error message by the dispatcher.
//!
//! - [`FsError`] - filesystem store mutations and manifest loading
//! - [`CalcError`] - arithmetic evaluation for `calc`

use thiserror::Error;

/// Filesystem store errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FsError {
    /// Parent of the target path does not exist.
    #[error("cannot create '{0}': No such file or directory")]
    ParentNotFound(String),
    /// Parent of the target path is a file.
    #[error("cannot create '{0}': Not a directory")]
    ParentNotDirectory(String),
    /// Target path has no usable leaf name (the root, `.` or `..`).
    #[error("cannot create '{0}': Invalid path")]
    InvalidPath(String),
    /// Manifest or snapshot could not be decoded.
    #[error("invalid filesystem manifest: {0}")]
    Manifest(String),
}

impl FsError {
    /// Short Unix-style reason, as shown after a command's operand.
    pub fn reason(&self) -> String {
        match self {
            Self::ParentNotFound(_) => "No such file or directory".to_string(),
            Self::ParentNotDirectory(_) => "Not a directory".to_string(),
            Self::InvalidPath(_) => "Invalid argument".to_string(),
            Self::Manifest(msg) => msg.clone(),
        }
    }
}

impl From<serde_json::Error> for FsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Manifest(err.to_string())
    }
}

/// Arithmetic evaluation errors for `calc`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Input contains characters outside the allowed set.
    #[error("invalid characters in expression")]
    InvalidCharacters,
    /// Nothing to evaluate.
    #[error("empty expression")]
    Empty,
    /// Token that cannot appear at this position.
    #[error("unexpected '{0}'")]
    UnexpectedToken(String),
    /// Expression ended early.
    #[error("unexpected end of expression")]
    UnexpectedEnd,
    /// Number literal such as `1.2.3`.
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,
    /// Parentheses nested past the evaluator's limit.
    #[error("expression nested too deeply")]
    TooDeep,
    /// Result overflowed to infinity.
    #[error("result out of range")]
    Overflow,
}
