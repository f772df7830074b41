//! Error types for rsetup.
//!
//! Uses thiserror for derive macros. Every failure of a store operation is
//! returned as a value; the CLI maps each variant to an exit code.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for rsetup operations.
#[derive(Error, Debug)]
pub enum RsetupError {
    /// A preset was created with a blank name.
    #[error("Name cannot be empty.")]
    EmptyName,

    /// A preset with this name already exists.
    #[error("Setup name already exists: {0}")]
    DuplicateName(String),

    /// No preset with this name exists.
    #[error("Name not found: {0}")]
    NameNotFound(String),

    /// A document file exists but is not a JSON object of presets.
    #[error("corrupt preset document '{}': {reason}", path.display())]
    CorruptDocument { path: PathBuf, reason: String },

    /// A dotted attribute path does not resolve on the settings tree.
    #[error("cannot resolve path '{path}' on {root}")]
    PathResolution { path: String, root: String },

    /// Underlying file read or write failed.
    #[error("{action} '{}': {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is unreadable or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The caller supplied an argument the store cannot use.
    #[error("{0}")]
    InvalidArgument(String),
}

impl RsetupError {
    /// Build an [`RsetupError::Io`] for a failed file operation.
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RsetupError::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            RsetupError::EmptyName
            | RsetupError::DuplicateName(_)
            | RsetupError::NameNotFound(_)
            | RsetupError::InvalidArgument(_) => exit_codes::USER_ERROR,
            RsetupError::CorruptDocument { .. } | RsetupError::Io { .. } => {
                exit_codes::DOCUMENT_FAILURE
            }
            RsetupError::PathResolution { .. } => exit_codes::PATH_FAILURE,
            RsetupError::Config(_) => exit_codes::CONFIG_FAILURE,
        }
    }
}

/// Result type alias for rsetup operations.
pub type Result<T> = std::result::Result<T, RsetupError>;
