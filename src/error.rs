//! Error types for mlscaffold
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for scaffolding operations
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

/// Main error type for scaffolding operations
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// Project name violates the character-set invariant
    #[error("invalid project name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// A manifest path would escape the project root
    #[error("invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    /// The project root is already present on disk
    #[error("directory '{}' already exists - choose a different name or remove it", path.display())]
    RootAlreadyExists { path: PathBuf },

    /// A single entry could not be created
    #[error("failed to create {}: {reason}", path.display())]
    EntryCreation { path: PathBuf, reason: String },

    /// Configuration file could not be parsed or is invalid
    #[error("invalid configuration in {}: {message}", file.display())]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScaffoldError {
    /// Short machine-readable identifier, used in JSON output
    pub fn kind(&self) -> &'static str {
        match self {
            ScaffoldError::InvalidName { .. } => "invalid_name",
            ScaffoldError::InvalidPath { .. } => "invalid_path",
            ScaffoldError::RootAlreadyExists { .. } => "root_already_exists",
            ScaffoldError::EntryCreation { .. } => "entry_creation",
            ScaffoldError::Config { .. } => "config",
            ScaffoldError::Io(_) => "io",
        }
    }
}
