//! FileSystem port - abstraction over the filesystem primitives the
//! applier needs
//!
//! Lets the application layer create scaffolding without depending on a
//! concrete implementation (local disk, in-memory mock).

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// Parent directory missing
    NotFound(PathBuf),
    /// Target is already present
    AlreadyExists(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// Path exists but is not a directory
    NotADirectory(PathBuf),
    /// I/O error
    Io(std::io::Error),
}

impl FsError {
    /// Classify an I/O error, keeping the path it happened on
    pub fn from_io(err: std::io::Error, path: &Path) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::AlreadyExists => FsError::AlreadyExists(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io(err),
        }
    }
}

impl From<std::io::Error> for FsError {
    fn from(err: std::io::Error) -> Self {
        FsError::from_io(err, Path::new(""))
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => {
                write!(f, "parent directory not found: {}", path.display())
            }
            FsError::AlreadyExists(path) => write!(f, "already exists: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "permission denied: {}", path.display())
            }
            FsError::NotADirectory(path) => {
                write!(f, "exists but is not a directory: {}", path.display())
            }
            FsError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for FsError {}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - `MockFileSystem` - in-memory for testing
pub trait FileSystem {
    /// Check if anything (file, directory, link) is at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Check if `path` is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Create a single directory; the parent must exist
    fn create_dir(&self, path: &Path) -> FsResult<()>;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Remove an empty directory
    fn remove_dir(&self, path: &Path) -> FsResult<()>;

    /// Create a new file with `content`, failing with `AlreadyExists`
    /// rather than overwriting
    fn create_new(&self, path: &Path, content: &str) -> FsResult<()>;
}
