//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations. New files are
//! staged in a temp file beside the target and linked into place without
//! clobbering, so a failed write never leaves a partial file behind.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        // symlink_metadata so a dangling link still counts as occupied
        path.symlink_metadata().is_ok()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir(&self, path: &Path) -> FsResult<()> {
        std::fs::create_dir(path).map_err(|e| FsError::from_io(e, path))
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        std::fs::create_dir_all(path).map_err(|e| FsError::from_io(e, path))?;
        if !path.is_dir() {
            return Err(FsError::NotADirectory(path.to_path_buf()));
        }
        Ok(())
    }

    fn remove_dir(&self, path: &Path) -> FsResult<()> {
        std::fs::remove_dir(path).map_err(|e| FsError::from_io(e, path))
    }

    fn create_new(&self, path: &Path, content: &str) -> FsResult<()> {
        write_new_with(path, |file| file.write_all(content.as_bytes()))
    }
}

/// Fill a staging file with `write`, then persist it at `path` unless
/// something is already there. The staging file is dropped (and deleted)
/// on every error path.
fn write_new_with<W>(path: &Path, write: W) -> FsResult<()>
where
    W: FnOnce(&mut File) -> io::Result<()>,
{
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let mut staged = staging_file(parent).map_err(|e| FsError::from_io(e, path))?;
    write(staged.as_file_mut()).map_err(|e| FsError::from_io(e, path))?;
    staged
        .persist_noclobber(path)
        .map_err(|e| FsError::from_io(e.error, path))?;
    Ok(())
}

fn staging_file(dir: &Path) -> io::Result<NamedTempFile> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(".mlscaffold-");
    // NamedTempFile defaults to 0600; scaffolded files get the usual
    // umask-governed mode instead
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}
