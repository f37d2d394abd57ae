//! Filesystem applier
//!
//! Walks a manifest and creates each entry. Existing nodes are never
//! overwritten, and a failure on one entry does not stop the others.
//! Every path is resolved before anything is touched, so a manifest that
//! would escape the root creates nothing.

use std::path::PathBuf;

use crate::domain::entities::{ApplyResult, EntryKind, Manifest, Outcome, PathEntry};
use crate::domain::ports::{FileSystem, FsError};
use crate::domain::services::PathResolver;
use crate::error::ScaffoldResult;

/// Resolve every entry of `manifest` under the resolver's root
pub fn resolve_manifest(resolver: &PathResolver, manifest: &Manifest) -> ScaffoldResult<Vec<PathBuf>> {
    manifest
        .entries()
        .iter()
        .map(|entry| resolver.resolve(entry.relative_path()))
        .collect()
}

/// Apply `manifest`, returning one result per entry in manifest order
pub fn apply_manifest<F: FileSystem + ?Sized>(
    fs: &F,
    resolver: &PathResolver,
    manifest: &Manifest,
) -> ScaffoldResult<Vec<ApplyResult>> {
    let paths = resolve_manifest(resolver, manifest)?;
    Ok(manifest
        .entries()
        .iter()
        .zip(paths)
        .map(|(entry, path)| apply_entry(fs, entry, path))
        .collect())
}

/// Apply a single, already resolved entry
pub fn apply_entry<F: FileSystem + ?Sized>(fs: &F, entry: &PathEntry, path: PathBuf) -> ApplyResult {
    let outcome = match entry.kind() {
        EntryKind::Directory => apply_directory(fs, &path),
        EntryKind::File => apply_file(fs, &path, entry.content().unwrap_or_default()),
    };
    ApplyResult::new(entry.clone(), path, outcome)
}

fn apply_directory<F: FileSystem + ?Sized>(fs: &F, path: &std::path::Path) -> Outcome {
    if fs.exists(path) {
        return if fs.is_dir(path) {
            Outcome::AlreadyExists
        } else {
            Outcome::Failed(FsError::NotADirectory(path.to_path_buf()).to_string())
        };
    }

    match fs.create_dir_all(path) {
        Ok(()) => Outcome::Created,
        Err(FsError::AlreadyExists(_)) if fs.is_dir(path) => Outcome::AlreadyExists,
        Err(e) => Outcome::Failed(e.to_string()),
    }
}

fn apply_file<F: FileSystem + ?Sized>(fs: &F, path: &std::path::Path, content: &str) -> Outcome {
    if fs.exists(path) {
        return Outcome::AlreadyExists;
    }

    match fs.create_new(path, content) {
        Ok(()) => Outcome::Created,
        Err(FsError::AlreadyExists(_)) => Outcome::AlreadyExists,
        Err(e) => Outcome::Failed(e.to_string()),
    }
}
