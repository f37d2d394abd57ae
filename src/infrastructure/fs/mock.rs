//! In-memory file system for tests
//!
//! Uses `Arc<Mutex<>>` internally so it can be cloned and shared. Paths
//! registered with [`MockFileSystem::fail_on`] return `PermissionDenied`.

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockNode {
    Dir,
    File(String),
}

#[derive(Clone, Default)]
pub struct MockFileSystem {
    pub nodes: Arc<Mutex<BTreeMap<PathBuf, MockNode>>>,
    failing: Arc<Mutex<HashSet<PathBuf>>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `root` present as a directory
    pub fn with_dir(root: &Path) -> Self {
        let fs = Self::new();
        fs.nodes
            .lock()
            .unwrap()
            .insert(root.to_path_buf(), MockNode::Dir);
        fs
    }

    pub fn fail_on(&self, path: &Path) {
        self.failing.lock().unwrap().insert(path.to_path_buf());
    }

    pub fn clear_failures(&self) {
        self.failing.lock().unwrap().clear();
    }

    pub fn node(&self, path: &Path) -> Option<MockNode> {
        self.nodes.lock().unwrap().get(path).cloned()
    }

    pub fn insert_file(&self, path: &Path, content: &str) {
        self.nodes
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), MockNode::File(content.to_string()));
    }

    fn check_failure(&self, path: &Path) -> FsResult<()> {
        if self.failing.lock().unwrap().contains(path) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        Ok(())
    }

    fn parent_is_dir(&self, path: &Path) -> bool {
        match path.parent() {
            Some(parent) => self.is_dir(parent),
            None => true,
        }
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.nodes.lock().unwrap().contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        matches!(self.node(path), Some(MockNode::Dir))
    }

    fn create_dir(&self, path: &Path) -> FsResult<()> {
        self.check_failure(path)?;
        if self.exists(path) {
            return Err(FsError::AlreadyExists(path.to_path_buf()));
        }
        if !self.parent_is_dir(path) {
            return Err(FsError::NotFound(path.to_path_buf()));
        }
        self.nodes
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), MockNode::Dir);
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        self.check_failure(path)?;
        let mut missing = Vec::new();
        let mut current = Some(path);
        while let Some(p) = current {
            match self.node(p) {
                Some(MockNode::Dir) => break,
                Some(MockNode::File(_)) => return Err(FsError::NotADirectory(p.to_path_buf())),
                None => missing.push(p.to_path_buf()),
            }
            current = p.parent().filter(|parent| !parent.as_os_str().is_empty());
        }
        let mut nodes = self.nodes.lock().unwrap();
        for dir in missing.into_iter().rev() {
            nodes.insert(dir, MockNode::Dir);
        }
        Ok(())
    }

    fn remove_dir(&self, path: &Path) -> FsResult<()> {
        let mut nodes = self.nodes.lock().unwrap();
        match nodes.get(path) {
            None => return Err(FsError::NotFound(path.to_path_buf())),
            Some(MockNode::File(_)) => return Err(FsError::NotADirectory(path.to_path_buf())),
            Some(MockNode::Dir) => {}
        }
        if nodes.keys().any(|p| p != path && p.starts_with(path)) {
            return Err(FsError::Io(std::io::Error::other("directory not empty")));
        }
        nodes.remove(path);
        Ok(())
    }

    fn create_new(&self, path: &Path, content: &str) -> FsResult<()> {
        self.check_failure(path)?;
        if self.exists(path) {
            return Err(FsError::AlreadyExists(path.to_path_buf()));
        }
        if !self.parent_is_dir(path) {
            return Err(FsError::NotFound(path.to_path_buf()));
        }
        self.insert_file(path, content);
        Ok(())
    }
}
