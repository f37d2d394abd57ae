//! Safe Path Value Object
//!
//! A validated relative path that is guaranteed to stay inside the
//! directory it is joined onto:
//! - No traversal components (`..`)
//! - No absolute or drive-prefixed paths
//! - Separators normalized (`/` and `\` are both accepted)

use std::fmt;
use std::path::{Path, PathBuf};

/// Error when path validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Path contains traversal components (..)
    ContainsTraversal,
    /// Path is absolute when relative is required
    AbsoluteNotAllowed,
    /// Path is empty (or only `.` segments)
    Empty,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::ContainsTraversal => {
                write!(f, "path contains traversal components (..)")
            }
            PathError::AbsoluteNotAllowed => {
                write!(f, "absolute paths are not allowed")
            }
            PathError::Empty => {
                write!(f, "path is empty")
            }
        }
    }
}

impl std::error::Error for PathError {}

/// A validated safe relative path
///
/// Stored as its normalized segments so the host separator is applied only
/// when the path is materialized under a root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SafePath {
    segments: Vec<String>,
}

impl SafePath {
    /// Parse a relative path template such as `artifacts/model_training`
    pub fn new(template: &str) -> Result<Self, PathError> {
        if template.starts_with('/') || template.starts_with('\\') || has_drive_prefix(template) {
            return Err(PathError::AbsoluteNotAllowed);
        }

        let mut segments = Vec::new();
        for segment in template.split(['/', '\\']) {
            match segment {
                "" | "." => continue,
                ".." => return Err(PathError::ContainsTraversal),
                s => segments.push(s.to_string()),
            }
        }

        if segments.is_empty() {
            return Err(PathError::Empty);
        }

        Ok(Self { segments })
    }

    /// Normalized segments
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Parent path, `None` for a top-level entry
    pub fn parent(&self) -> Option<SafePath> {
        if self.segments.len() < 2 {
            return None;
        }
        Some(Self {
            segments: self.segments[..self.segments.len() - 1].to_vec(),
        })
    }

    /// True if `self` is `other` or nested below it
    pub fn starts_with(&self, other: &SafePath) -> bool {
        self.segments.starts_with(&other.segments)
    }

    /// Materialize under `root` using the host separator
    pub fn under(&self, root: &Path) -> PathBuf {
        let mut path = root.to_path_buf();
        for segment in &self.segments {
            path.push(segment);
        }
        path
    }
}

fn has_drive_prefix(template: &str) -> bool {
    let bytes = template.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

impl fmt::Display for SafePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

impl TryFrom<&str> for SafePath {
    type Error = PathError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
