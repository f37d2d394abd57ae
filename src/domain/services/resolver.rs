//! Path resolution service
//!
//! Turns a project name plus relative path templates into concrete paths
//! under the project root. Every operation takes the root explicitly; the
//! process working directory is never consulted.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::{ProjectName, SafePath};
use crate::error::{ScaffoldError, ScaffoldResult};

/// Anchors relative templates under `<base_dir>/<project_name>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResolver {
    root: PathBuf,
}

impl PathResolver {
    pub fn new(base_dir: &Path, name: &ProjectName) -> Self {
        Self {
            root: base_dir.join(name.as_str()),
        }
    }

    /// The project root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Validate `relative` and return its location under the root
    pub fn resolve(&self, relative: &str) -> ScaffoldResult<PathBuf> {
        let safe = SafePath::new(relative).map_err(|e| ScaffoldError::InvalidPath {
            path: relative.to_string(),
            reason: e.to_string(),
        })?;
        Ok(safe.under(&self.root))
    }
}

/// One-shot resolution from raw inputs
///
/// Fails with `InvalidName` for a bad project name and `InvalidPath` for a
/// template that would leave the root.
pub fn resolve(base_dir: &Path, project_name: &str, relative: &str) -> ScaffoldResult<PathBuf> {
    let name = ProjectName::parse(project_name)?;
    PathResolver::new(base_dir, &name).resolve(relative)
}
