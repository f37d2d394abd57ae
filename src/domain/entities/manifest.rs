//! Manifest entity - ordered entries for one phase
//!
//! Construction moves directory entries ahead of file entries (stable, so
//! declared order is otherwise preserved). A file is therefore never
//! attempted before a directory it is nested under.

use crate::domain::value_objects::{Phase, SafePath};

use super::PathEntry;

/// Ordered list of entries to create for one phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    phase: Phase,
    entries: Vec<PathEntry>,
}

impl Manifest {
    pub fn new(phase: Phase, mut entries: Vec<PathEntry>) -> Self {
        entries.sort_by_key(PathEntry::kind);
        Self { phase, entries }
    }

    /// A phase with nothing to create (command-only phases)
    pub fn empty(phase: Phase) -> Self {
        Self {
            phase,
            entries: Vec::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn entries(&self) -> &[PathEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when every file entry comes after all directory entries that
    /// are ancestors of it
    pub fn is_parent_ordered(&self) -> bool {
        let paths: Vec<Option<SafePath>> = self
            .entries
            .iter()
            .map(|e| SafePath::new(e.relative_path()).ok())
            .collect();

        self.entries.iter().enumerate().all(|(i, entry)| {
            let parent = match &paths[i] {
                Some(path) if !entry.is_directory() => path.parent(),
                _ => None,
            };
            let Some(parent) = parent else {
                return true;
            };
            self.entries[i + 1..]
                .iter()
                .zip(&paths[i + 1..])
                .all(|(later, later_path)| match later_path {
                    Some(dir) if later.is_directory() => !parent.starts_with(dir),
                    _ => true,
                })
        })
    }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = &'a PathEntry;
    type IntoIter = std::slice::Iter<'a, PathEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
