//! PathEntry entity - one directory or file to create
//!
//! Paths are kept as relative templates here; the resolver validates and
//! anchors them under the project root.

/// Kind of filesystem node an entry produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntryKind {
    Directory,
    File,
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryKind::Directory => write!(f, "directory"),
            EntryKind::File => write!(f, "file"),
        }
    }
}

/// A single unit of scaffolding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEntry {
    /// Path relative to the project root (`/` or `\` separated)
    relative_path: String,
    kind: EntryKind,
    /// Literal seed content for files; `None` leaves the file empty
    content: Option<String>,
}

impl PathEntry {
    /// Create a directory entry
    pub fn directory(relative_path: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            kind: EntryKind::Directory,
            content: None,
        }
    }

    /// Create an empty file entry
    pub fn file(relative_path: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            kind: EntryKind::File,
            content: None,
        }
    }

    /// Create a file entry with literal content
    pub fn file_with(relative_path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            kind: EntryKind::File,
            content: Some(content.into()),
        }
    }

    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn is_directory(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}
