//! ApplyResult entity - the observed outcome of one entry

use std::path::PathBuf;

use super::PathEntry;

/// What happened when an entry was applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Newly created by this run
    Created,
    /// Present before this run and left untouched
    AlreadyExists,
    /// Could not be created; the run continued
    Failed(String),
}

impl Outcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Created => "created",
            Outcome::AlreadyExists => "already_exists",
            Outcome::Failed(_) => "failed",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Created => write!(f, "created"),
            Outcome::AlreadyExists => write!(f, "already exists"),
            Outcome::Failed(reason) => write!(f, "failed: {}", reason),
        }
    }
}

/// Outcome of applying a single [`PathEntry`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyResult {
    pub entry: PathEntry,
    /// Resolved location on disk, or the raw template if resolution failed
    pub path: PathBuf,
    pub outcome: Outcome,
}

impl ApplyResult {
    pub fn new(entry: PathEntry, path: PathBuf, outcome: Outcome) -> Self {
        Self {
            entry,
            path,
            outcome,
        }
    }
}

/// Tally of outcomes across a set of results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutcomeCounts {
    pub created: usize,
    pub existing: usize,
    pub failed: usize,
}

impl OutcomeCounts {
    pub fn tally<'a>(results: impl IntoIterator<Item = &'a ApplyResult>) -> Self {
        let mut counts = Self::default();
        for result in results {
            counts.add(&result.outcome);
        }
        counts
    }

    pub fn add(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Created => self.created += 1,
            Outcome::AlreadyExists => self.existing += 1,
            Outcome::Failed(_) => self.failed += 1,
        }
    }

    pub fn merge(&mut self, other: OutcomeCounts) {
        self.created += other.created;
        self.existing += other.existing;
        self.failed += other.failed;
    }
}
