//! Domain Entities
//!
//! - `PathEntry` - one directory or file to create
//! - `Manifest` - ordered entries for a phase
//! - `ApplyResult` - per-entry outcome

mod apply_result;
mod manifest;
mod path_entry;

pub use apply_result::{ApplyResult, Outcome, OutcomeCounts};
pub use manifest::Manifest;
pub use path_entry::{EntryKind, PathEntry};
