//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod path;
mod phase;
mod project_name;
mod run_state;

pub use path::{PathError, SafePath};
pub use phase::Phase;
pub use project_name::ProjectName;
pub use run_state::{RunState, RunStatus};
