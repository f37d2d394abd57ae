//! Scaffold use case module
//!
//! Creates the project root and runs every phase in order.

mod options;
mod result;
mod use_case;

pub use options::{default_env_command, default_vcs_command, ScaffoldOptions};
pub use result::{PhaseReport, PlannedPhase, RunSummary, ScaffoldPlan};
pub use use_case::ScaffoldUseCase;
