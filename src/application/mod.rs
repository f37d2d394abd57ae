//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ScaffoldUseCase` - root creation plus the phase sequence
//! - `apply_manifest` - create one manifest's entries

pub mod apply;
pub mod scaffold;

pub use apply::{apply_entry, apply_manifest, resolve_manifest};
pub use scaffold::{
    default_env_command, default_vcs_command, PhaseReport, PlannedPhase, RunSummary,
    ScaffoldOptions, ScaffoldPlan, ScaffoldUseCase,
};
