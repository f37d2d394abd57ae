//! mlscaffold - project skeleton generator for data/ML projects
//!
//! Creates a fixed directory layout (pipeline artifact directories,
//! config files, logs, one research notebook per pipeline stage) under
//! a new project root, then initializes version control and a
//! dependency environment inside it.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;

// Re-exports for convenience
pub use application::{RunSummary, ScaffoldOptions, ScaffoldPlan, ScaffoldUseCase};
pub use config::{load_config, ScaffoldConfig, Verbosity};
pub use domain::value_objects::{Phase, ProjectName, RunState, RunStatus};
pub use error::{ScaffoldError, ScaffoldResult};
pub use infrastructure::{JsonEventSink, LocalFs, ProcessRunner};
