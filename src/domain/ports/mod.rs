//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod scaffold_events;
pub mod setup_command;

pub use file_system::{FileSystem, FsError, FsResult};
pub use scaffold_events::{NoopEventSink, ScaffoldEvent, ScaffoldEventSink};
pub use setup_command::{CommandOutcome, CommandReport, SetupCommand, SetupCommandRunner};
