//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations
//! - `process` - External setup commands
//! - `events/` - Event sinks

pub mod events;
pub mod fs;
pub mod process;

pub use events::JsonEventSink;
pub use fs::LocalFs;
pub use process::ProcessRunner;
