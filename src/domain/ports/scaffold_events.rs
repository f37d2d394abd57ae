//! Scaffold Event Port
//!
//! Provides an observable interface for scaffolding runs.
//! Enables progress reporting, JSON event streams, and debugging.

use std::path::PathBuf;

use crate::domain::entities::{ApplyResult, OutcomeCounts};
use crate::domain::value_objects::{Phase, RunState, RunStatus};

use super::CommandReport;

/// Event emitted during a scaffolding run
#[derive(Debug, Clone)]
pub enum ScaffoldEvent {
    /// Run started
    RunStarted { project: String, root: PathBuf },

    /// Orchestrator moved to a new state
    StateChanged { state: RunState },

    /// Phase started
    PhaseStarted { phase: Phase, entry_count: usize },

    /// One entry was applied
    EntryApplied {
        phase: Phase,
        index: usize,
        result: ApplyResult,
    },

    /// External setup command finished
    CommandFinished { phase: Phase, report: CommandReport },

    /// Phase finished
    PhaseCompleted {
        phase: Phase,
        counts: OutcomeCounts,
        command_failed: bool,
    },

    /// Run reached `Done`
    RunCompleted {
        status: RunStatus,
        counts: OutcomeCounts,
        command_errors: usize,
    },

    /// Run stopped before any phase ran
    RunAborted { kind: &'static str, reason: String },
}

/// Trait for receiving scaffold events
///
/// Implementations can be:
/// - ConsoleEventSink: progress display in terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: silent operation
pub trait ScaffoldEventSink: Send + Sync {
    /// Handle a scaffold event
    fn on_event(&self, event: ScaffoldEvent);

    /// Check if this sink wants per-entry events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl ScaffoldEventSink for NoopEventSink {
    fn on_event(&self, _event: ScaffoldEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
