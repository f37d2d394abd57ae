//! JSON Event Sink
//!
//! Outputs scaffold events as NDJSON for CI/automation consumption.

use crate::domain::entities::Outcome;
use crate::domain::ports::{CommandOutcome, ScaffoldEvent, ScaffoldEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl ScaffoldEventSink for JsonEventSink {
    fn on_event(&self, event: ScaffoldEvent) {
        let json = match event {
            ScaffoldEvent::RunStarted { project, root } => {
                serde_json::json!({
                    "event": "start",
                    "project": project,
                    "root": root.display().to_string(),
                })
            }

            ScaffoldEvent::StateChanged { state } => {
                serde_json::json!({
                    "event": "state",
                    "state": state.to_string(),
                })
            }

            ScaffoldEvent::PhaseStarted { phase, entry_count } => {
                serde_json::json!({
                    "event": "phase_start",
                    "phase": phase.name(),
                    "entry_count": entry_count,
                })
            }

            ScaffoldEvent::EntryApplied {
                phase,
                index,
                result,
            } => {
                let mut value = serde_json::json!({
                    "event": "entry",
                    "phase": phase.name(),
                    "index": index,
                    "path": result.entry.relative_path(),
                    "kind": result.entry.kind().to_string(),
                    "outcome": result.outcome.label(),
                });
                if let Outcome::Failed(reason) = &result.outcome {
                    value["error"] = serde_json::Value::String(reason.clone());
                }
                value
            }

            ScaffoldEvent::CommandFinished { phase, report } => {
                let mut value = serde_json::json!({
                    "event": "command",
                    "phase": phase.name(),
                    "name": report.name,
                    "command": report.command_line,
                    "outcome": report.outcome.label(),
                });
                if let CommandOutcome::Failed { code, stderr } = &report.outcome {
                    value["exit_code"] = serde_json::json!(code);
                    value["stderr"] = serde_json::Value::String(stderr.clone());
                }
                value
            }

            ScaffoldEvent::PhaseCompleted {
                phase,
                counts,
                command_failed,
            } => {
                serde_json::json!({
                    "event": "phase_complete",
                    "phase": phase.name(),
                    "created": counts.created,
                    "existing": counts.existing,
                    "failed": counts.failed,
                    "command_failed": command_failed,
                })
            }

            ScaffoldEvent::RunCompleted {
                status,
                counts,
                command_errors,
            } => {
                serde_json::json!({
                    "event": "complete",
                    "status": status.label(),
                    "created": counts.created,
                    "existing": counts.existing,
                    "failed": counts.failed,
                    "command_errors": command_errors,
                })
            }

            ScaffoldEvent::RunAborted { kind, reason } => {
                serde_json::json!({
                    "event": "error",
                    "kind": kind,
                    "message": reason,
                })
            }
        };

        self.write_event(json);
    }
}
