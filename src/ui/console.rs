//! Console Event Sink
//!
//! Human-readable progress for interactive runs. Failures always reach
//! stderr, whatever the verbosity.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::config::Verbosity;
use crate::domain::entities::Outcome;
use crate::domain::ports::{CommandOutcome, ScaffoldEvent, ScaffoldEventSink};
use crate::domain::value_objects::RunStatus;
use crate::ui::icon::Icon;
use crate::ui::terminal::TerminalCapabilities;

pub struct ConsoleEventSink {
    verbosity: Verbosity,
    caps: TerminalCapabilities,
    out: Mutex<Box<dyn Write + Send>>,
    err: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn new(verbosity: Verbosity, caps: TerminalCapabilities) -> Self {
        Self::with_writers(verbosity, caps, io::stdout(), io::stderr())
    }

    pub fn with_writers<O, E>(verbosity: Verbosity, caps: TerminalCapabilities, out: O, err: E) -> Self
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        Self {
            verbosity,
            caps,
            out: Mutex::new(Box::new(out)),
            err: Mutex::new(Box::new(err)),
        }
    }

    fn icon(&self, icon: Icon) -> String {
        icon.colored(self.caps.supports_color, self.caps.supports_unicode)
    }

    fn say(&self, min: Verbosity, line: String) {
        if self.verbosity < min {
            return;
        }
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "{}", line);
        }
    }

    fn complain(&self, line: String) {
        if let Ok(mut err) = self.err.lock() {
            let _ = writeln!(err, "{}", line);
        }
    }
}

impl ScaffoldEventSink for ConsoleEventSink {
    fn on_event(&self, event: ScaffoldEvent) {
        match event {
            ScaffoldEvent::RunStarted { project, root } => self.say(
                Verbosity::Normal,
                format!(
                    "{} Creating '{}' in {}",
                    self.icon(Icon::Project),
                    project,
                    root.display()
                ),
            ),

            ScaffoldEvent::StateChanged { state } => {
                self.say(Verbosity::Debug, format!("  state: {}", state))
            }

            ScaffoldEvent::PhaseStarted { phase, entry_count } => self.say(
                Verbosity::Verbose,
                format!(
                    "{} {} ({} entries)",
                    self.icon(Icon::Progress),
                    phase,
                    entry_count
                ),
            ),

            ScaffoldEvent::EntryApplied { result, .. } => {
                let path = result.entry.relative_path();
                match &result.outcome {
                    Outcome::Created => self.say(
                        Verbosity::Verbose,
                        format!("  {} {}", self.icon(Icon::Success), path),
                    ),
                    Outcome::AlreadyExists => self.say(
                        Verbosity::Verbose,
                        format!("  {} {} (already exists)", self.icon(Icon::Existing), path),
                    ),
                    Outcome::Failed(reason) => self.complain(format!(
                        "  {} {}: {}",
                        self.icon(Icon::Error),
                        path,
                        reason
                    )),
                }
            }

            ScaffoldEvent::CommandFinished { report, .. } => match &report.outcome {
                CommandOutcome::Succeeded => self.say(
                    Verbosity::Normal,
                    format!(
                        "  {} {}: {}",
                        self.icon(Icon::Success),
                        report.name,
                        report.command_line
                    ),
                ),
                CommandOutcome::Skipped => self.say(
                    Verbosity::Verbose,
                    format!("  {} {}: skipped", self.icon(Icon::Skipped), report.name),
                ),
                outcome => self.complain(format!(
                    "  {} {}: {} {}",
                    self.icon(Icon::Warning),
                    report.name,
                    report.command_line,
                    outcome
                )),
            },

            ScaffoldEvent::PhaseCompleted {
                phase,
                counts,
                command_failed,
            } => self.say(
                Verbosity::Debug,
                format!(
                    "  {} done: {} created, {} existing, {} failed{}",
                    phase,
                    counts.created,
                    counts.existing,
                    counts.failed,
                    if command_failed { ", command failed" } else { "" }
                ),
            ),

            ScaffoldEvent::RunCompleted {
                status,
                counts,
                command_errors,
            } => {
                let icon = match status {
                    RunStatus::Completed => Icon::Success,
                    _ => Icon::Warning,
                };
                let mut line = format!(
                    "{} {}: {} created, {} already existed",
                    self.icon(icon),
                    status_title(status),
                    counts.created,
                    counts.existing
                );
                if counts.failed > 0 {
                    line.push_str(&format!(", {} failed", counts.failed));
                }
                if command_errors > 0 {
                    line.push_str(&format!(", {} setup command(s) failed", command_errors));
                }
                if status == RunStatus::Completed {
                    self.say(Verbosity::Normal, line);
                } else {
                    self.complain(line);
                }
            }

            ScaffoldEvent::RunAborted { reason, .. } => {
                self.complain(format!("{} Error: {}", self.icon(Icon::Error), reason))
            }
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.verbosity >= Verbosity::Verbose
    }
}

fn status_title(status: RunStatus) -> &'static str {
    match status {
        RunStatus::Completed => "Done",
        RunStatus::CompletedWithErrors => "Done with errors",
        RunStatus::Aborted => "Aborted",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ApplyResult, OutcomeCounts, PathEntry};
    use crate::domain::ports::CommandReport;
    use crate::domain::value_objects::Phase;
    use std::path::PathBuf;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Buffer {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn sink(verbosity: Verbosity) -> (ConsoleEventSink, Buffer, Buffer) {
        let out = Buffer::default();
        let err = Buffer::default();
        let sink = ConsoleEventSink::with_writers(
            verbosity,
            TerminalCapabilities::plain(),
            out.clone(),
            err.clone(),
        );
        (sink, out, err)
    }

    fn entry(outcome: Outcome) -> ScaffoldEvent {
        ScaffoldEvent::EntryApplied {
            phase: Phase::ConfigFiles,
            index: 0,
            result: ApplyResult::new(PathEntry::file("app.py"), PathBuf::from("/w/d/app.py"), outcome),
        }
    }

    #[test]
    fn failures_reach_stderr_even_when_quiet() {
        let (sink, out, err) = sink(Verbosity::Quiet);

        sink.on_event(entry(Outcome::Failed("permission denied".into())));

        assert!(out.text().is_empty());
        assert_eq!(err.text(), "  [FAIL] app.py: permission denied\n");
    }

    #[test]
    fn created_entries_only_shown_when_verbose() {
        let (normal, out, _) = sink(Verbosity::Normal);
        normal.on_event(entry(Outcome::Created));
        assert!(out.text().is_empty());
        assert!(!normal.wants_detailed_events());

        let (verbose, out, _) = sink(Verbosity::Verbose);
        verbose.on_event(entry(Outcome::Created));
        assert_eq!(out.text(), "  [OK] app.py\n");
        assert!(verbose.wants_detailed_events());
    }

    #[test]
    fn missing_command_is_a_warning_on_stderr() {
        let (sink, _, err) = sink(Verbosity::Normal);

        sink.on_event(ScaffoldEvent::CommandFinished {
            phase: Phase::Environment,
            report: CommandReport {
                name: "environment".into(),
                command_line: "python3 -m venv venv".into(),
                outcome: CommandOutcome::NotFound,
            },
        });

        let text = err.text();
        assert!(text.starts_with("  [WARN] environment: python3 -m venv venv"));
    }

    #[test]
    fn summary_line_on_success() {
        let (sink, out, err) = sink(Verbosity::Normal);

        sink.on_event(ScaffoldEvent::RunCompleted {
            status: RunStatus::Completed,
            counts: OutcomeCounts {
                created: 27,
                existing: 0,
                failed: 0,
            },
            command_errors: 0,
        });

        assert_eq!(out.text(), "[OK] Done: 27 created, 0 already existed\n");
        assert!(err.text().is_empty());
    }

    #[test]
    fn partial_summary_goes_to_stderr() {
        let (sink, out, err) = sink(Verbosity::Quiet);

        sink.on_event(ScaffoldEvent::RunCompleted {
            status: RunStatus::CompletedWithErrors,
            counts: OutcomeCounts {
                created: 26,
                existing: 0,
                failed: 1,
            },
            command_errors: 1,
        });

        assert!(out.text().is_empty());
        assert_eq!(
            err.text(),
            "[WARN] Done with errors: 26 created, 0 already existed, 1 failed, 1 setup command(s) failed\n"
        );
    }

    #[test]
    fn abort_reason_is_printed() {
        let (sink, _, err) = sink(Verbosity::Quiet);

        sink.on_event(ScaffoldEvent::RunAborted {
            kind: "root_already_exists",
            reason: "directory '/w/demo' already exists".into(),
        });

        assert_eq!(err.text(), "[FAIL] Error: directory '/w/demo' already exists\n");
    }
}
