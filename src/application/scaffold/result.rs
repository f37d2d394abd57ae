//! Scaffold result types

use std::path::PathBuf;

use crate::domain::entities::{ApplyResult, Manifest, OutcomeCounts};
use crate::domain::ports::{CommandReport, SetupCommand};
use crate::domain::value_objects::{Phase, RunState, RunStatus};
use crate::error::ScaffoldError;

/// Outcome of one phase
#[derive(Debug, Clone)]
pub struct PhaseReport {
    pub phase: Phase,
    pub results: Vec<ApplyResult>,
    /// External command run by this phase, if any
    pub command: Option<CommandReport>,
}

impl PhaseReport {
    pub fn new(phase: Phase) -> Self {
        Self {
            phase,
            results: Vec::new(),
            command: None,
        }
    }

    pub fn counts(&self) -> OutcomeCounts {
        OutcomeCounts::tally(&self.results)
    }

    pub fn command_failed(&self) -> bool {
        self.command
            .as_ref()
            .is_some_and(|report| report.outcome.is_error())
    }

    pub fn has_errors(&self) -> bool {
        self.counts().failed > 0 || self.command_failed()
    }
}

/// Result of a whole run
#[derive(Debug)]
pub struct RunSummary {
    pub project: String,
    /// Project root, known once the name validated
    pub root: Option<PathBuf>,
    pub final_state: RunState,
    pub phases: Vec<PhaseReport>,
    /// Why the run aborted
    pub error: Option<ScaffoldError>,
}

impl RunSummary {
    pub(crate) fn new(project: &str) -> Self {
        Self {
            project: project.to_string(),
            root: None,
            final_state: RunState::Init,
            phases: Vec::new(),
            error: None,
        }
    }

    pub fn status(&self) -> RunStatus {
        if self.final_state == RunState::Aborted {
            RunStatus::Aborted
        } else if self.phases.iter().any(PhaseReport::has_errors) {
            RunStatus::CompletedWithErrors
        } else {
            RunStatus::Completed
        }
    }

    pub fn is_aborted(&self) -> bool {
        self.status() == RunStatus::Aborted
    }

    /// Totals across every phase
    pub fn counts(&self) -> OutcomeCounts {
        let mut counts = OutcomeCounts::default();
        for phase in &self.phases {
            counts.merge(phase.counts());
        }
        counts
    }

    pub fn command_errors(&self) -> usize {
        self.phases.iter().filter(|p| p.command_failed()).count()
    }

    /// Every entry that failed, with its phase
    pub fn failures(&self) -> impl Iterator<Item = (Phase, &ApplyResult)> {
        self.phases.iter().flat_map(|phase| {
            phase
                .results
                .iter()
                .filter(|r| r.outcome.is_failed())
                .map(move |r| (phase.phase, r))
        })
    }

    pub fn phase(&self, phase: Phase) -> Option<&PhaseReport> {
        self.phases.iter().find(|p| p.phase == phase)
    }

    /// 0 on Done (even with recorded failures), 1 on Aborted
    pub fn exit_code(&self) -> i32 {
        if self.is_aborted() {
            1
        } else {
            0
        }
    }
}

/// One phase of a dry-run plan
#[derive(Debug, Clone)]
pub struct PlannedPhase {
    pub manifest: Manifest,
    pub paths: Vec<PathBuf>,
    pub command: Option<SetupCommand>,
}

/// Everything a run would do, resolved but not applied
#[derive(Debug, Clone)]
pub struct ScaffoldPlan {
    pub project: String,
    pub root: PathBuf,
    pub phases: Vec<PlannedPhase>,
}

impl ScaffoldPlan {
    pub fn entry_count(&self) -> usize {
        self.phases.iter().map(|p| p.manifest.len()).sum()
    }
}
