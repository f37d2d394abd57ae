//! Run state machine and final status

use super::Phase;

/// Where the orchestrator is in a run
///
/// `Init -> CreatingRoot -> RunningPhase(..)* -> Done`, or
/// `Init | CreatingRoot -> Aborted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Init,
    CreatingRoot,
    RunningPhase(Phase),
    Done,
    Aborted,
}

impl RunState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunState::Done | RunState::Aborted)
    }

    /// Whether moving to `next` is a legal transition
    pub fn can_transition_to(&self, next: RunState) -> bool {
        use RunState::*;
        match (self, next) {
            (Init, CreatingRoot) | (Init, Aborted) => true,
            (CreatingRoot, RunningPhase(_)) | (CreatingRoot, Aborted) => true,
            (RunningPhase(from), RunningPhase(to)) => phase_index(*from) < phase_index(to),
            (RunningPhase(_), Done) => true,
            _ => false,
        }
    }
}

fn phase_index(phase: Phase) -> usize {
    Phase::ALL
        .iter()
        .position(|p| *p == phase)
        .unwrap_or(usize::MAX)
}

impl std::fmt::Display for RunState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunState::Init => write!(f, "init"),
            RunState::CreatingRoot => write!(f, "creating_root"),
            RunState::RunningPhase(phase) => write!(f, "running_phase:{}", phase),
            RunState::Done => write!(f, "done"),
            RunState::Aborted => write!(f, "aborted"),
        }
    }
}

/// Final classification of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Every entry and command succeeded or already existed
    Completed,
    /// Reached `Done`, but some entries or commands failed
    CompletedWithErrors,
    /// Stopped before any phase ran
    Aborted,
}

impl RunStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RunStatus::Completed => "success",
            RunStatus::CompletedWithErrors => "partial",
            RunStatus::Aborted => "aborted",
        }
    }
}
