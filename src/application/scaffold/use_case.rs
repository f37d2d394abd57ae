//! Scaffold Use Case
//!
//! Orchestrates a run:
//! 1. Validate the project name and resolve every manifest path
//! 2. Create the project root (fatal if it already exists)
//! 3. Run each phase in fixed order, applying its manifest and its
//!    external command
//! 4. Summarize
//!
//! Nothing touches the filesystem until step 2, so a bad name or a bad
//! manifest leaves no partial scaffolding behind.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::apply::{apply_entry, resolve_manifest};
use crate::domain::ports::{
    CommandOutcome, CommandReport, FileSystem, FsError, NoopEventSink, ScaffoldEvent,
    ScaffoldEventSink, SetupCommand, SetupCommandRunner,
};
use crate::domain::services::{ManifestBuilder, PathResolver};
use crate::domain::value_objects::{Phase, ProjectName, RunState};
use crate::error::{ScaffoldError, ScaffoldResult};

use super::options::ScaffoldOptions;
use super::result::{PhaseReport, PlannedPhase, RunSummary, ScaffoldPlan};

/// Scaffold use case - orchestrates the phases of a run
///
/// Parameterized by its ports so tests can substitute an in-memory
/// filesystem and a fake command runner.
pub struct ScaffoldUseCase<FS, R>
where
    FS: FileSystem,
    R: SetupCommandRunner,
{
    file_system: FS,
    runner: R,
}

impl<FS, R> ScaffoldUseCase<FS, R>
where
    FS: FileSystem,
    R: SetupCommandRunner,
{
    pub fn new(file_system: FS, runner: R) -> Self {
        Self {
            file_system,
            runner,
        }
    }

    /// Resolve everything a run would do without touching the filesystem
    ///
    /// Fails on an invalid name, an escaping manifest path, or an existing
    /// project root, the same preconditions `execute` enforces.
    pub fn plan(&self, project_name: &str, options: &ScaffoldOptions) -> ScaffoldResult<ScaffoldPlan> {
        let (resolver, phases) = self.prepare(project_name, options)?;
        if self.file_system.exists(resolver.root()) {
            return Err(ScaffoldError::RootAlreadyExists {
                path: resolver.root().to_path_buf(),
            });
        }
        Ok(ScaffoldPlan {
            project: project_name.to_string(),
            root: resolver.root().to_path_buf(),
            phases,
        })
    }

    /// Execute the run silently
    pub fn execute(&self, project_name: &str, options: &ScaffoldOptions) -> RunSummary {
        self.execute_with_events(project_name, options, Arc::new(NoopEventSink))
    }

    /// Execute the run, reporting progress to `events`
    pub fn execute_with_events(
        &self,
        project_name: &str,
        options: &ScaffoldOptions,
        events: Arc<dyn ScaffoldEventSink>,
    ) -> RunSummary {
        let mut summary = RunSummary::new(project_name);

        let (resolver, phases) = match self.prepare(project_name, options) {
            Ok(prepared) => prepared,
            Err(e) => return abort(summary, e, events.as_ref()),
        };
        summary.root = Some(resolver.root().to_path_buf());
        events.on_event(ScaffoldEvent::RunStarted {
            project: project_name.to_string(),
            root: resolver.root().to_path_buf(),
        });

        transition(&mut summary, RunState::CreatingRoot, events.as_ref());
        if let Err(e) = self.create_root(resolver.root()) {
            return abort(summary, e, events.as_ref());
        }

        for planned in phases {
            let phase = planned.manifest.phase();
            transition(&mut summary, RunState::RunningPhase(phase), events.as_ref());
            let report = self.run_phase(planned, resolver.root(), events.as_ref());
            summary.phases.push(report);
        }

        transition(&mut summary, RunState::Done, events.as_ref());
        events.on_event(ScaffoldEvent::RunCompleted {
            status: summary.status(),
            counts: summary.counts(),
            command_errors: summary.command_errors(),
        });
        summary
    }

    fn prepare(
        &self,
        project_name: &str,
        options: &ScaffoldOptions,
    ) -> ScaffoldResult<(PathResolver, Vec<PlannedPhase>)> {
        let name = ProjectName::parse(project_name)?;
        let resolver = PathResolver::new(&options.base_dir, &name);
        let builder = ManifestBuilder::new(name).with_env_dir(options.env_dir.as_str());

        let phases = builder
            .build_all()
            .into_iter()
            .map(|manifest| -> ScaffoldResult<PlannedPhase> {
                let paths = resolve_manifest(&resolver, &manifest)?;
                let command = command_for(manifest.phase(), options).cloned();
                Ok(PlannedPhase {
                    manifest,
                    paths,
                    command,
                })
            })
            .collect::<ScaffoldResult<Vec<_>>>()?;

        Ok((resolver, phases))
    }

    fn create_root(&self, root: &Path) -> ScaffoldResult<()> {
        let already_exists = || ScaffoldError::RootAlreadyExists {
            path: root.to_path_buf(),
        };
        if self.file_system.exists(root) {
            return Err(already_exists());
        }

        let creation_error = |e: FsError| ScaffoldError::EntryCreation {
            path: root.to_path_buf(),
            reason: e.to_string(),
        };
        let created = match root.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => self.create_ancestors(parent).map_err(creation_error)?,
            None => Vec::new(),
        };
        // create_dir, not create_dir_all: losing a race to another creator
        // must still be reported as an existing root
        match self.file_system.create_dir(root) {
            Ok(()) => Ok(()),
            Err(e) => {
                self.remove_created(&created);
                match e {
                    FsError::AlreadyExists(_) => Err(already_exists()),
                    e => Err(creation_error(e)),
                }
            }
        }
    }

    /// Create the missing directories leading to `dir`, outermost first.
    /// Returns the ones this call created; on failure those are removed.
    fn create_ancestors(&self, dir: &Path) -> Result<Vec<PathBuf>, FsError> {
        let mut missing = Vec::new();
        let mut current = Some(dir);
        while let Some(path) = current.filter(|p| !self.file_system.exists(p)) {
            missing.push(path.to_path_buf());
            current = path.parent().filter(|p| !p.as_os_str().is_empty());
        }
        if let Some(existing) = current.filter(|p| !self.file_system.is_dir(p)) {
            return Err(FsError::NotADirectory(existing.to_path_buf()));
        }

        let mut created = Vec::new();
        for path in missing.into_iter().rev() {
            match self.file_system.create_dir(&path) {
                Ok(()) => created.push(path),
                Err(FsError::AlreadyExists(_)) if self.file_system.is_dir(&path) => {}
                Err(e) => {
                    self.remove_created(&created);
                    return Err(e);
                }
            }
        }
        Ok(created)
    }

    /// Best effort: a directory someone else filled in the meantime stays
    fn remove_created(&self, created: &[PathBuf]) {
        for dir in created.iter().rev() {
            let _ = self.file_system.remove_dir(dir);
        }
    }

    fn run_phase(
        &self,
        planned: PlannedPhase,
        root: &Path,
        events: &dyn ScaffoldEventSink,
    ) -> PhaseReport {
        let phase = planned.manifest.phase();
        let mut report = PhaseReport::new(phase);
        events.on_event(ScaffoldEvent::PhaseStarted {
            phase,
            entry_count: planned.manifest.len(),
        });

        for (index, (entry, path)) in planned
            .manifest
            .entries()
            .iter()
            .zip(planned.paths)
            .enumerate()
        {
            let result = apply_entry(&self.file_system, entry, path);
            if events.wants_detailed_events() || result.outcome.is_failed() {
                events.on_event(ScaffoldEvent::EntryApplied {
                    phase,
                    index,
                    result: result.clone(),
                });
            }
            report.results.push(result);
        }

        if has_command(phase) {
            let command_report = match &planned.command {
                Some(command) => {
                    CommandReport::new(command, self.runner.run(command, root))
                }
                None => CommandReport {
                    name: phase.name().to_string(),
                    command_line: String::new(),
                    outcome: CommandOutcome::Skipped,
                },
            };
            events.on_event(ScaffoldEvent::CommandFinished {
                phase,
                report: command_report.clone(),
            });
            report.command = Some(command_report);
        }

        events.on_event(ScaffoldEvent::PhaseCompleted {
            phase,
            counts: report.counts(),
            command_failed: report.command_failed(),
        });
        report
    }
}

fn has_command(phase: Phase) -> bool {
    matches!(phase, Phase::Vcs | Phase::Environment)
}

fn command_for(phase: Phase, options: &ScaffoldOptions) -> Option<&SetupCommand> {
    match phase {
        Phase::Vcs => options.vcs_command.as_ref(),
        Phase::Environment => options.env_command.as_ref(),
        _ => None,
    }
}

fn transition(summary: &mut RunSummary, next: RunState, events: &dyn ScaffoldEventSink) {
    debug_assert!(
        summary.final_state.can_transition_to(next),
        "illegal transition {} -> {}",
        summary.final_state,
        next
    );
    summary.final_state = next;
    events.on_event(ScaffoldEvent::StateChanged { state: next });
}

fn abort(mut summary: RunSummary, error: ScaffoldError, events: &dyn ScaffoldEventSink) -> RunSummary {
    transition(&mut summary, RunState::Aborted, events);
    events.on_event(ScaffoldEvent::RunAborted {
        kind: error.kind(),
        reason: error.to_string(),
    });
    summary.error = Some(error);
    summary
}
