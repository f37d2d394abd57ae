//! New command - create a project skeleton
//!
//! Resolves configuration (file, environment, flags), then either prints
//! the plan (`--dry-run`) or runs the scaffold use case with a console or
//! JSON event sink.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};

use mlscaffold::application::{ScaffoldPlan, ScaffoldUseCase};
use mlscaffold::config::{load_config, LoadedConfig, ScaffoldConfig, Verbosity};
use mlscaffold::domain::ports::{ScaffoldEvent, ScaffoldEventSink};
use mlscaffold::error::ScaffoldError;
use mlscaffold::infrastructure::{JsonEventSink, LocalFs, ProcessRunner};
use mlscaffold::ui::{
    detect_capabilities, render_config_source, render_config_warning, render_plan,
    ConsoleEventSink, TerminalCapabilities,
};

use crate::cli::Cli;

/// Run the command, returning the process exit code
pub fn cmd_new(cli: &Cli) -> Result<i32> {
    let cwd = std::env::current_dir().context("cannot determine the current directory")?;
    let base_dir = base_dir(&cwd, cli.dir.as_deref());

    let loaded = match load_config(cli.config.as_deref(), |key| std::env::var(key).ok()) {
        Ok(loaded) => loaded,
        Err(e) => {
            let sink = make_sink(cli, &ScaffoldConfig::default());
            report_error(sink.as_ref(), &e);
            return Ok(1);
        }
    };
    let LoadedConfig {
        mut config,
        warnings,
        source,
    } = loaded;

    if cli.no_vcs {
        config.vcs.enabled = false;
    }
    if cli.no_env {
        config.environment.enabled = false;
    }
    config.output.verbosity = config.output.verbosity.bumped(cli.verbose);

    let caps = capabilities(cli, &config);
    if !cli.json && config.output.verbosity >= Verbosity::Debug {
        eprintln!("{}", render_config_source(source.as_deref()));
    }
    for warning in &warnings {
        eprintln!("{}", render_config_warning(warning, caps));
    }

    let options = config.to_options(base_dir);
    let use_case = ScaffoldUseCase::new(LocalFs::new(), ProcessRunner);

    if cli.dry_run {
        return match use_case.plan(&cli.name, &options) {
            Ok(plan) => {
                if cli.json {
                    println!("{}", plan_json(&plan));
                } else {
                    println!("{}", render_plan(&plan));
                }
                Ok(0)
            }
            Err(e) => {
                report_error(make_sink(cli, &config).as_ref(), &e);
                Ok(1)
            }
        };
    }

    let summary = use_case.execute_with_events(&cli.name, &options, make_sink(cli, &config));
    Ok(summary.exit_code())
}

/// `-C` wins over the current directory; relative values are taken from it
fn base_dir(cwd: &Path, dir: Option<&Path>) -> PathBuf {
    match dir {
        Some(dir) if dir.is_absolute() => dir.to_path_buf(),
        Some(dir) => cwd.join(dir),
        None => cwd.to_path_buf(),
    }
}

fn capabilities(cli: &Cli, config: &ScaffoldConfig) -> TerminalCapabilities {
    if cli.json {
        TerminalCapabilities::plain()
    } else {
        detect_capabilities(config.output.color, config.output.unicode)
    }
}

fn make_sink(cli: &Cli, config: &ScaffoldConfig) -> Arc<dyn ScaffoldEventSink> {
    if cli.json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::new(
            config.output.verbosity,
            capabilities(cli, config),
        ))
    }
}

fn report_error(sink: &dyn ScaffoldEventSink, error: &ScaffoldError) {
    sink.on_event(ScaffoldEvent::RunAborted {
        kind: error.kind(),
        reason: error.to_string(),
    });
}

fn plan_json(plan: &ScaffoldPlan) -> serde_json::Value {
    let phases: Vec<serde_json::Value> = plan
        .phases
        .iter()
        .map(|phase| {
            let entries: Vec<serde_json::Value> = phase
                .manifest
                .entries()
                .iter()
                .map(|entry| {
                    serde_json::json!({
                        "path": entry.relative_path(),
                        "kind": entry.kind().to_string(),
                    })
                })
                .collect();
            serde_json::json!({
                "phase": phase.manifest.phase().name(),
                "entries": entries,
                "command": phase.command.as_ref().map(|c| c.command_line()),
            })
        })
        .collect();

    serde_json::json!({
        "event": "plan",
        "project": plan.project,
        "root": plan.root.display().to_string(),
        "entry_count": plan.entry_count(),
        "phases": phases,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_dir_defaults_to_cwd() {
        assert_eq!(base_dir(Path::new("/work"), None), PathBuf::from("/work"));
    }

    #[test]
    fn relative_dir_is_joined_to_cwd() {
        assert_eq!(
            base_dir(Path::new("/work"), Some(Path::new("sub"))),
            PathBuf::from("/work/sub")
        );
    }

    #[test]
    fn absolute_dir_wins() {
        assert_eq!(
            base_dir(Path::new("/work"), Some(Path::new("/elsewhere"))),
            PathBuf::from("/elsewhere")
        );
    }
}
