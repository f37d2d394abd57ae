//! Process-backed setup command runner
//!
//! Spawns the configured program in the project root and waits for it.
//! Output is captured so it never interleaves with the CLI's own output.

use std::path::Path;
use std::process::Command;

use crate::domain::ports::{CommandOutcome, SetupCommand, SetupCommandRunner};

/// Runs setup commands as child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl SetupCommandRunner for ProcessRunner {
    fn run(&self, command: &SetupCommand, cwd: &Path) -> CommandOutcome {
        let result = Command::new(&command.program)
            .args(&command.args)
            .current_dir(cwd)
            .output();

        match result {
            Ok(output) if output.status.success() => CommandOutcome::Succeeded,
            Ok(output) => CommandOutcome::Failed {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => CommandOutcome::NotFound,
            Err(e) => CommandOutcome::Failed {
                code: None,
                stderr: e.to_string(),
            },
        }
    }
}
