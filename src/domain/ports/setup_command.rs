//! Setup command port - the external collaborators (VCS init,
//! dependency environment creation)
//!
//! The core only records whether a command succeeded; it never inspects
//! what the command produced.

use std::path::Path;

/// An external command run inside the project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupCommand {
    /// Logical name shown to the user ("vcs", "environment")
    pub name: String,
    pub program: String,
    pub args: Vec<String>,
}

impl SetupCommand {
    pub fn new(name: impl Into<String>, program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            name: name.into(),
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// `program arg1 arg2`, for display
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// What happened when a setup command ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Succeeded,
    /// Ran but exited non-zero (`code` is `None` when killed by a signal)
    Failed { code: Option<i32>, stderr: String },
    /// Program could not be found or spawned
    NotFound,
    /// Disabled by configuration
    Skipped,
}

impl CommandOutcome {
    /// Failed and missing commands count against the run
    pub fn is_error(&self) -> bool {
        matches!(self, CommandOutcome::Failed { .. } | CommandOutcome::NotFound)
    }

    pub fn label(&self) -> &'static str {
        match self {
            CommandOutcome::Succeeded => "succeeded",
            CommandOutcome::Failed { .. } => "failed",
            CommandOutcome::NotFound => "not_found",
            CommandOutcome::Skipped => "skipped",
        }
    }
}

impl std::fmt::Display for CommandOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandOutcome::Succeeded => write!(f, "succeeded"),
            CommandOutcome::Failed {
                code: Some(code),
                stderr,
            } if !stderr.is_empty() => write!(f, "exited with {}: {}", code, stderr),
            CommandOutcome::Failed { code: Some(code), .. } => write!(f, "exited with {}", code),
            CommandOutcome::Failed { code: None, stderr } if !stderr.is_empty() => {
                write!(f, "failed: {}", stderr)
            }
            CommandOutcome::Failed { code: None, .. } => write!(f, "terminated by signal"),
            CommandOutcome::NotFound => write!(f, "program not found"),
            CommandOutcome::Skipped => write!(f, "skipped"),
        }
    }
}

/// Recorded result of one setup command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandReport {
    pub name: String,
    pub command_line: String,
    pub outcome: CommandOutcome,
}

impl CommandReport {
    pub fn new(command: &SetupCommand, outcome: CommandOutcome) -> Self {
        Self {
            name: command.name.clone(),
            command_line: command.command_line(),
            outcome,
        }
    }
}

/// Runs external setup commands
pub trait SetupCommandRunner {
    /// Run `command` with `cwd` as its working directory
    fn run(&self, command: &SetupCommand, cwd: &Path) -> CommandOutcome;
}
