//! Scaffold Options
//!
//! Configuration types for a scaffolding run.

use std::path::PathBuf;

use crate::domain::ports::SetupCommand;
use crate::domain::services::DEFAULT_ENV_DIR;

/// Options for the scaffold use case
#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    /// Directory the project root is created in
    pub base_dir: PathBuf,
    /// Environment directory excluded by `.gitignore`
    pub env_dir: String,
    /// Version-control init command, `None` to skip
    pub vcs_command: Option<SetupCommand>,
    /// Dependency environment command, `None` to skip
    pub env_command: Option<SetupCommand>,
}

impl ScaffoldOptions {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            env_dir: DEFAULT_ENV_DIR.to_string(),
            vcs_command: Some(default_vcs_command()),
            env_command: Some(default_env_command(DEFAULT_ENV_DIR)),
        }
    }

    pub fn with_env_dir(mut self, env_dir: impl Into<String>) -> Self {
        self.env_dir = env_dir.into();
        self
    }

    pub fn with_vcs_command(mut self, command: Option<SetupCommand>) -> Self {
        self.vcs_command = command;
        self
    }

    pub fn with_env_command(mut self, command: Option<SetupCommand>) -> Self {
        self.env_command = command;
        self
    }

    /// Skip both external commands
    pub fn without_commands(self) -> Self {
        self.with_vcs_command(None).with_env_command(None)
    }
}

/// `git init`
pub fn default_vcs_command() -> SetupCommand {
    SetupCommand::new("vcs", "git", &["init"])
}

/// `python3 -m venv <env_dir>`
pub fn default_env_command(env_dir: &str) -> SetupCommand {
    SetupCommand::new("environment", "python3", &["-m", "venv", env_dir])
}
