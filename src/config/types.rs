//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::ScaffoldOptions;
use crate::domain::ports::SetupCommand;
use crate::domain::services::DEFAULT_ENV_DIR;
use crate::domain::value_objects::SafePath;
use crate::error::{ScaffoldError, ScaffoldResult};

/// Dependency environment configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Directory the environment lives in (also ignored by `.gitignore`)
    #[serde(default = "default_env_dir")]
    pub dir: String,

    #[serde(default = "default_env_program")]
    pub program: String,

    /// Defaults to `-m venv <dir>`
    #[serde(default)]
    pub args: Option<Vec<String>>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            dir: default_env_dir(),
            program: default_env_program(),
            args: None,
        }
    }
}

impl EnvironmentConfig {
    pub fn command(&self) -> Option<SetupCommand> {
        if !self.enabled {
            return None;
        }
        let args = match &self.args {
            Some(args) => args.clone(),
            None => vec!["-m".to_string(), "venv".to_string(), self.dir.clone()],
        };
        Some(SetupCommand {
            name: "environment".to_string(),
            program: self.program.clone(),
            args,
        })
    }
}

/// Version-control configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VcsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_vcs_program")]
    pub program: String,

    #[serde(default = "default_vcs_args")]
    pub args: Vec<String>,
}

impl Default for VcsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            program: default_vcs_program(),
            args: default_vcs_args(),
        }
    }
}

impl VcsConfig {
    pub fn command(&self) -> Option<SetupCommand> {
        self.enabled.then(|| SetupCommand {
            name: "vcs".to_string(),
            program: self.program.clone(),
            args: self.args.clone(),
        })
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    pub const NAMES: [&'static str; 4] = ["quiet", "normal", "verbose", "debug"];

    /// Parse a user-supplied level, ignoring case and surrounding spaces
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quiet" => Some(Verbosity::Quiet),
            "normal" => Some(Verbosity::Normal),
            "verbose" => Some(Verbosity::Verbose),
            "debug" => Some(Verbosity::Debug),
            _ => None,
        }
    }

    /// Raise the level by `-v` count, never lowering it
    pub fn bumped(self, count: u8) -> Self {
        let from_flags = match count {
            0 => return self,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        };
        self.max(from_flags)
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScaffoldConfig {
    #[serde(default)]
    pub environment: EnvironmentConfig,

    #[serde(default)]
    pub vcs: VcsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl ScaffoldConfig {
    /// Reject values that would break the generated layout
    pub fn validate(&self, source: &Path) -> ScaffoldResult<()> {
        let dir = &self.environment.dir;
        let single_segment = SafePath::new(dir)
            .map(|p| p.segments().len() == 1 && p.to_string() == *dir)
            .unwrap_or(false);
        if !single_segment {
            return Err(ScaffoldError::Config {
                file: source.to_path_buf(),
                message: format!(
                    "environment.dir '{}' must be a single directory name",
                    dir
                ),
            });
        }
        Ok(())
    }

    /// Options for a run rooted in `base_dir`
    pub fn to_options(&self, base_dir: impl Into<PathBuf>) -> ScaffoldOptions {
        ScaffoldOptions::new(base_dir)
            .with_env_dir(self.environment.dir.clone())
            .with_vcs_command(self.vcs.command())
            .with_env_command(self.environment.command())
    }
}

fn default_true() -> bool {
    true
}

fn default_env_dir() -> String {
    DEFAULT_ENV_DIR.to_string()
}

fn default_env_program() -> String {
    "python3".to_string()
}

fn default_vcs_program() -> String {
    "git".to_string()
}

fn default_vcs_args() -> Vec<String> {
    vec!["init".to_string()]
}
