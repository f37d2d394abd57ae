//! Configuration module
//!
//! Layers, highest priority first:
//! 1. CLI flags
//! 2. Environment variables (MLSCAFFOLD_*)
//! 3. `--config <file>`, or the user config
//!    (`<config_dir>/mlscaffold/config.toml`)
//! 4. Built-in defaults

mod loader;
mod types;

pub use loader::{
    load_config, load_with_warnings, user_config_path, with_env_overrides, ConfigWarning,
    LoadedConfig, WarningKind, ENVIRONMENT_SOURCE,
};
pub use types::{
    ColorMode, EnvironmentConfig, OutputConfig, ScaffoldConfig, VcsConfig, Verbosity,
};
