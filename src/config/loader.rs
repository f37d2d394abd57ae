//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ScaffoldError, ScaffoldResult};

use super::types::{ScaffoldConfig, Verbosity};

/// Label used in place of a file for values read from `MLSCAFFOLD_*`
pub const ENVIRONMENT_SOURCE: &str = "<environment>";

/// What a [`ConfigWarning`] is about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarningKind {
    /// A key the configuration does not know; it is ignored
    UnknownKey,
    /// A value that could not be parsed; the previous value is kept
    InvalidValue(String),
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub kind: WarningKind,
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            WarningKind::UnknownKey => write!(f, "unknown config key '{}'", self.key)?,
            WarningKind::InvalidValue(value) => {
                write!(f, "invalid value '{}' for {}", value, self.key)?
            }
        }
        write!(f, " in {}", self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Configuration after every layer has been applied
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: ScaffoldConfig,
    pub warnings: Vec<ConfigWarning>,
    /// File the values came from, `None` when no file was read
    pub source: Option<PathBuf>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ScaffoldResult<(ScaffoldConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| ScaffoldError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: ScaffoldConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ScaffoldError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                kind: WarningKind::UnknownKey,
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: closest(&key, KEY_NAMES),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the file layer, then apply environment overrides and validate.
///
/// An explicit `--config` path must exist. Without one the user config
/// is used when present, otherwise built-in defaults.
pub fn load_config<F>(explicit: Option<&Path>, get_env: F) -> ScaffoldResult<LoadedConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let file = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => user_config_path().filter(|p| p.is_file()),
    };

    let (config, mut warnings) = match &file {
        Some(path) => load_with_warnings(path)?,
        None => (ScaffoldConfig::default(), Vec::new()),
    };

    let (config, env_warnings) = with_env_overrides(config, &get_env);
    warnings.extend(env_warnings);
    let source_label = file
        .clone()
        .unwrap_or_else(|| PathBuf::from(ENVIRONMENT_SOURCE));
    config.validate(&source_label)?;

    Ok(LoadedConfig {
        config,
        warnings,
        source: file,
    })
}

/// `<config_dir>/mlscaffold/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("mlscaffold").join("config.toml"))
}

/// Apply environment variable overrides (MLSCAFFOLD_* prefix)
///
/// A value that cannot be parsed leaves the setting alone and is reported
/// as a warning.
pub fn with_env_overrides<F>(
    mut config: ScaffoldConfig,
    get_env: F,
) -> (ScaffoldConfig, Vec<ConfigWarning>)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(dir) = get_env("MLSCAFFOLD_ENV_DIR") {
        config.environment.dir = dir;
    }

    if get_env("MLSCAFFOLD_NO_VCS").is_some_and(|v| is_truthy(&v)) {
        config.vcs.enabled = false;
    }

    if get_env("MLSCAFFOLD_NO_ENV").is_some_and(|v| is_truthy(&v)) {
        config.environment.enabled = false;
    }

    let mut warnings = Vec::new();
    if let Some(value) = get_env("MLSCAFFOLD_VERBOSITY") {
        match Verbosity::parse(&value) {
            Some(verbosity) => config.output.verbosity = verbosity,
            None => warnings.push(ConfigWarning {
                kind: WarningKind::InvalidValue(value.clone()),
                key: "MLSCAFFOLD_VERBOSITY".to_string(),
                file: PathBuf::from(ENVIRONMENT_SOURCE),
                line: None,
                suggestion: closest(&value.trim().to_ascii_lowercase(), &Verbosity::NAMES),
            }),
        }
    }

    (config, warnings)
}

fn is_truthy(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && value != "0" && !value.eq_ignore_ascii_case("false")
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

const KEY_NAMES: &[&str] = &[
    "environment",
    "enabled",
    "dir",
    "program",
    "args",
    "vcs",
    "output",
    "verbosity",
    "color",
    "unicode",
];

/// Nearest candidate within an edit distance of 2
fn closest(unknown: &str, candidates: &[&str]) -> Option<String> {
    let mut best: Option<(&str, usize)> = None;
    for &candidate in candidates {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

pub(crate) fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
