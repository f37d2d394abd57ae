//! Phase value object - the fixed scaffolding stages, in run order

use serde::{Deserialize, Serialize};

/// A named, independently sequenced group of scaffolding actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Artifact stage directories and the config directory
    Directories,
    /// `.gitignore` plus version-control initialization
    Vcs,
    /// Isolated dependency environment creation
    Environment,
    /// `requirements.txt`, `main.py`, `app.py`
    ConfigFiles,
    /// `README.md`
    Docs,
    /// `logs/` and its log file
    Logs,
    /// `research/` notebook placeholders
    Research,
}

impl Phase {
    /// Every phase, in the order the orchestrator runs them
    pub const ALL: [Phase; 7] = [
        Phase::Directories,
        Phase::Vcs,
        Phase::Environment,
        Phase::ConfigFiles,
        Phase::Docs,
        Phase::Logs,
        Phase::Research,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Phase::Directories => "directories",
            Phase::Vcs => "vcs",
            Phase::Environment => "environment",
            Phase::ConfigFiles => "config_files",
            Phase::Docs => "docs",
            Phase::Logs => "logs",
            Phase::Research => "research",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_order_is_fixed() {
        let names: Vec<_> = Phase::ALL.iter().map(Phase::name).collect();
        assert_eq!(
            names,
            [
                "directories",
                "vcs",
                "environment",
                "config_files",
                "docs",
                "logs",
                "research"
            ]
        );
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&Phase::ConfigFiles).unwrap();
        assert_eq!(json, "\"config_files\"");
    }
}
