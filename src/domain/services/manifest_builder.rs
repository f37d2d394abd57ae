//! Manifest construction service
//!
//! Each phase's entries come from the static tables below. The only
//! inputs are the project name (for the README heading) and the
//! environment directory name (for `.gitignore`).

use crate::domain::entities::{Manifest, PathEntry};
use crate::domain::value_objects::{Phase, ProjectName};

/// Pipeline stages, one artifact directory and one notebook each
pub const PIPELINE_STAGES: [&str; 8] = [
    "data_collection",
    "data_ingestion",
    "data_preprocessing",
    "exploratory_data_analysis",
    "feature_engineering",
    "model_training",
    "model_evaluation",
    "model_deployment",
];

pub const ARTIFACTS_DIR: &str = "artifacts";
pub const CONFIG_DIR: &str = "config";
pub const CONFIG_FILE: &str = "config/config.yaml";
pub const GITIGNORE_FILE: &str = ".gitignore";
pub const CONFIG_FILES: [&str; 3] = ["requirements.txt", "main.py", "app.py"];
pub const README_FILE: &str = "README.md";
pub const LOGS_DIR: &str = "logs";
pub const LOG_FILE: &str = "logs/logs.log";
pub const RESEARCH_DIR: &str = "research";
pub const NOTEBOOK_EXTENSION: &str = "ipynb";

/// Default name of the dependency environment directory
pub const DEFAULT_ENV_DIR: &str = "venv";

/// Builds the manifest for each phase
#[derive(Debug, Clone)]
pub struct ManifestBuilder {
    project_name: ProjectName,
    env_dir: String,
}

impl ManifestBuilder {
    pub fn new(project_name: ProjectName) -> Self {
        Self {
            project_name,
            env_dir: DEFAULT_ENV_DIR.to_string(),
        }
    }

    /// Override the environment directory that `.gitignore` excludes
    pub fn with_env_dir(mut self, env_dir: impl Into<String>) -> Self {
        self.env_dir = env_dir.into();
        self
    }

    pub fn build(&self, phase: Phase) -> Manifest {
        match phase {
            Phase::Directories => {
                let mut entries = vec![PathEntry::directory(ARTIFACTS_DIR)];
                entries.extend(
                    PIPELINE_STAGES
                        .iter()
                        .map(|stage| PathEntry::directory(format!("{ARTIFACTS_DIR}/{stage}"))),
                );
                entries.push(PathEntry::directory(CONFIG_DIR));
                entries.push(PathEntry::file(CONFIG_FILE));
                Manifest::new(phase, entries)
            }
            Phase::Vcs => Manifest::new(
                phase,
                vec![PathEntry::file_with(
                    GITIGNORE_FILE,
                    gitignore_content(&self.env_dir),
                )],
            ),
            Phase::Environment => Manifest::empty(phase),
            Phase::ConfigFiles => Manifest::new(
                phase,
                CONFIG_FILES.iter().map(|f| PathEntry::file(*f)).collect(),
            ),
            Phase::Docs => Manifest::new(
                phase,
                vec![PathEntry::file_with(
                    README_FILE,
                    readme_content(&self.project_name),
                )],
            ),
            Phase::Logs => Manifest::new(
                phase,
                vec![PathEntry::directory(LOGS_DIR), PathEntry::file(LOG_FILE)],
            ),
            Phase::Research => {
                let mut entries = vec![PathEntry::directory(RESEARCH_DIR)];
                entries.extend(PIPELINE_STAGES.iter().map(|stage| {
                    PathEntry::file(format!("{RESEARCH_DIR}/{stage}.{NOTEBOOK_EXTENSION}"))
                }));
                Manifest::new(phase, entries)
            }
        }
    }

    /// Manifests for every phase, in run order
    pub fn build_all(&self) -> Vec<Manifest> {
        Phase::ALL.iter().map(|phase| self.build(*phase)).collect()
    }
}

/// `.gitignore` body: the environment directory and the artifacts tree
pub fn gitignore_content(env_dir: &str) -> String {
    format!("{env_dir}/\n{ARTIFACTS_DIR}/\n")
}

/// `README.md` body: a single heading with the project name
pub fn readme_content(name: &ProjectName) -> String {
    format!("# {name}")
}
