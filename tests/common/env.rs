//! Test environment for isolated mlscaffold runs.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated workspace plus HOME.
///
/// External setup commands are disabled by default through the
/// environment; tests that need them pass a config file instead.
pub struct TestEnv {
    pub workspace: TempDir,
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            workspace: TempDir::new().expect("Failed to create workspace dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_mlscaffold")),
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.workspace.path().join(relative)
    }

    /// Run from the workspace with setup commands disabled
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(
            args,
            &[("MLSCAFFOLD_NO_VCS", "1"), ("MLSCAFFOLD_NO_ENV", "1")],
        )
    }

    /// Run from the workspace with only the given MLSCAFFOLD_* variables
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.workspace.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("MLSCAFFOLD_NO_COLOR", "1")
            .env_remove("MLSCAFFOLD_NO_VCS")
            .env_remove("MLSCAFFOLD_NO_ENV")
            .env_remove("MLSCAFFOLD_ENV_DIR")
            .env_remove("MLSCAFFOLD_VERBOSITY");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute mlscaffold");
        output_to_result(output)
    }

    /// Write a file into the workspace
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let full = self.path(relative);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full, content).expect("Failed to write file");
        full
    }

    /// Every path under `root`, relative and `/`-separated, sorted
    pub fn snapshot_tree(&self, root: &Path) -> Vec<String> {
        let mut out = Vec::new();
        collect(root, root, &mut out);
        out.sort();
        out
    }
}

fn collect(base: &Path, dir: &Path, out: &mut Vec<String>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        let rel = path
            .strip_prefix(base)
            .unwrap()
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/");
        if path.is_dir() {
            out.push(format!("{}/", rel));
            collect(base, &path, out);
        } else {
            out.push(rel);
        }
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
