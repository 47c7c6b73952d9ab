//! Shared testing utilities for storyprompt CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI runs.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `storyprompt` binary.
    ///
    /// Inherited configuration and log variables are cleared so the host
    /// environment cannot leak into assertions.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("storyprompt").expect("Failed to locate storyprompt binary");
        cmd.current_dir(self.work_dir())
            .env_remove("STORYPROMPT_CONFIG")
            .env_remove("STORYPROMPT_LOG");
        cmd
    }

    /// Write `storyprompt.toml` in the work directory.
    pub fn write_config(&self, content: &str) -> PathBuf {
        self.write_file("storyprompt.toml", content)
    }

    /// Write a file relative to the work directory and return its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }
}
