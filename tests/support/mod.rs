//! Test support utilities for vaultdiff integration tests.
//!
//! Provides an isolated test environment plus helper commands.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::Output;

use assert_cmd::Command;
use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own temporary project dir and home dir. No
/// process-global state is mutated — child processes use `.current_dir()`
/// so tests can safely run in parallel.
pub struct Test {
    /// Temporary directory for the test project
    pub dir: TempDir,
    /// Temporary home directory
    pub home: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");

        Self { dir, home }
    }

    /// Create a vaultdiff command with correct environment variables.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("vaultdiff").expect("failed to find vaultdiff binary");
        cmd.env("HOME", self.home.path());
        cmd.env("XDG_CONFIG_HOME", self.home.path().join(".config"));
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Write a JSON snapshot file into the project dir, returning its path.
    pub fn snapshot(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("failed to write snapshot");
        path
    }

    /// Write a vaultdiff.toml into the project dir.
    pub fn config(&self, contents: &str) {
        std::fs::write(self.dir.path().join("vaultdiff.toml"), contents)
            .expect("failed to write config");
    }

    /// Shortcut for `vaultdiff diff` against two snapshot files.
    pub fn diff(&self, left: &str, right: &str, extra: &[&str]) -> Output {
        self.cmd()
            .arg("diff")
            .arg(left)
            .arg(right)
            .args(extra)
            .output()
            .expect("failed to run vaultdiff diff")
    }
}

/// Assert the command succeeded, printing stderr on failure.
pub fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "expected success, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Assert the command failed.
pub fn assert_failure(output: &Output) {
    assert!(
        !output.status.success(),
        "expected failure, stdout: {}",
        String::from_utf8_lossy(&output.stdout)
    );
}

/// Assert stdout contains the given needle.
pub fn assert_stdout_contains(output: &Output, needle: &str) {
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains(needle),
        "stdout missing {needle:?}:\n{stdout}"
    );
}

/// Assert stdout does not contain the given needle.
pub fn assert_stdout_lacks(output: &Output, needle: &str) {
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        !stdout.contains(needle),
        "stdout unexpectedly contains {needle:?}:\n{stdout}"
    );
}

/// Assert stderr contains the given needle.
pub fn assert_stderr_contains(output: &Output, needle: &str) {
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains(needle),
        "stderr missing {needle:?}:\n{stderr}"
    );
}
