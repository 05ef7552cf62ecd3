//! GitRepo helper for integration tests.
//!
//! Provides a temporary git repository for testing blame operations.

use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

/// A temporary git repository for testing.
///
/// The repository is automatically cleaned up when the GitRepo is dropped.
pub struct GitRepo {
    dir: TempDir,
}

impl GitRepo {
    /// Create a new git repository in a temporary directory.
    ///
    /// Returns None when the git binary is unavailable, so callers can
    /// skip instead of failing on minimal CI images.
    pub fn try_new() -> Option<Self> {
        let available = Command::new("git")
            .arg("--version")
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false);
        if !available {
            return None;
        }

        let dir = TempDir::new().expect("Failed to create temp directory");
        let repo = Self { dir };
        repo.git(&["init", "--quiet"]);
        repo.git(&["config", "user.name", "Test User"]);
        repo.git(&["config", "user.email", "test@example.com"]);
        repo.git(&["config", "commit.gpgsign", "false"]);
        Some(repo)
    }

    /// Get the path to the repository root.
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Write a file relative to the repository root.
    pub fn write(&self, name: &str, content: &str) {
        std::fs::write(self.dir.path().join(name), content).expect("Failed to write file");
    }

    /// Execute a git command in this repository.
    ///
    /// # Panics
    ///
    /// Panics if the command fails to execute or returns a non-zero exit code.
    pub fn git(&self, args: &[&str]) -> String {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.dir.path())
            .output()
            .expect("Failed to execute git command");

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            panic!(
                "git {:?} failed with exit code {:?}:\n{}",
                args,
                output.status.code(),
                stderr
            );
        }

        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    /// Write a file, stage everything, and commit.
    pub fn commit_file(&self, name: &str, content: &str, message: &str) {
        self.write(name, content);
        self.git(&["add", "."]);
        self.git(&["commit", "--quiet", "-m", message]);
    }
}
