//! git command executor
//!
//! Handles running git commands and capturing their output.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

use crate::model::BlameResult;

use super::GitError;
use super::parser::parse_blame_porcelain;

/// Stderr marker for commands run outside a repository
const NOT_A_REPO: &str = "not a git repository";

/// Executor for git commands
#[derive(Debug, Clone)]
pub struct GitExecutor {
    /// Path to the repository (None = current directory)
    repo_path: Option<PathBuf>,
}

impl Default for GitExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl GitExecutor {
    /// Create a new executor for the current directory
    pub fn new() -> Self {
        Self { repo_path: None }
    }

    /// Create a new executor for a specific repository path
    pub fn with_repo_path(path: PathBuf) -> Self {
        Self {
            repo_path: Some(path),
        }
    }

    /// Run a git command with the given arguments
    pub fn run(&self, args: &[&str]) -> Result<String, GitError> {
        let mut cmd = Command::new("git");

        if let Some(ref path) = self.repo_path {
            cmd.arg("-C").arg(path);
        }

        cmd.args(args);

        let output = cmd.output().map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                GitError::GitNotFound
            } else {
                GitError::IoError(e)
            }
        })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            let exit_code = output.status.code().unwrap_or(-1);

            if stderr.contains(NOT_A_REPO) {
                return Err(GitError::NotARepository);
            }

            Err(GitError::CommandFailed { stderr, exit_code })
        }
    }

    /// Run `git blame --porcelain`, optionally at a revision
    pub fn blame_raw(&self, file: &str, revision: Option<&str>) -> Result<String, GitError> {
        let mut args = vec!["blame", "--porcelain"];
        if let Some(rev) = revision {
            args.push(rev);
        }
        args.push("--");
        args.push(file);
        self.run(&args)
    }

    /// Fetch and parse the blame result for a file
    pub fn blame_file(&self, file: &str, revision: Option<&str>) -> Result<BlameResult, GitError> {
        let output = self.blame_raw(file, revision)?;
        parse_blame_porcelain(&output)
    }

    /// Read a file's content, from the working tree or from a revision
    pub fn file_content(&self, file: &str, revision: Option<&str>) -> Result<String, GitError> {
        match revision {
            Some(rev) => {
                let spec = format!("{rev}:{file}");
                self.run(&["show", spec.as_str()])
            }
            None => {
                let path = match self.repo_path {
                    Some(ref root) => root.join(file),
                    None => PathBuf::from(file),
                };
                Ok(fs::read_to_string(path)?)
            }
        }
    }

    /// Run `git show <revision>` with inherited stdio
    ///
    /// Spawns git's own pager, so the caller must leave raw mode and the
    /// alternate screen before invoking this method.
    pub fn show_interactive(&self, revision: &str) -> io::Result<ExitStatus> {
        let mut cmd = Command::new("git");

        if let Some(ref path) = self.repo_path {
            cmd.arg("-C").arg(path);
        }

        cmd.args(["show", revision])
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
    }
}
