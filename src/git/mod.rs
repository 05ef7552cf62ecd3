//! git command execution layer
//!
//! Runs git and parses `git blame --porcelain` output into the blame
//! data model. This is the blame data source collaborator; the engine
//! itself never touches git.

mod executor;
mod parser;

pub use executor::GitExecutor;
pub use parser::parse_blame_porcelain;

use std::io;
use thiserror::Error;

/// Errors that can occur when executing git commands
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("git command failed (exit code {exit_code}): {stderr}")]
    CommandFailed { stderr: String, exit_code: i32 },

    #[error("Failed to parse git output: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("git is not installed or not in PATH")]
    GitNotFound,
}
