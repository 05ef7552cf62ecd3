//! Integration tests against a real git repository
//!
//! Each test creates a throwaway repository via the GitRepo helper and
//! skips silently when the git binary is unavailable.

mod common;

use blameline::git::{GitError, GitExecutor};
use common::GitRepo;

#[test]
fn test_blame_two_commit_file() {
    let Some(repo) = GitRepo::try_new() else {
        eprintln!("git not available; skipping");
        return;
    };

    repo.commit_file("file.txt", "one\ntwo\n", "first commit");
    repo.commit_file("file.txt", "one\ntwo\nthree\n", "second commit");

    let executor = GitExecutor::with_repo_path(repo.path());
    let blame = executor
        .blame_file("file.txt", None)
        .expect("blame should succeed");

    assert_eq!(blame.lines.len(), 3);
    assert_eq!(blame.revisions.len(), 2);

    let first = blame.revision_at(0).expect("line 0 is attributed");
    let last = blame.revision_at(2).expect("line 2 is attributed");
    assert_ne!(first, last);

    let added = blame.revision(last).expect("revision metadata exists");
    assert_eq!(added.summary, "second commit");
    assert_eq!(added.author, "Test User");
    assert!(added.timestamp.timestamp() > 0);
}

#[test]
fn test_blame_at_revision_ignores_later_commits() {
    let Some(repo) = GitRepo::try_new() else {
        eprintln!("git not available; skipping");
        return;
    };

    repo.commit_file("file.txt", "one\n", "first commit");
    let head = repo.git(&["rev-parse", "HEAD"]).trim().to_string();
    repo.commit_file("file.txt", "one\ntwo\n", "second commit");

    let executor = GitExecutor::with_repo_path(repo.path());
    let blame = executor
        .blame_file("file.txt", Some(&head))
        .expect("blame at revision should succeed");

    assert_eq!(blame.lines.len(), 1);
    assert_eq!(blame.revisions.len(), 1);
    assert_eq!(blame.revisions[0].summary, "first commit");
}

#[test]
fn test_file_content_from_revision() {
    let Some(repo) = GitRepo::try_new() else {
        eprintln!("git not available; skipping");
        return;
    };

    repo.commit_file("file.txt", "old content\n", "first commit");
    let head = repo.git(&["rev-parse", "HEAD"]).trim().to_string();
    repo.commit_file("file.txt", "new content\n", "second commit");

    let executor = GitExecutor::with_repo_path(repo.path());
    assert_eq!(
        executor.file_content("file.txt", None).unwrap(),
        "new content\n"
    );
    assert_eq!(
        executor.file_content("file.txt", Some(&head)).unwrap(),
        "old content\n"
    );
}

#[test]
fn test_blame_missing_file_fails() {
    let Some(repo) = GitRepo::try_new() else {
        eprintln!("git not available; skipping");
        return;
    };

    repo.commit_file("file.txt", "one\n", "first commit");

    let executor = GitExecutor::with_repo_path(repo.path());
    let result = executor.blame_file("missing.txt", None);
    assert!(matches!(result, Err(GitError::CommandFailed { .. })));
}

#[test]
fn test_blame_outside_repository_fails() {
    if GitRepo::try_new().is_none() {
        eprintln!("git not available; skipping");
        return;
    }

    let outside = tempfile::TempDir::new().expect("Failed to create temp directory");
    std::fs::write(outside.path().join("file.txt"), "one\n").expect("Failed to write file");

    let executor = GitExecutor::with_repo_path(outside.path().to_path_buf());
    let result = executor.blame_file("file.txt", None);
    assert!(matches!(result, Err(GitError::NotARepository)));
}
