//! `git blame --porcelain` output parser
//!
//! Porcelain output is a sequence of groups. Each group opens with a
//! header line `<sha> <orig-line> <final-line> [<group-size>]`, followed
//! by commit metadata lines the first time a commit appears, and ends
//! with the line content prefixed by a tab:
//!
//! ```text
//! 49790a277cff0b71d734a9acb4b1ad36ba48a754 1 1 2
//! author Alex Doe
//! author-mail <alex@example.com>
//! author-time 1769769799
//! author-tz +0900
//! summary fix parser
//! filename src/lib.rs
//! \tfn main() {
//! ```

use std::collections::HashSet;
use std::sync::LazyLock;

use chrono::DateTime;
use regex::Regex;

use crate::model::{BlameResult, LineAttribution, Revision};

use super::GitError;

/// Header line opening a porcelain group
///
/// Groups:
/// 1. sha (40 hex chars)
/// 2. original line number
/// 3. final line number
/// 4. group size (first line of a group only)
static GROUP_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9a-f]{40}) (\d+) (\d+)( \d+)?$").expect("Invalid porcelain header regex")
});

/// Commit metadata collected between a header and its content line
#[derive(Default)]
struct PendingMeta {
    author: Option<String>,
    timestamp: Option<i64>,
    summary: Option<String>,
}

/// Parse `git blame --porcelain` output into a blame result
///
/// Lenient about missing metadata (git always emits it, but a partial
/// stream should not bring the viewer down): absent fields fall back to
/// empty strings and the epoch.
pub fn parse_blame_porcelain(output: &str) -> Result<BlameResult, GitError> {
    let mut revisions: Vec<Revision> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut lines: Vec<LineAttribution> = Vec::new();

    let mut current: Option<(String, u32)> = None;
    let mut meta = PendingMeta::default();

    for line in output.lines() {
        if let Some(caps) = GROUP_HEADER_REGEX.captures(line) {
            let final_line: u64 = caps[3]
                .parse()
                .map_err(|_| GitError::ParseError(format!("Bad line number in: {line}")))?;
            let line_number = u32::try_from(final_line)
                .ok()
                .and_then(|n| n.checked_sub(1))
                .ok_or_else(|| GitError::ParseError(format!("Bad line number in: {line}")))?;
            current = Some((caps[1].to_string(), line_number));
        } else if let Some(_content) = line.strip_prefix('\t') {
            let Some((sha, line_number)) = current.take() else {
                return Err(GitError::ParseError(
                    "Content line without a group header".to_string(),
                ));
            };
            if !seen.contains(&sha) {
                let taken = std::mem::take(&mut meta);
                seen.insert(sha.clone());
                revisions.push(Revision {
                    id: sha.clone(),
                    author: taken.author.unwrap_or_default(),
                    timestamp: DateTime::from_timestamp(taken.timestamp.unwrap_or(0), 0)
                        .unwrap_or_default(),
                    summary: taken.summary.unwrap_or_default(),
                    body: None,
                });
            }
            meta = PendingMeta::default();
            lines.push(LineAttribution {
                line: line_number,
                revision_id: sha,
            });
        } else if let Some(author) = line.strip_prefix("author ") {
            meta.author = Some(author.to_string());
        } else if let Some(time) = line.strip_prefix("author-time ") {
            meta.timestamp = time.trim().parse().ok();
        } else if let Some(summary) = line.strip_prefix("summary ") {
            meta.summary = Some(summary.to_string());
        }
        // author-mail, author-tz, committer*, filename, previous and
        // boundary lines carry nothing the model keeps
    }

    Ok(BlameResult { lines, revisions })
}
