//! Blame domain models
//!
//! UI-independent data structures representing a blame result: which
//! revision owns each line, and metadata for every referenced revision.

use chrono::{DateTime, Utc};

/// Number of identifier characters used for short display forms
pub const SHORT_ID_LEN: usize = 7;

/// An immutable commit record referenced by blame attributions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revision {
    /// Full revision identifier (hash)
    pub id: String,
    /// Author name
    pub author: String,
    /// Author timestamp
    pub timestamp: DateTime<Utc>,
    /// One-line commit summary
    pub summary: String,
    /// Optional multi-line commit body
    pub body: Option<String>,
}

impl Revision {
    /// Short identifier (first 7 characters, or the full id if shorter)
    pub fn short_id(&self) -> &str {
        let end = self
            .id
            .char_indices()
            .nth(SHORT_ID_LEN)
            .map(|(i, _)| i)
            .unwrap_or(self.id.len());
        &self.id[..end]
    }
}

/// Attribution of a single line to the revision that last modified it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineAttribution {
    /// Zero-based line number
    pub line: u32,
    /// Identifier of the owning revision
    pub revision_id: String,
}

/// Blame information for an entire file
///
/// Every `revision_id` referenced by `lines` must exist in `revisions`,
/// and line numbers are unique. Both are guaranteed by the data source.
#[derive(Debug, Clone, Default)]
pub struct BlameResult {
    /// Per-line attributions, in line order
    pub lines: Vec<LineAttribution>,
    /// Distinct revisions referenced by the attributions
    pub revisions: Vec<Revision>,
}

impl BlameResult {
    /// Check if the result has no attributed lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of attributed lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Identifier of the revision owning `line`, if the line is attributed
    pub fn revision_at(&self, line: u32) -> Option<&str> {
        self.lines
            .iter()
            .find(|attribution| attribution.line == line)
            .map(|attribution| attribution.revision_id.as_str())
    }

    /// Look up a revision by identifier
    pub fn revision(&self, id: &str) -> Option<&Revision> {
        self.revisions.iter().find(|revision| revision.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn make_revision(id: &str) -> Revision {
        Revision {
            id: id.to_string(),
            author: "test".to_string(),
            timestamp: Utc.with_ymd_and_hms(2026, 1, 30, 10, 43, 0).unwrap(),
            summary: "test commit".to_string(),
            body: None,
        }
    }

    #[test]
    fn test_short_id() {
        let revision = make_revision("0123456789abcdef");
        assert_eq!(revision.short_id(), "0123456");

        let tiny = make_revision("ab12");
        assert_eq!(tiny.short_id(), "ab12");
    }

    #[test]
    fn test_revision_at() {
        let blame = BlameResult {
            lines: vec![
                LineAttribution {
                    line: 0,
                    revision_id: "aaa".to_string(),
                },
                LineAttribution {
                    line: 1,
                    revision_id: "bbb".to_string(),
                },
            ],
            revisions: vec![make_revision("aaa"), make_revision("bbb")],
        };

        assert_eq!(blame.revision_at(0), Some("aaa"));
        assert_eq!(blame.revision_at(1), Some("bbb"));
        assert_eq!(blame.revision_at(2), None);
    }

    #[test]
    fn test_revision_lookup() {
        let blame = BlameResult {
            lines: Vec::new(),
            revisions: vec![make_revision("aaa")],
        };
        assert!(blame.revision("aaa").is_some());
        assert!(blame.revision("zzz").is_none());
        assert!(blame.is_empty());
        assert_eq!(blame.len(), 0);
    }
}
