//! Hover message construction
//!
//! Renders the markdown shown when hovering a blamed line: revision id,
//! author and date, and the block-quoted commit message with markdown
//! metacharacters escaped.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::Revision;

/// Markdown metacharacters escaped in commit messages
static MARKDOWN_ESCAPE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[`>#*_\-+]").expect("Invalid markdown escape regex"));

/// Format the hover message for a revision
pub(crate) fn hover_message(revision: &Revision) -> String {
    let mut message = revision.summary.clone();
    if let Some(body) = &revision.body {
        message.push('\n');
        message.push_str(body);
    }
    let message = MARKDOWN_ESCAPE_REGEX.replace_all(&message, r"\$0");
    // Two trailing spaces make a markdown hard line break
    let message = message.replace('\n', "  \n");
    let date = revision.timestamp.to_rfc2822();

    format!(
        "{}\n \n {}, {}\n \n> {}",
        revision.id, revision.author, date, message
    )
}
