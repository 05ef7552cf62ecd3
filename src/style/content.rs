//! Gutter annotation text formatting
//!
//! Produces the fixed-width `<summary> <relative time>` string shown in
//! the blame gutter. The part before the time suffix is always exactly
//! `MAX_WIDTH - len(time) - 2` characters: long summaries are cut at a
//! word boundary and ellipsized, short ones are padded with figure
//! spaces so the time suffix lines up across rows.

/// Fixed gutter annotation width in characters
pub const MAX_WIDTH: usize = 50;

/// Figure space used to pad the annotation to its fixed width
pub const FILLER: char = '\u{2007}';

/// Replacement for newlines embedded in a commit summary
const NEWLINE_MARK: &str = "↩";

/// Format a commit summary and relative time into the gutter annotation
pub fn format_content_line(summary: &str, when: &str) -> String {
    format_with_width(summary, when, MAX_WIDTH)
}

fn format_with_width(summary: &str, when: &str, max_width: usize) -> String {
    let content_width = max_width.saturating_sub(when.chars().count() + 2);
    let summary = summary.replace('\n', NEWLINE_MARK);
    let chars: Vec<char> = summary.chars().collect();

    let mut content = if chars.len() > content_width {
        // Cut at the last space at or before content_width - 4; a cut
        // point before the halfway mark falls back to a hard cut.
        let limit = content_width.saturating_sub(4).min(chars.len() - 1);
        let mut crop = chars[..=limit]
            .iter()
            .rposition(|c| *c == ' ')
            .unwrap_or(0);
        if 2 * crop < content_width {
            crop = content_width.saturating_sub(3);
        }
        let mut cut: String = chars[..crop.min(chars.len())].iter().collect();
        cut.push_str("...");
        cut
    } else {
        summary
    };

    let len = content.chars().count();
    if len < content_width {
        content.extend(std::iter::repeat(FILLER).take(content_width - len));
    }

    format!("{content} {when}")
}
