//! Per-revision visual styles
//!
//! Generates one named, disposable style per distinct revision in a
//! blame result: the class name comes from the short revision id, the
//! gutter text from the content formatter, and the border color from
//! the heat classifier. The style set is replaced wholesale whenever a
//! new blame result is applied to the same surface.

use std::collections::HashMap;

use crate::model::Revision;

use super::content::format_content_line;
use super::heat::{HeatBucket, HeatClassifier};
use super::relative::relative_time;

/// Class appended to every line owned by the highlighted revision
pub const HIGHLIGHT_CLASS: &str = "blame-highlight";

/// Class appended when a line continues the previous line's revision
pub const CONTINUATION_CLASS: &str = "blame-continuation-line";

/// Shared gutter appearance for every blame annotation
pub mod gutter {
    /// Gutter width in `ch` units (matches the formatter width)
    pub const WIDTH_CH: usize = super::super::content::MAX_WIDTH;
    /// Foreground color token
    pub const COLOR: &str = "var(--blame-gutter-fg)";
    /// Background color token
    pub const BACKGROUND: &str = "var(--blame-gutter-bg)";
    /// Background color token for the highlighted revision
    pub const HIGHLIGHT_BACKGROUND: &str = "var(--blame-gutter-highlight-bg)";
    /// Margin between gutter and source text
    pub const MARGIN: &str = "0 26px -1px 0";
    /// Right border carrying the heat color
    pub const BORDER: &str = "2px solid";
}

/// A named, disposable style generated for one revision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualStyle {
    class_name: String,
    content: String,
    heat: HeatBucket,
}

impl VisualStyle {
    /// Class name referenced by decoration records
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Gutter annotation text (summary + relative time)
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Heat bucket of the revision
    pub fn heat(&self) -> HeatBucket {
        self.heat
    }

    /// Border color token derived from the heat bucket
    pub fn border_color(&self) -> &'static str {
        self.heat.color_token()
    }

    /// CSS selector targeting the gutter pseudo-element
    pub fn selector(&self) -> String {
        format!(".{}::before", self.class_name)
    }

    /// Render the full CSS rule for this style
    pub fn css_rule(&self) -> String {
        let content = self.content.replace('\'', "\\'");
        format!(
            "{} {{ content: '{}'; width: {}ch; color: {}; background-color: {}; \
             height: 100%; margin: {}; display: inline-block; border-right: {} {}; }}",
            self.selector(),
            content,
            gutter::WIDTH_CH,
            gutter::COLOR,
            gutter::BACKGROUND,
            gutter::MARGIN,
            gutter::BORDER,
            self.border_color(),
        )
    }
}

/// Fixed CSS rule for the highlight modifier class
pub fn highlight_css_rule() -> String {
    format!(
        ".{HIGHLIGHT_CLASS}::before {{ background-color: {}; }}",
        gutter::HIGHLIGHT_BACKGROUND
    )
}

/// Fixed CSS rule for the continuation modifier class
///
/// Collapses the repeated gutter annotation to a single blank.
pub fn continuation_css_rule() -> String {
    format!(
        ".{CONTINUATION_CLASS}::before {{ content: '{}'; }}",
        super::content::FILLER
    )
}

/// Build one style per distinct revision in a blame result
///
/// Pure construction; disposing a previously built set is the caller's
/// concern.
pub fn build_styles(
    revisions: &[Revision],
    classifier: &HeatClassifier,
) -> HashMap<String, VisualStyle> {
    let mut styles = HashMap::with_capacity(revisions.len());
    for revision in revisions {
        let when = relative_time(revision.timestamp, classifier.now());
        styles.insert(
            revision.id.clone(),
            VisualStyle {
                class_name: format!("blame-{}", revision.short_id()),
                content: format_content_line(&revision.summary, &when),
                heat: classifier.classify(revision.timestamp),
            },
        );
    }
    styles
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn reference_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap()
    }

    fn make_revision(id: &str, days_ago: i64, summary: &str) -> Revision {
        Revision {
            id: id.to_string(),
            author: "test".to_string(),
            timestamp: reference_now() - Duration::days(days_ago),
            summary: summary.to_string(),
            body: None,
        }
    }

    #[test]
    fn test_one_style_per_revision() {
        let classifier = HeatClassifier::new(reference_now());
        let revisions = vec![
            make_revision("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa", 1, "first"),
            make_revision("bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb", 400, "second"),
        ];

        let styles = build_styles(&revisions, &classifier);
        assert_eq!(styles.len(), 2);

        let first = &styles["aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"];
        assert_eq!(first.class_name(), "blame-aaaaaaa");
        assert_eq!(first.heat(), HeatBucket::Days2);
        assert!(first.content().starts_with("first"));
        assert!(first.content().ends_with("a day ago"));

        let second = &styles["bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb"];
        assert_eq!(second.class_name(), "blame-bbbbbbb");
        assert_eq!(second.heat(), HeatBucket::Days720);
    }

    #[test]
    fn test_css_rule_shape() {
        let classifier = HeatClassifier::new(reference_now());
        let revisions = vec![make_revision(
            "cccccccccccccccccccccccccccccccccccccccc",
            3,
            "it's a fix",
        )];
        let styles = build_styles(&revisions, &classifier);
        let rule = styles["cccccccccccccccccccccccccccccccccccccccc"].css_rule();

        assert!(rule.starts_with(".blame-ccccccc::before {"));
        assert!(rule.contains("width: 50ch"));
        assert!(rule.contains("border-right: 2px solid var(--blame-orange-100)"));
        // Single quotes in the content are escaped
        assert!(rule.contains("it\\'s a fix"));
    }

    #[test]
    fn test_empty_revision_set() {
        let classifier = HeatClassifier::new(reference_now());
        assert!(build_styles(&[], &classifier).is_empty());
    }

    #[test]
    fn test_modifier_rules() {
        assert_eq!(
            highlight_css_rule(),
            ".blame-highlight::before { background-color: var(--blame-gutter-highlight-bg); }"
        );
        assert_eq!(
            continuation_css_rule(),
            ".blame-continuation-line::before { content: '\u{2007}'; }"
        );
    }
}
