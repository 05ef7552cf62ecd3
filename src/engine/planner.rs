//! Decoration planning
//!
//! Walks a blame result in line order and emits one decoration record
//! per attribution: the revision's base style class, plus the highlight
//! modifier on lines owned by the highlighted revision and the
//! continuation modifier on lines sharing their revision with the
//! immediately preceding line.

use std::collections::HashMap;

use crate::model::BlameResult;
use crate::style::{CONTINUATION_CLASS, HIGHLIGHT_CLASS, HeatClassifier, VisualStyle, build_styles};

use super::host::{Decoration, Range};

/// Output of a planning pass
#[derive(Debug)]
pub struct DecorationPlan {
    /// One decoration per attribution, in line order
    pub decorations: Vec<Decoration>,
    /// Styles referenced by the decorations, keyed by revision id
    pub styles: HashMap<String, VisualStyle>,
    /// Revision owning the highlighted line, if any
    pub highlighted: Option<String>,
}

/// Compute the full decoration list for a blame result
pub fn plan(
    blame: &BlameResult,
    highlighted_line: u32,
    classifier: &HeatClassifier,
) -> DecorationPlan {
    let styles = build_styles(&blame.revisions, classifier);
    let highlighted = blame.revision_at(highlighted_line).map(str::to_string);

    let mut decorations = Vec::with_capacity(blame.lines.len());
    let mut previous: Option<&str> = None;
    for attribution in &blame.lines {
        let style = styles.get(&attribution.revision_id);
        debug_assert!(
            style.is_some(),
            "attribution references unknown revision {}",
            attribution.revision_id
        );
        let Some(style) = style else {
            continue;
        };

        let mut classes = style.class_name().to_string();
        if highlighted.as_deref() == Some(attribution.revision_id.as_str()) {
            classes.push(' ');
            classes.push_str(HIGHLIGHT_CLASS);
        }
        if previous == Some(attribution.revision_id.as_str()) {
            classes.push(' ');
            classes.push_str(CONTINUATION_CLASS);
        }
        previous = Some(&attribution.revision_id);

        decorations.push(Decoration {
            range: Range::line_start(attribution.line),
            classes,
        });
    }

    DecorationPlan {
        decorations,
        styles,
        highlighted,
    }
}
