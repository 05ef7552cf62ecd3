//! Presentation logic for blame annotations
//!
//! Pure building blocks: commit-age heat classification, fixed-width
//! gutter text formatting, relative time strings, and the per-revision
//! style cache composed from them.

mod cache;
mod content;
mod heat;
mod relative;

pub use cache::{
    CONTINUATION_CLASS, HIGHLIGHT_CLASS, VisualStyle, build_styles, continuation_css_rule, gutter,
    highlight_css_rule,
};
pub use content::{FILLER, MAX_WIDTH, format_content_line};
pub use heat::{HeatBucket, HeatClassifier};
pub use relative::relative_time;
