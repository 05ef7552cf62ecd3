//! Color theme definitions
//!
//! Centralized color constants for consistent viewer appearance.

use ratatui::style::Color;

use crate::style::HeatBucket;

/// Colors for the gutter annotation column
pub mod gutter {
    use super::*;

    /// Annotation text color
    pub const FG: Color = Color::Gray;
    /// Background for lines of the highlighted revision
    pub const HIGHLIGHT_BG: Color = Color::DarkGray;
    /// Continuation marker (↑) color
    pub const CONTINUATION: Color = Color::DarkGray;
}

/// Colors for the source text area
pub mod source {
    use super::*;

    /// Line number color
    pub const LINE_NUMBER: Color = Color::Gray;
    /// Selected line foreground
    pub const SELECTED_FG: Color = Color::White;
    /// Selected line background
    pub const SELECTED_BG: Color = Color::DarkGray;
}

/// Colors for the hover pane
pub mod hover {
    use super::*;

    /// Pane border color
    pub const BORDER: Color = Color::Cyan;
}

/// Terminal color for a heat bucket (warm ramp, newest brightest)
pub fn heat_color(bucket: HeatBucket) -> Color {
    match bucket {
        HeatBucket::Days2 => Color::Indexed(230),
        HeatBucket::Days5 => Color::Indexed(223),
        HeatBucket::Days10 => Color::Indexed(222),
        HeatBucket::Days15 => Color::Indexed(215),
        HeatBucket::Days60 => Color::Indexed(208),
        HeatBucket::Days180 => Color::Indexed(202),
        HeatBucket::Days365 => Color::Indexed(166),
        HeatBucket::Days720 => Color::Indexed(130),
        HeatBucket::Older => Color::Indexed(94),
    }
}
