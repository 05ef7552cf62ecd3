//! Decorated gutter view
//!
//! Renders each source line behind its blame decoration: the full
//! annotation on the first line of a hunk, a continuation marker on
//! following lines, a heat-colored border cell, and a highlight tint on
//! the revision under the cursor.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
};

use crate::engine::DecorationSession;
use crate::engine::host::Hover;
use crate::style::{CONTINUATION_CLASS, HIGHLIGHT_CLASS};
use crate::ui::surface::TerminalSurface;
use crate::ui::theme;

/// Constants for gutter display layout
mod layout {
    /// Width of the annotation text column
    pub const GUTTER_WIDTH: usize = crate::style::MAX_WIDTH;
    /// Width for line numbers
    pub const LINE_NUMBER_WIDTH: usize = 5;
}

/// View state for the decorated file display
#[derive(Debug, Clone)]
pub struct GutterView {
    /// Source lines of the displayed file
    lines: Vec<String>,
    /// Currently selected line index (0-based)
    selected_index: usize,
    /// Scroll offset for display
    scroll_offset: usize,
}

impl GutterView {
    /// Create a view over a file's content
    pub fn new(source: &str) -> Self {
        Self {
            lines: source.lines().map(str::to_string).collect(),
            selected_index: 0,
            scroll_offset: 0,
        }
    }

    /// Check if the view has no content
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of source lines
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Currently selected line (0-based)
    pub fn selected_line(&self) -> u32 {
        self.selected_index as u32
    }

    /// Move selection down
    pub fn move_down(&mut self) {
        if !self.lines.is_empty() && self.selected_index < self.lines.len() - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move to top
    pub fn move_to_top(&mut self) {
        self.selected_index = 0;
    }

    /// Move to bottom
    pub fn move_to_bottom(&mut self) {
        if !self.lines.is_empty() {
            self.selected_index = self.lines.len() - 1;
        }
    }

    /// Calculate scroll offset to keep selection visible
    fn calculate_scroll_offset(&self, visible_height: usize) -> usize {
        if visible_height == 0 {
            return 0;
        }

        let mut offset = self.scroll_offset;

        if self.selected_index < offset {
            offset = self.selected_index;
        } else if self.selected_index >= offset + visible_height {
            offset = self.selected_index - visible_height + 1;
        }

        offset
    }

    /// Render the decorated file
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        title: &str,
        surface: &TerminalSurface,
        session: Option<&DecorationSession>,
    ) {
        let block = Block::bordered().title(Line::from(format!(" Blame: {title} ")).bold().cyan());

        if self.is_empty() {
            let paragraph = Paragraph::new("No content to display")
                .dim()
                .centered()
                .block(block);
            frame.render_widget(paragraph, area);
            return;
        }

        let inner_height = area.height.saturating_sub(2) as usize;
        if inner_height == 0 {
            return;
        }

        let scroll_offset = self.calculate_scroll_offset(inner_height);

        let mut rendered: Vec<Line> = Vec::new();
        for (index, text) in self.lines.iter().enumerate().skip(scroll_offset) {
            if rendered.len() >= inner_height {
                break;
            }
            let is_selected = index == self.selected_index;
            rendered.push(self.build_line(index, text, surface, session, is_selected));
        }

        let paragraph = Paragraph::new(rendered).block(block);
        frame.render_widget(paragraph, area);
    }

    /// Build a single decorated line
    fn build_line(
        &self,
        index: usize,
        text: &str,
        surface: &TerminalSurface,
        session: Option<&DecorationSession>,
        is_selected: bool,
    ) -> Line<'static> {
        let mut spans = Vec::new();

        let decoration = surface.decoration_at(index as u32);
        let style = decoration
            .and_then(|d| session.and_then(|s| s.style_for_class(d.base_class())));

        match (decoration, style) {
            (Some(decoration), Some(style)) => {
                let highlighted = decoration.has_class(HIGHLIGHT_CLASS);
                let continuation = decoration.has_class(CONTINUATION_CLASS);

                let mut gutter_style = Style::default().fg(theme::gutter::FG);
                if highlighted {
                    gutter_style = gutter_style.bg(theme::gutter::HIGHLIGHT_BG);
                }

                if continuation {
                    // Repeated gutter text collapses to a marker
                    spans.push(Span::styled(
                        format!("{:>width$}", "↑", width = layout::GUTTER_WIDTH),
                        gutter_style.fg(theme::gutter::CONTINUATION),
                    ));
                } else {
                    spans.push(Span::styled(
                        format!("{:<width$}", style.content(), width = layout::GUTTER_WIDTH),
                        gutter_style,
                    ));
                }

                spans.push(Span::styled(
                    "▎",
                    Style::default().fg(theme::heat_color(style.heat())),
                ));
            }
            _ => {
                // Unattributed line (or no blame applied yet)
                spans.push(Span::raw(" ".repeat(layout::GUTTER_WIDTH)));
                spans.push(Span::raw(" "));
            }
        }

        spans.push(Span::styled(
            format!("{:>width$}: ", index + 1, width = layout::LINE_NUMBER_WIDTH),
            Style::default().fg(theme::source::LINE_NUMBER),
        ));
        spans.push(Span::raw(text.to_string()));

        let mut line = Line::from(spans);
        if is_selected {
            line = line.style(
                Style::default()
                    .fg(theme::source::SELECTED_FG)
                    .bg(theme::source::SELECTED_BG)
                    .add_modifier(Modifier::BOLD),
            );
        }
        line
    }

    /// Render the hover pane for the selected line
    pub fn render_hover(frame: &mut Frame, area: Rect, hover: &Hover) {
        let block = Block::bordered()
            .title(Line::from(" Commit ").bold())
            .border_style(Style::default().fg(theme::hover::BORDER));

        let paragraph = if hover.is_empty() {
            Paragraph::new("No commit information for this line")
                .dim()
                .block(block)
        } else {
            Paragraph::new(hover.contents.as_str())
                .wrap(Wrap { trim: false })
                .block(block)
        };
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_view() -> GutterView {
        GutterView::new("line 1\nline 2\nline 3\nline 4\n")
    }

    #[test]
    fn test_view_new() {
        let view = make_view();
        assert!(!view.is_empty());
        assert_eq!(view.line_count(), 4);
        assert_eq!(view.selected_line(), 0);

        let empty = GutterView::new("");
        assert!(empty.is_empty());
    }

    #[test]
    fn test_navigation() {
        let mut view = make_view();

        view.move_down();
        assert_eq!(view.selected_line(), 1);

        view.move_up();
        assert_eq!(view.selected_line(), 0);

        // Can't go above 0
        view.move_up();
        assert_eq!(view.selected_line(), 0);

        view.move_to_bottom();
        assert_eq!(view.selected_line(), 3);

        // Can't go below max
        view.move_down();
        assert_eq!(view.selected_line(), 3);

        view.move_to_top();
        assert_eq!(view.selected_line(), 0);
    }

    #[test]
    fn test_scroll_offset_follows_selection() {
        let mut view = GutterView::new(&"x\n".repeat(50));
        assert_eq!(view.calculate_scroll_offset(10), 0);

        view.move_to_bottom();
        assert_eq!(view.calculate_scroll_offset(10), 40);

        view.move_to_top();
        assert_eq!(view.calculate_scroll_offset(10), 0);
    }
}
