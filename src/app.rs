//! Viewer application state and logic
//!
//! Wires the engine to the terminal host: cursor movement re-applies
//! the blame with the new highlighted line (a no-op while the cursor
//! stays inside one revision's hunk), `r` re-fetches through the
//! token-guarded path, and `Enter` shows the selected commit through
//! git's own pager.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Line;

use crate::engine::BlameEngine;
use crate::engine::host::{EditorSurface, NoHover, SurfaceId};
use crate::git::{GitError, GitExecutor};
use crate::model::BlameResult;
use crate::ui::{GutterView, TerminalSurface};

/// Height of the hover pane when visible
const HOVER_PANE_HEIGHT: u16 = 8;

/// Key hints shown in the message line
const KEY_HINTS: &str = "j/k move · h hover · Enter show commit · r refresh · q quit";

/// The main application state
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// File being displayed (repository-relative)
    file_path: String,
    /// Revision the blame was taken at (None = working tree)
    revision: Option<String>,
    /// git executor
    git: GitExecutor,
    /// Decoration engine
    engine: BlameEngine,
    /// Terminal editor surface
    surface: TerminalSurface,
    /// Latest fetched blame result
    blame: BlameResult,
    /// Decorated file view
    view: GutterView,
    /// Hover pane visibility (h key toggle)
    hover_visible: bool,
    /// Error message to display
    pub error_message: Option<String>,
    /// Status message to display
    status_message: Option<String>,
}

impl App {
    /// Construct the app: read the file and fetch its blame
    pub fn new(file_path: &str, revision: Option<&str>) -> Result<Self, GitError> {
        let git = GitExecutor::new();
        let source = git.file_content(file_path, revision)?;
        let blame = git.blame_file(file_path, revision)?;

        let mut app = Self {
            running: true,
            file_path: file_path.to_string(),
            revision: revision.map(str::to_string),
            git,
            engine: BlameEngine::new(Box::new(NoHover)),
            surface: TerminalSurface::new(SurfaceId::new(file_path)),
            blame,
            view: GutterView::new(&source),
            hover_visible: false,
            error_message: None,
            status_message: None,
        };
        app.apply_highlight();
        Ok(app)
    }

    /// Handle key events
    pub fn on_key_event(&mut self, key: KeyEvent) {
        // Clear transient messages on any key press
        self.error_message = None;
        self.status_message = None;

        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        {
            self.quit();
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Char('j') | KeyCode::Down => {
                self.view.move_down();
                self.apply_highlight();
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.view.move_up();
                self.apply_highlight();
            }
            KeyCode::Char('g') => {
                self.view.move_to_top();
                self.apply_highlight();
            }
            KeyCode::Char('G') => {
                self.view.move_to_bottom();
                self.apply_highlight();
            }
            KeyCode::Char('h') => self.hover_visible = !self.hover_visible,
            KeyCode::Char('r') => self.refresh(),
            KeyCode::Enter => self.show_selected_commit(),
            _ => {}
        }
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Re-apply the blame with the current cursor line highlighted
    fn apply_highlight(&mut self) {
        let line = self.view.selected_line();
        self.engine
            .apply_blame(&mut self.surface, self.blame.clone(), line);
    }

    /// Re-fetch the blame through the token-guarded path
    fn refresh(&mut self) {
        let token = self.engine.begin_fetch(self.surface.id());
        match self.git.blame_file(&self.file_path, self.revision.as_deref()) {
            Ok(blame) => {
                self.blame = blame.clone();
                let line = self.view.selected_line();
                self.engine
                    .apply_fetched(&mut self.surface, token, blame, line);
                self.status_message = Some("Refreshed".to_string());
            }
            Err(e) => {
                self.error_message = Some(format!("git error: {e}"));
            }
        }
    }

    /// Show the selected line's commit with `git show` (inherited stdio)
    fn show_selected_commit(&mut self) {
        let Some(revision) = self
            .blame
            .revision_at(self.view.selected_line())
            .map(str::to_string)
        else {
            return;
        };

        use crossterm::execute;
        use crossterm::terminal::{
            Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
            enable_raw_mode,
        };
        use std::io::stdout;

        let _ = disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen, Clear(ClearType::All));

        // Scope guard to ensure terminal restoration
        let _guard = scopeguard::guard((), |_| {
            let _ = enable_raw_mode();
            let _ = execute!(stdout(), EnterAlternateScreen);
        });

        match self.git.show_interactive(&revision) {
            Ok(status) if status.success() => {}
            Ok(status) => {
                self.error_message = Some(format!("git show exited with {status}"));
            }
            Err(e) => {
                self.error_message = Some(format!("Failed to run git show: {e}"));
            }
        }
    }

    /// Render the application
    pub fn render(&self, frame: &mut Frame) {
        let hover_height = if self.hover_visible {
            HOVER_PANE_HEIGHT
        } else {
            0
        };
        let [main_area, hover_area, message_area] = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(hover_height),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        self.view.render(
            frame,
            main_area,
            &self.file_path,
            &self.surface,
            self.engine.session(self.surface.id()),
        );

        if self.hover_visible {
            let hover = self
                .engine
                .resolve_hover(self.surface.id(), self.view.selected_line());
            GutterView::render_hover(frame, hover_area, &hover);
        }

        let (message, color) = match (&self.error_message, &self.status_message) {
            (Some(error), _) => (error.as_str(), Color::Red),
            (None, Some(status)) => (status.as_str(), Color::Green),
            (None, None) => (KEY_HINTS, Color::DarkGray),
        };
        frame.render_widget(
            Line::from(message).style(Style::default().fg(color)),
            message_area,
        );
    }
}
