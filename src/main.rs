//! Blameline - terminal blame viewer
//!
//! Binary entry point for the decorated gutter viewer.

use std::process::exit;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use blameline::app::App;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let mut args = std::env::args().skip(1);
    let Some(file_path) = args.next() else {
        eprintln!("Usage: blameline <file> [revision]");
        exit(2);
    };
    let revision = args.next();

    // Resolve file and blame before touching the terminal so errors
    // print normally
    let app = match App::new(&file_path, revision.as_deref()) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("blameline: {e}");
            exit(1);
        }
    };

    let terminal = ratatui::init();
    let result = run(terminal, app);
    ratatui::restore();
    result
}

/// Run the application's main loop.
fn run(mut terminal: DefaultTerminal, mut app: App) -> color_eyre::Result<()> {
    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        handle_events(&mut app)?;
    }

    Ok(())
}

/// Handle crossterm events.
///
/// Uses poll with a 200ms timeout so resizes repaint promptly even when
/// no key arrives.
fn handle_events(app: &mut App) -> color_eyre::Result<()> {
    if event::poll(Duration::from_millis(200))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.on_key_event(key);
            }
            _ => {}
        }
    }
    Ok(())
}
