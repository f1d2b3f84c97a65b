//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::config::{OnboardPaths, Settings};
use crate::providers::ProviderCatalog;
use crate::storage::{ProfileStore, SubmittedProfile};

use super::app::App;
use super::event::{Event, EventHandler};
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the full-screen wizard.
///
/// With `existing` the app opens on the dashboard for that submission.
/// Returns the submission shown when the user quit, if any.
pub fn run_tui(
    settings: Settings,
    paths: &OnboardPaths,
    catalog: &ProviderCatalog,
    existing: Option<SubmittedProfile>,
) -> Result<Option<SubmittedProfile>> {
    let store = Box::new(ProfileStore::new(paths));
    let mut app = match existing {
        Some(submission) => App::resume(settings, paths, catalog, store, submission),
        None => App::new(settings, paths, catalog, store),
    };

    let mut terminal = init_terminal()?;
    let outcome = event_loop(&mut terminal, &mut app);
    restore_terminal()?;
    outcome?;

    Ok(app.submission)
}

fn event_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let events = EventHandler::default();

    while !app.should_quit {
        terminal.draw(|frame| super::views::render(frame, app))?;

        match events.next()? {
            Event::Key(key) => handle_event(app, Event::Key(key))?,
            Event::Resize(_, _) | Event::Tick => {}
        }
    }

    Ok(())
}
