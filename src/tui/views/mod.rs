//! TUI Views module
//!
//! The wizard step panel, the post-onboarding dashboard, and the status bar.

pub mod dashboard;
pub mod status_bar;
pub mod wizard;

use ratatui::Frame;

use super::app::{ActiveDialog, App, Screen};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    match app.screen {
        Screen::Wizard => {
            wizard::render_header(frame, app, layout.header);
            wizard::render(frame, app, layout.main);
            wizard::render_footer(frame, app, layout.footer);
        }
        Screen::Dashboard => {
            dashboard::render_header(frame, layout.header);
            dashboard::render(frame, app, layout.main);
        }
    }

    status_bar::render(frame, app, layout.status_bar);

    if app.active_dialog == ActiveDialog::Help {
        dialogs::help::render(frame, app);
    }
}
