//! Event handler for the TUI
//!
//! Routes key events to the help dialog, the wizard step panel, or the
//! dashboard depending on the application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::FieldKind;

use super::app::{ActiveDialog, App, Screen};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Resize(_, _) | Event::Tick => {}
    }
    Ok(())
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Global keys
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('q') if ctrl => {
            app.quit();
            return;
        }
        KeyCode::F(1) => {
            app.open_dialog(ActiveDialog::Help);
            return;
        }
        _ => {}
    }

    if app.has_dialog() {
        app.close_dialog();
        return;
    }

    match app.screen {
        Screen::Wizard => handle_wizard_key(app, key, ctrl),
        Screen::Dashboard => handle_dashboard_key(app, key),
    }
}

fn handle_dashboard_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc | KeyCode::Enter => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        _ => {}
    }
}

fn handle_wizard_key(app: &mut App, key: KeyEvent, ctrl: bool) {
    let kind = app.focused_field().map(|f| f.kind());

    match key.code {
        // Step navigation
        KeyCode::Char('n') if ctrl => app.next_step(),
        KeyCode::Char('p') if ctrl => app.prev_step(),
        KeyCode::Enter | KeyCode::PageDown => app.next_step(),
        KeyCode::Esc | KeyCode::PageUp => app.prev_step(),

        // Field focus
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        KeyCode::Down => {
            if !app.move_suggestion(true) {
                app.focus_next();
            }
        }
        KeyCode::Up => {
            if !app.move_suggestion(false) {
                app.focus_prev();
            }
        }

        // Field values
        KeyCode::Left | KeyCode::Right => {
            let forward = key.code == KeyCode::Right;
            match kind {
                Some(FieldKind::Flag) => app.toggle_flag(),
                Some(FieldKind::Choice) => app.cycle_choice(forward),
                Some(_) if forward => app.editor.move_right(),
                Some(_) => app.editor.move_left(),
                None => {}
            }
        }
        KeyCode::Home => app.editor.move_start(),
        KeyCode::End => app.editor.move_end(),
        KeyCode::Backspace => app.edit(|input| input.backspace()),
        KeyCode::Delete => app.edit(|input| input.delete()),
        KeyCode::Char('?') if !app.is_editing_text() => app.open_dialog(ActiveDialog::Help),
        KeyCode::Char(c) if !ctrl => app.type_char(c),
        _ => {}
    }
}
