//! Status bar view
//!
//! Shows the current step or route, the latest message, and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, Screen};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![];

    let location = match app.screen {
        Screen::Wizard => format!(" {} ", app.wizard.step().title()),
        Screen::Dashboard => format!(" {} ", app.settings.dashboard_path),
    };
    spans.push(Span::styled(
        location,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ));

    if let Some(ref error) = app.error_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(error.clone(), Style::default().fg(Color::Red)));
    } else if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(message.clone(), Style::default().fg(Color::Yellow)));
    }

    let hints = match app.screen {
        Screen::Wizard => " F1:Help  Ctrl-Q:Quit ",
        Screen::Dashboard => " ?:Help  q:Quit ",
    };

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
