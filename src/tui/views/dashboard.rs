//! Dashboard view
//!
//! Shown after completion: the submission receipt and a profile summary.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table},
    Frame,
};

use crate::display::profile_lines;
use crate::tui::app::App;
use crate::tui::layout::form_area;

pub fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Your PrabhaWatt dashboard",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Onboarding complete. Here is what you told us.",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(Block::default().borders(Borders::BOTTOM));

    frame.render_widget(header, form_area(area, 90));
}

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let area = form_area(area, 90);

    let Some(submission) = &app.submission else {
        let empty = Paragraph::new("No submitted profile to show.")
            .block(Block::default().title(" Profile ").borders(Borders::ALL));
        frame.render_widget(empty, area);
        return;
    };

    let title = format!(
        " Submission {} · {} ",
        submission.receipt().short_id(),
        submission.submitted_at.format("%Y-%m-%d %H:%M UTC")
    );

    let rows: Vec<Row> = profile_lines(&submission.profile, &app.settings)
        .into_iter()
        .map(|(field, value)| {
            Row::new(vec![field, value]).style(Style::default().fg(Color::White))
        })
        .collect();

    let table = Table::new(rows, [Constraint::Length(24), Constraint::Min(20)])
        .header(
            Row::new(vec!["Field", "Value"])
                .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        )
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );

    frame.render_widget(table, area);
}
