//! Help dialog
//!
//! Shows keyboard shortcuts for the current screen

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{App, Screen};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines(app.screen))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines(screen: Screen) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    match screen {
        Screen::Wizard => {
            lines.push(section("Steps"));
            lines.push(key_line("Enter / Ctrl-N", "Next step (Complete Setup on step 4)"));
            lines.push(key_line("Esc / Ctrl-P", "Previous step"));
            lines.push(Line::from(""));
            lines.push(section("Fields"));
            lines.push(key_line("Tab / Down", "Next field"));
            lines.push(key_line("Shift-Tab / Up", "Previous field"));
            lines.push(key_line("Space", "Toggle a yes/no field"));
            lines.push(key_line("Left / Right", "Change a choice"));
            lines.push(key_line("1-4", "Pick a choice by number"));
            lines.push(Line::from(""));
            lines.push(section("Provider"));
            lines.push(key_line("Up / Down", "Highlight a suggestion"));
            lines.push(key_line("Enter", "Use the highlighted provider"));
            lines.push(Line::from(""));
            lines.push(key_line("Ctrl-Q", "Quit without saving"));
        }
        Screen::Dashboard => {
            lines.push(section("Dashboard"));
            lines.push(key_line("q / Esc", "Quit"));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default().add_modifier(Modifier::BOLD).fg(Color::Yellow),
    )])
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>16}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_depends_on_screen() {
        let wizard = help_lines(Screen::Wizard);
        let dashboard = help_lines(Screen::Dashboard);
        assert!(wizard.len() > dashboard.len());
        assert!(wizard
            .iter()
            .any(|l| l.spans.iter().any(|s| s.content.contains("Complete Setup"))));
    }
}
