//! Wizard step panel
//!
//! Renders the visible fields of the current step, one per line, with the
//! focused field highlighted and provider suggestions under the input.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::models::{
    Choice, FieldKind, NotificationMethod, OnboardingProfile, PrimaryGoal, ProfileField,
    ReportFrequency, WizardStep,
};
use crate::tui::app::App;
use crate::tui::layout::form_area;
use crate::tui::widgets::TextInput;

/// Widest the form is drawn
const FORM_WIDTH: u16 = 90;

/// Title and progress gauge
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let step = app.wizard.step();
    let ratio = f64::from(step.number()) / f64::from(WizardStep::total());

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Welcome to PrabhaWatt ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .gauge_style(Style::default().fg(Color::Green).bg(Color::Black))
        .ratio(ratio)
        .label(format!("Step {} of {}", step.number(), WizardStep::total()));

    frame.render_widget(gauge, form_area(area, FORM_WIDTH));
}

/// The step panel
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let step = app.wizard.step();
    let profile = app.wizard.profile();
    let suggestions = app.suggestions();

    let mut lines = vec![
        Line::from(Span::styled(
            "Let's personalize your energy management experience",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    for (index, field) in app.fields().into_iter().enumerate() {
        let focused = index == app.focus;
        lines.push(field_line(app, profile, field, focused));

        if field == ProfileField::ElectricityProvider && focused {
            for (i, name) in suggestions.iter().enumerate() {
                let selected = app.suggestion == Some(i);
                let style = if selected {
                    Style::default().fg(Color::Black).bg(Color::Cyan)
                } else {
                    Style::default().fg(Color::Gray)
                };
                lines.push(Line::from(vec![
                    Span::raw("      "),
                    Span::styled(format!(" {} ", name), style),
                ]));
            }
        }

        if let Some(hint) = choice_options(field, profile, focused) {
            lines.push(hint);
        }
    }

    let block = Block::default()
        .title(format!(" {} ", step.title()))
        .title_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    frame.render_widget(
        Paragraph::new(lines).block(block),
        form_area(area, FORM_WIDTH),
    );
}

fn field_line(
    app: &App,
    profile: &OnboardingProfile,
    field: ProfileField,
    focused: bool,
) -> Line<'static> {
    let marker = if focused { "▶ " } else { "  " };
    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let mut label = field.label();
    if field.is_required() {
        label.push_str(" *");
    }

    let mut spans = vec![
        Span::raw(marker),
        Span::styled(format!("{}: ", label), label_style),
    ];

    match field.kind() {
        FieldKind::Text | FieldKind::Number | FieldKind::Date => {
            if focused {
                spans.extend(app.editor.spans(true, ""));
            } else {
                let value = TextInput::with_content(profile.text_of(field));
                spans.extend(value.spans(false, placeholder(field)));
            }
        }
        FieldKind::Flag => {
            let checked = profile.flag_of(field).unwrap_or(false);
            let (mark, style) = if checked {
                ("[x]", Style::default().fg(Color::Green))
            } else {
                ("[ ]", Style::default().fg(Color::White))
            };
            spans.push(Span::styled(mark, style));
        }
        FieldKind::Choice => {
            let label = choice_label(field, profile).unwrap_or("Select an option");
            spans.push(Span::styled(
                format!("◀ {} ▶", label),
                Style::default().fg(Color::White),
            ));
        }
    }

    Line::from(spans)
}

fn placeholder(field: ProfileField) -> &'static str {
    match field {
        ProfileField::ElectricityProvider => "Start typing to search",
        ProfileField::MonthlyBill => "e.g. 2500",
        ProfileField::SolarCapacity => "e.g. 3.5",
        ProfileField::InstallationDate => "YYYY-MM-DD",
        ProfileField::StorageCapacity => "e.g. 10",
        ProfileField::OtherDevices => "Other devices",
        _ => "",
    }
}

fn choice_label(field: ProfileField, profile: &OnboardingProfile) -> Option<&'static str> {
    match field {
        ProfileField::PrimaryGoal => profile.primary_goal.map(Choice::label),
        ProfileField::NotificationMethod => profile.notification_method.map(Choice::label),
        ProfileField::ReportFrequency => profile.report_frequency.map(Choice::label),
        _ => None,
    }
}

/// Numbered options under a focused choice field
fn choice_options(
    field: ProfileField,
    profile: &OnboardingProfile,
    focused: bool,
) -> Option<Line<'static>> {
    if !focused {
        return None;
    }
    let labels: Vec<&'static str> = match field {
        ProfileField::PrimaryGoal => PrimaryGoal::OPTIONS.iter().map(|o| o.label()).collect(),
        ProfileField::NotificationMethod => {
            NotificationMethod::OPTIONS.iter().map(|o| o.label()).collect()
        }
        ProfileField::ReportFrequency => {
            ReportFrequency::OPTIONS.iter().map(|o| o.label()).collect()
        }
        _ => return None,
    };
    let current = choice_label(field, profile);

    let mut spans = vec![Span::raw("      ")];
    for (i, label) in labels.into_iter().enumerate() {
        let style = if Some(label) == current {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("{}. {}  ", i + 1, label), style));
    }
    Some(Line::from(spans))
}

/// Back / Next hints, mirroring the enabled navigation
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let enabled = Style::default().fg(Color::Cyan);
    let disabled = Style::default().fg(Color::DarkGray);

    let back_style = if app.wizard.can_retreat() { enabled } else { disabled };
    let forward = if app.wizard.can_complete() {
        "[Enter] Complete Setup"
    } else {
        "[Enter] Next"
    };

    let line = Line::from(vec![
        Span::styled(" [Esc] Back ", back_style),
        Span::raw("   "),
        Span::styled(forward, enabled.add_modifier(Modifier::BOLD)),
    ]);

    frame.render_widget(Paragraph::new(line), form_area(area, FORM_WIDTH));
}
