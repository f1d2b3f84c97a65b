//! Profile display formatting
//!
//! Renders an onboarding profile as a two-column table for terminal output.
//! Conditional fields are only listed while their governing flag is set.

use tabled::{settings::Style, Table, Tabled};

use crate::config::Settings;
use crate::models::{Choice, OnboardingProfile};
use crate::storage::SubmittedProfile;

#[derive(Tabled)]
struct ProfileRow {
    #[tabled(rename = "Field")]
    field: String,
    #[tabled(rename = "Value")]
    value: String,
}

fn row(field: &str, value: impl Into<String>) -> ProfileRow {
    ProfileRow {
        field: field.to_string(),
        value: value.into(),
    }
}

fn or_dash(value: &str) -> String {
    if value.trim().is_empty() {
        "-".to_string()
    } else {
        value.trim().to_string()
    }
}

fn choice_label<C: Choice>(choice: Option<C>) -> String {
    choice.map(|c| c.label().to_string()).unwrap_or_else(|| "-".to_string())
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Rows describing `profile`, in wizard order
fn profile_rows(profile: &OnboardingProfile, settings: &Settings) -> Vec<ProfileRow> {
    let mut rows = vec![
        row("Electricity provider", or_dash(&profile.electricity_provider)),
        row("Monthly bill", format_bill(profile, settings)),
        row("Solar panels", yes_no(profile.has_solar_panels)),
    ];

    if profile.shows_solar_details() {
        rows.push(row(
            "Solar capacity",
            unit(&profile.solar_capacity, "kW"),
        ));
        let installed = match profile.installation_date() {
            Some(date) => date.format(&settings.date_format).to_string(),
            None => or_dash(&profile.installation_date),
        };
        rows.push(row("Installation date", installed));
        rows.push(row("Battery storage", yes_no(profile.has_battery_storage)));
    }

    if profile.shows_storage_capacity() {
        rows.push(row(
            "Storage capacity",
            unit(&profile.storage_capacity, "kWh"),
        ));
    }

    let mut devices: Vec<String> = profile
        .smart_devices
        .owned()
        .iter()
        .map(ToString::to_string)
        .collect();
    if !profile.smart_devices.other.trim().is_empty() {
        devices.push(profile.smart_devices.other.trim().to_string());
    }
    rows.push(row(
        "Smart devices",
        if devices.is_empty() {
            "-".to_string()
        } else {
            devices.join(", ")
        },
    ));

    rows.push(row("Primary goal", choice_label(profile.primary_goal)));
    rows.push(row("Notifications", choice_label(profile.notification_method)));
    rows.push(row("Reports", choice_label(profile.report_frequency)));
    rows
}

fn format_bill(profile: &OnboardingProfile, settings: &Settings) -> String {
    match profile.monthly_bill_amount() {
        Some(amount) => format!("{}{:.2}", settings.currency_symbol, amount),
        None => or_dash(&profile.monthly_bill),
    }
}

fn unit(value: &str, unit: &str) -> String {
    if value.trim().is_empty() {
        "-".to_string()
    } else {
        format!("{} {}", value.trim(), unit)
    }
}

/// Format a profile as a table
pub fn format_profile(profile: &OnboardingProfile, settings: &Settings) -> String {
    Table::new(profile_rows(profile, settings))
        .with(Style::rounded())
        .to_string()
}

/// Format a stored submission: header line plus the profile table
pub fn format_submission(submission: &SubmittedProfile, settings: &Settings) -> String {
    format!(
        "Submission {} ({})\n{}",
        submission.id,
        submission.submitted_at.format("%Y-%m-%d %H:%M UTC"),
        format_profile(&submission.profile, settings)
    )
}

/// Plain `label: value` lines, for the TUI dashboard
pub fn profile_lines(profile: &OnboardingProfile, settings: &Settings) -> Vec<(String, String)> {
    profile_rows(profile, settings)
        .into_iter()
        .map(|r| (r.field, r.value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PrimaryGoal, SmartDevice};

    #[test]
    fn test_empty_profile_table() {
        let output = format_profile(&OnboardingProfile::new(), &Settings::default());
        assert!(output.contains("Electricity provider"));
        assert!(output.contains("Solar panels"));
        assert!(!output.contains("Solar capacity"));
        assert!(!output.contains("Storage capacity"));
    }

    #[test]
    fn test_solar_details_listed_when_enabled() {
        let mut profile = OnboardingProfile::new();
        profile.monthly_bill = "2500".into();
        profile.has_solar_panels = true;
        profile.solar_capacity = "3.5".into();
        profile.installation_date = "2023-04-15".into();
        profile.has_battery_storage = true;
        profile.storage_capacity = "10".into();

        let output = format_profile(&profile, &Settings::default());
        assert!(output.contains("₹2500.00"));
        assert!(output.contains("3.5 kW"));
        assert!(output.contains("15 Apr 2023"));
        assert!(output.contains("10 kWh"));
    }

    #[test]
    fn test_hidden_values_are_not_listed() {
        let mut profile = OnboardingProfile::new();
        profile.solar_capacity = "7".into();
        let lines = profile_lines(&profile, &Settings::default());
        assert!(lines.iter().all(|(field, _)| field != "Solar capacity"));
    }

    #[test]
    fn test_devices_and_choices() {
        let mut profile = OnboardingProfile::new();
        profile.smart_devices.set(SmartDevice::EvCharger, true);
        profile.smart_devices.other = "Heat pump".into();
        profile.primary_goal = Some(PrimaryGoal::ReduceBills);

        let lines = profile_lines(&profile, &Settings::default());
        let devices = lines.iter().find(|(f, _)| f == "Smart devices").unwrap();
        assert_eq!(devices.1, "EV charger, Heat pump");
        let goal = lines.iter().find(|(f, _)| f == "Primary goal").unwrap();
        assert_eq!(goal.1, "Reduce energy bills");
    }
}
