//! Step 1: energy profile
//!
//! Provider (with suggestions from the catalog), monthly bill, and the solar
//! and battery questions. Capacity and date questions are only asked once
//! their governing answer is yes.

use std::io::{BufRead, Write};

use chrono::NaiveDate;

use crate::error::{OnboardError, OnboardResult};
use crate::models::{profile::DATE_FORMAT, FieldValue, ProfileField};
use crate::providers::ProviderCatalog;
use crate::wizard::WizardController;

use super::super::prompt::{with_current, Prompter};

/// How many catalog suggestions to offer at once
const SUGGESTION_LIMIT: usize = 5;

pub struct EnergyProfileStep;

impl EnergyProfileStep {
    pub fn run<R: BufRead, W: Write>(
        prompter: &mut Prompter<R, W>,
        wizard: &mut WizardController,
        catalog: &ProviderCatalog,
    ) -> OnboardResult<()> {
        let provider = ask_provider(prompter, catalog, &wizard.profile().electricity_provider)?;
        wizard.set_provider(provider)?;

        let bill = ask_bill(prompter, &wizard.profile().monthly_bill)?;
        wizard.update_field(ProfileField::MonthlyBill, FieldValue::Text(bill))?;

        let solar = prompter.ask_yes_no(
            &ProfileField::HasSolarPanels.label(),
            wizard.profile().has_solar_panels,
        )?;
        wizard.update_field(ProfileField::HasSolarPanels, solar.into())?;

        if wizard.profile().shows_solar_details() {
            let capacity = prompter.ask_number(
                &ProfileField::SolarCapacity.label(),
                &wizard.profile().solar_capacity,
            )?;
            wizard.update_field(ProfileField::SolarCapacity, capacity.into())?;

            let installed = ask_date(prompter, &wizard.profile().installation_date)?;
            wizard.update_field(ProfileField::InstallationDate, installed.into())?;

            let battery = prompter.ask_yes_no(
                &ProfileField::HasBatteryStorage.label(),
                wizard.profile().has_battery_storage,
            )?;
            wizard.update_field(ProfileField::HasBatteryStorage, battery.into())?;
        }

        if wizard.profile().shows_storage_capacity() {
            let storage = prompter.ask_number(
                &ProfileField::StorageCapacity.label(),
                &wizard.profile().storage_capacity,
            )?;
            wizard.update_field(ProfileField::StorageCapacity, storage.into())?;
        }

        Ok(())
    }
}

/// Free-text provider with catalog suggestions. An exact catalog match is
/// taken as-is; otherwise the user picks a suggestion or keeps their text.
fn ask_provider<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    catalog: &ProviderCatalog,
    current: &str,
) -> OnboardResult<String> {
    let prompt = if current.is_empty() {
        format!(
            "{} (type to search, blank to skip): ",
            ProfileField::ElectricityProvider.label()
        )
    } else {
        with_current(&ProfileField::ElectricityProvider.label(), current)
    };

    let query = prompter.ask(&prompt)?;
    if query.is_empty() {
        return Ok(current.to_string());
    }
    if let Some(exact) = catalog.find(&query) {
        return Ok(exact.to_string());
    }

    let suggestions = catalog.suggest(&query, SUGGESTION_LIMIT);
    if suggestions.is_empty() {
        prompter.say(format!(
            "No listed provider matches '{}'; keeping it as typed.",
            query
        ))?;
        return Ok(query);
    }

    prompter.say("Did you mean:")?;
    for (i, name) in suggestions.iter().enumerate() {
        prompter.say(format!("  {}. {}", i + 1, name))?;
    }
    loop {
        let answer = prompter.ask(&format!(
            "Select 1-{} (blank keeps '{}'): ",
            suggestions.len(),
            query
        ))?;
        if answer.is_empty() {
            return Ok(query);
        }
        match answer.parse::<usize>() {
            Ok(n) if (1..=suggestions.len()).contains(&n) => {
                return Ok(suggestions[n - 1].to_string())
            }
            _ => prompter.say("Not one of the listed numbers.")?,
        }
    }
}

/// The bill is required: it is asked again until it holds a number
fn ask_bill<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    current: &str,
) -> OnboardResult<String> {
    let label = format!("{} (₹)", ProfileField::MonthlyBill.label());
    loop {
        let answer = prompter.ask_number(&label, current)?;
        if !answer.is_empty() {
            return Ok(answer);
        }
        let missing = OnboardError::MissingRequired {
            field: ProfileField::MonthlyBill.name(),
        };
        prompter.say(missing.to_string())?;
    }
}

fn ask_date<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    current: &str,
) -> OnboardResult<String> {
    let label = format!("{} (YYYY-MM-DD)", ProfileField::InstallationDate.label());
    let prompt = with_current(&label, current);
    loop {
        let answer = prompter.ask(&prompt)?;
        if answer.is_empty() {
            return Ok(current.to_string());
        }
        if NaiveDate::parse_from_str(&answer, DATE_FORMAT).is_ok() {
            return Ok(answer);
        }
        prompter.say("Please use the YYYY-MM-DD format, e.g. 2023-04-15.")?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn catalog() -> ProviderCatalog {
        ProviderCatalog::new(vec![
            "BSES Rajdhani".into(),
            "BSES Yamuna".into(),
            "Tata Power-DDL".into(),
        ])
    }

    fn run(input: &str) -> (WizardController, String) {
        let mut prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let mut wizard = WizardController::default();
        EnergyProfileStep::run(&mut prompter, &mut wizard, &catalog()).unwrap();
        let out = String::from_utf8(prompter.into_output()).unwrap();
        (wizard, out)
    }

    #[test]
    fn test_minimal_answers_skip_solar_details() {
        let (wizard, out) = run("\n\n1800\n\n");
        let profile = wizard.profile();
        assert_eq!(profile.electricity_provider, "");
        assert_eq!(profile.monthly_bill, "1800");
        assert!(!profile.has_solar_panels);
        assert!(out.contains("Required field missing: monthlyBill"));
        assert!(!out.contains("Solar system capacity"));
    }

    #[test]
    fn test_provider_picked_from_suggestions() {
        let (wizard, _) = run("bses\n2\n2500\nn\n");
        assert_eq!(wizard.profile().electricity_provider, "BSES Yamuna");
    }

    #[test]
    fn test_exact_provider_match_is_canonicalised() {
        let (wizard, _) = run("tata power-ddl\n2500\nn\n");
        assert_eq!(wizard.profile().electricity_provider, "Tata Power-DDL");
    }

    #[test]
    fn test_solar_and_battery_details() {
        let (wizard, out) = run("\n3000\ny\n4.5\n15/04/2023\n2023-04-15\ny\n10\n");
        let profile = wizard.profile();
        assert!(profile.has_solar_panels);
        assert_eq!(profile.solar_capacity, "4.5");
        assert_eq!(profile.installation_date, "2023-04-15");
        assert!(profile.has_battery_storage);
        assert_eq!(profile.storage_capacity, "10");
        assert!(out.contains("YYYY-MM-DD format"));
    }
}
