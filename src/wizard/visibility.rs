//! Which fields each step panel shows
//!
//! Computed from the profile on every call, so the profile stays the only
//! source of truth for conditional fields.

use crate::models::{OnboardingProfile, ProfileField, SmartDevice, WizardStep};

/// Every field a step can show, in panel order
pub fn step_fields(step: WizardStep) -> Vec<ProfileField> {
    match step {
        WizardStep::EnergyProfile => vec![
            ProfileField::ElectricityProvider,
            ProfileField::MonthlyBill,
            ProfileField::HasSolarPanels,
            ProfileField::SolarCapacity,
            ProfileField::InstallationDate,
            ProfileField::HasBatteryStorage,
            ProfileField::StorageCapacity,
        ],
        WizardStep::SmartHome => SmartDevice::ALL
            .into_iter()
            .map(ProfileField::Device)
            .chain(std::iter::once(ProfileField::OtherDevices))
            .collect(),
        WizardStep::EnergyGoals => vec![ProfileField::PrimaryGoal],
        WizardStep::Preferences => vec![
            ProfileField::NotificationMethod,
            ProfileField::ReportFrequency,
        ],
    }
}

/// Fields currently shown for `step`
pub fn visible_fields(step: WizardStep, profile: &OnboardingProfile) -> Vec<ProfileField> {
    step_fields(step)
        .into_iter()
        .filter(|f| profile.is_visible(*f))
        .collect()
}
