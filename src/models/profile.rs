//! Onboarding profile model
//!
//! The record collected by the wizard. Conditional fields keep their values
//! while hidden; visibility is derived from the governing flags.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{OnboardError, OnboardResult};

use super::choices::{Choice, NotificationMethod, PrimaryGoal, ReportFrequency};
use super::devices::SmartDevices;
use super::field::{FieldValue, ProfileField};

/// Date format accepted for the installation date
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Everything the user entered during onboarding
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingProfile {
    /// Provider name (DISCOM)
    #[serde(default)]
    pub electricity_provider: String,

    /// Average monthly bill, as typed
    #[serde(default)]
    pub monthly_bill: String,

    #[serde(default)]
    pub has_solar_panels: bool,

    /// kW, as typed
    #[serde(default)]
    pub solar_capacity: String,

    /// `YYYY-MM-DD`, as typed
    #[serde(default)]
    pub installation_date: String,

    #[serde(default)]
    pub has_battery_storage: bool,

    /// kWh, as typed
    #[serde(default)]
    pub storage_capacity: String,

    #[serde(default)]
    pub smart_devices: SmartDevices,

    #[serde(default)]
    pub primary_goal: Option<PrimaryGoal>,

    #[serde(default)]
    pub notification_method: Option<NotificationMethod>,

    #[serde(default)]
    pub report_frequency: Option<ReportFrequency>,
}

impl OnboardingProfile {
    /// Create an empty profile
    pub fn new() -> Self {
        Self::default()
    }

    /// Solar capacity, installation date and battery questions are shown
    pub fn shows_solar_details(&self) -> bool {
        self.has_solar_panels
    }

    /// Storage capacity is shown
    pub fn shows_storage_capacity(&self) -> bool {
        self.has_solar_panels && self.has_battery_storage
    }

    /// Whether a field is currently shown, given the governing flags
    pub fn is_visible(&self, field: ProfileField) -> bool {
        match field {
            ProfileField::SolarCapacity
            | ProfileField::InstallationDate
            | ProfileField::HasBatteryStorage => self.shows_solar_details(),
            ProfileField::StorageCapacity => self.shows_storage_capacity(),
            _ => true,
        }
    }

    /// Assign one field. Leaves the record untouched on error.
    pub fn apply(&mut self, field: ProfileField, value: FieldValue) -> OnboardResult<()> {
        match (field, value) {
            (ProfileField::HasSolarPanels, FieldValue::Flag(v)) => self.has_solar_panels = v,
            (ProfileField::HasBatteryStorage, FieldValue::Flag(v)) => {
                self.has_battery_storage = v
            }
            (ProfileField::Device(device), FieldValue::Flag(v)) => {
                self.smart_devices.set(device, v)
            }
            (ProfileField::ElectricityProvider, FieldValue::Text(v)) => {
                self.electricity_provider = v
            }
            (ProfileField::MonthlyBill, FieldValue::Text(v)) => self.monthly_bill = v,
            (ProfileField::SolarCapacity, FieldValue::Text(v)) => self.solar_capacity = v,
            (ProfileField::InstallationDate, FieldValue::Text(v)) => self.installation_date = v,
            (ProfileField::StorageCapacity, FieldValue::Text(v)) => self.storage_capacity = v,
            (ProfileField::OtherDevices, FieldValue::Text(v)) => self.smart_devices.other = v,
            (ProfileField::PrimaryGoal, FieldValue::Text(v)) => {
                self.primary_goal = parse_choice(field, &v)?
            }
            (ProfileField::NotificationMethod, FieldValue::Text(v)) => {
                self.notification_method = parse_choice(field, &v)?
            }
            (ProfileField::ReportFrequency, FieldValue::Text(v)) => {
                self.report_frequency = parse_choice(field, &v)?
            }
            (field, FieldValue::Flag(_)) => {
                return Err(OnboardError::Validation(format!(
                    "Field '{}' expects text, not a yes/no value",
                    field
                )))
            }
            (field, FieldValue::Text(_)) => {
                return Err(OnboardError::Validation(format!(
                    "Field '{}' expects a yes/no value, not text",
                    field
                )))
            }
        }
        Ok(())
    }

    /// Current value of a field rendered as text (choices as their key)
    pub fn text_of(&self, field: ProfileField) -> String {
        match field {
            ProfileField::ElectricityProvider => self.electricity_provider.clone(),
            ProfileField::MonthlyBill => self.monthly_bill.clone(),
            ProfileField::SolarCapacity => self.solar_capacity.clone(),
            ProfileField::InstallationDate => self.installation_date.clone(),
            ProfileField::StorageCapacity => self.storage_capacity.clone(),
            ProfileField::OtherDevices => self.smart_devices.other.clone(),
            ProfileField::HasSolarPanels => yes_no(self.has_solar_panels).into(),
            ProfileField::HasBatteryStorage => yes_no(self.has_battery_storage).into(),
            ProfileField::Device(device) => yes_no(self.smart_devices.has(device)).into(),
            ProfileField::PrimaryGoal => choice_key(self.primary_goal),
            ProfileField::NotificationMethod => choice_key(self.notification_method),
            ProfileField::ReportFrequency => choice_key(self.report_frequency),
        }
    }

    /// Current value of a yes/no field
    pub fn flag_of(&self, field: ProfileField) -> Option<bool> {
        match field {
            ProfileField::HasSolarPanels => Some(self.has_solar_panels),
            ProfileField::HasBatteryStorage => Some(self.has_battery_storage),
            ProfileField::Device(device) => Some(self.smart_devices.has(device)),
            _ => None,
        }
    }

    /// Required fields that are still blank
    pub fn missing_required(&self) -> Vec<ProfileField> {
        let mut missing = Vec::new();
        if self.monthly_bill.trim().is_empty() {
            missing.push(ProfileField::MonthlyBill);
        }
        missing
    }

    /// Parsed monthly bill amount
    pub fn monthly_bill_amount(&self) -> Option<f64> {
        parse_number(&self.monthly_bill)
    }

    /// Parsed solar capacity in kW
    pub fn solar_capacity_kw(&self) -> Option<f64> {
        parse_number(&self.solar_capacity)
    }

    /// Parsed battery storage capacity in kWh
    pub fn storage_capacity_kwh(&self) -> Option<f64> {
        parse_number(&self.storage_capacity)
    }

    /// Parsed installation date
    pub fn installation_date(&self) -> Option<NaiveDate> {
        let raw = self.installation_date.trim();
        if raw.is_empty() {
            return None;
        }
        NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
    }
}

fn parse_choice<C: Choice>(field: ProfileField, raw: &str) -> OnboardResult<Option<C>> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    C::from_key(raw).map(Some).ok_or_else(|| {
        OnboardError::Validation(format!(
            "Invalid value '{}' for {}. Valid values: {}",
            raw,
            field,
            C::valid_keys()
        ))
    })
}

fn choice_key<C: Choice>(choice: Option<C>) -> String {
    choice.map(|c| c.key().to_string()).unwrap_or_default()
}

fn parse_number(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SmartDevice;

    #[test]
    fn test_new_profile_is_empty() {
        let profile = OnboardingProfile::new();
        assert!(profile.electricity_provider.is_empty());
        assert!(!profile.has_solar_panels);
        assert!(profile.primary_goal.is_none());
        assert_eq!(profile.missing_required(), vec![ProfileField::MonthlyBill]);
    }

    #[test]
    fn test_apply_text_and_flags() {
        let mut profile = OnboardingProfile::new();
        profile
            .apply(ProfileField::MonthlyBill, "2500".into())
            .unwrap();
        profile
            .apply(ProfileField::HasSolarPanels, true.into())
            .unwrap();
        profile
            .apply(ProfileField::Device(SmartDevice::Dishwasher), true.into())
            .unwrap();

        assert_eq!(profile.monthly_bill, "2500");
        assert!(profile.has_solar_panels);
        assert!(profile.smart_devices.dishwasher);
        assert!(profile.missing_required().is_empty());
    }

    #[test]
    fn test_apply_type_mismatch_is_rejected() {
        let mut profile = OnboardingProfile::new();
        let before = profile.clone();

        assert!(profile.apply(ProfileField::HasSolarPanels, "yes".into()).is_err());
        assert!(profile.apply(ProfileField::MonthlyBill, true.into()).is_err());
        assert_eq!(profile, before);
    }

    #[test]
    fn test_apply_choice_values() {
        let mut profile = OnboardingProfile::new();
        profile
            .apply(ProfileField::PrimaryGoal, "maximizeSolar".into())
            .unwrap();
        assert_eq!(profile.primary_goal, Some(PrimaryGoal::MaximizeSolar));

        let err = profile
            .apply(ProfileField::ReportFrequency, "hourly".into())
            .unwrap_err();
        assert!(err.is_validation());
        assert!(profile.report_frequency.is_none());

        profile.apply(ProfileField::PrimaryGoal, "".into()).unwrap();
        assert!(profile.primary_goal.is_none());
    }

    #[test]
    fn test_apply_choice_rejects_option_numbers() {
        let mut profile = OnboardingProfile::new();
        profile.notification_method = Some(NotificationMethod::Email);

        let err = profile
            .apply(ProfileField::PrimaryGoal, "2".into())
            .unwrap_err();
        assert!(err.is_validation());
        assert!(profile.primary_goal.is_none());

        assert!(profile
            .apply(ProfileField::NotificationMethod, "3".into())
            .is_err());
        assert_eq!(profile.notification_method, Some(NotificationMethod::Email));
    }

    #[test]
    fn test_storage_capacity_needs_both_flags() {
        let mut profile = OnboardingProfile::new();
        profile.has_battery_storage = true;
        assert!(!profile.shows_storage_capacity());
        assert!(!profile.is_visible(ProfileField::StorageCapacity));

        profile.has_solar_panels = true;
        assert!(profile.shows_storage_capacity());
        assert!(profile.is_visible(ProfileField::StorageCapacity));
    }

    #[test]
    fn test_parsed_helpers() {
        let mut profile = OnboardingProfile::new();
        profile.monthly_bill = " 2500.50 ".into();
        profile.solar_capacity = "abc".into();
        profile.installation_date = "2023-04-15".into();

        assert_eq!(profile.monthly_bill_amount(), Some(2500.5));
        assert_eq!(profile.solar_capacity_kw(), None);
        assert_eq!(profile.storage_capacity_kwh(), None);
        assert_eq!(
            profile.installation_date(),
            NaiveDate::from_ymd_opt(2023, 4, 15)
        );

        profile.installation_date = "15/04/2023".into();
        assert_eq!(profile.installation_date(), None);
    }

    #[test]
    fn test_serializes_record_shape() {
        let mut profile = OnboardingProfile::new();
        profile.notification_method = Some(NotificationMethod::Email);
        let json = serde_json::to_value(&profile).unwrap();

        assert_eq!(json["notificationMethod"], "email");
        assert!(json["reportFrequency"].is_null());
        assert_eq!(json["hasSolarPanels"], false);
        assert_eq!(json["smartDevices"]["thermostat"], false);
    }

    #[test]
    fn test_text_of_reports_current_values() {
        let mut profile = OnboardingProfile::new();
        profile.report_frequency = Some(ReportFrequency::Weekly);
        profile.smart_devices.other = "Heat pump".into();

        assert_eq!(profile.text_of(ProfileField::ReportFrequency), "weekly");
        assert_eq!(profile.text_of(ProfileField::OtherDevices), "Heat pump");
        assert_eq!(profile.text_of(ProfileField::HasSolarPanels), "no");
        assert_eq!(profile.flag_of(ProfileField::MonthlyBill), None);
    }
}
