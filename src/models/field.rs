//! Addressable profile fields
//!
//! [`ProfileField`] names every scalar field of the profile so that front-ends
//! can update one field at a time; [`FieldValue`] carries the new value.

use std::fmt;
use std::str::FromStr;

use crate::error::OnboardError;

use super::devices::SmartDevice;

/// How a field is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text
    Text,
    /// Numeric text (digits and one decimal point)
    Number,
    /// `YYYY-MM-DD`
    Date,
    /// Yes/no
    Flag,
    /// One of a closed set of options
    Choice,
}

/// A scalar field of [`super::OnboardingProfile`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    ElectricityProvider,
    MonthlyBill,
    HasSolarPanels,
    SolarCapacity,
    InstallationDate,
    HasBatteryStorage,
    StorageCapacity,
    Device(SmartDevice),
    OtherDevices,
    PrimaryGoal,
    NotificationMethod,
    ReportFrequency,
}

impl ProfileField {
    /// Field name as it appears in the submitted record
    pub fn name(self) -> &'static str {
        match self {
            Self::ElectricityProvider => "electricityProvider",
            Self::MonthlyBill => "monthlyBill",
            Self::HasSolarPanels => "hasSolarPanels",
            Self::SolarCapacity => "solarCapacity",
            Self::InstallationDate => "installationDate",
            Self::HasBatteryStorage => "hasBatteryStorage",
            Self::StorageCapacity => "storageCapacity",
            Self::Device(SmartDevice::Thermostat) => "smartDevices.thermostat",
            Self::Device(SmartDevice::WashingMachine) => "smartDevices.washingMachine",
            Self::Device(SmartDevice::Dishwasher) => "smartDevices.dishwasher",
            Self::Device(SmartDevice::EvCharger) => "smartDevices.evCharger",
            Self::OtherDevices => "smartDevices.other",
            Self::PrimaryGoal => "primaryGoal",
            Self::NotificationMethod => "notificationMethod",
            Self::ReportFrequency => "reportFrequency",
        }
    }

    /// Prompt label shown next to the input
    pub fn label(self) -> String {
        match self {
            Self::ElectricityProvider => "Current electricity provider".into(),
            Self::MonthlyBill => "Average monthly electricity bill".into(),
            Self::HasSolarPanels => "Do you have solar panels?".into(),
            Self::SolarCapacity => "Solar system capacity (kW)".into(),
            Self::InstallationDate => "Installation date".into(),
            Self::HasBatteryStorage => "Do you have battery storage?".into(),
            Self::StorageCapacity => "Storage capacity (kWh)".into(),
            Self::Device(device) => device.to_string(),
            Self::OtherDevices => "Other devices (please specify)".into(),
            Self::PrimaryGoal => "Primary energy goal".into(),
            Self::NotificationMethod => "Preferred notification method".into(),
            Self::ReportFrequency => "Frequency of reports".into(),
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Self::ElectricityProvider | Self::OtherDevices => FieldKind::Text,
            Self::MonthlyBill | Self::SolarCapacity | Self::StorageCapacity => FieldKind::Number,
            Self::InstallationDate => FieldKind::Date,
            Self::HasSolarPanels | Self::HasBatteryStorage | Self::Device(_) => FieldKind::Flag,
            Self::PrimaryGoal | Self::NotificationMethod | Self::ReportFrequency => {
                FieldKind::Choice
            }
        }
    }

    /// Only the monthly bill is marked required
    pub fn is_required(self) -> bool {
        matches!(self, Self::MonthlyBill)
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ProfileField {
    type Err = OnboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let field = match s.trim() {
            "electricityProvider" => Self::ElectricityProvider,
            "monthlyBill" => Self::MonthlyBill,
            "hasSolarPanels" => Self::HasSolarPanels,
            "solarCapacity" => Self::SolarCapacity,
            "installationDate" => Self::InstallationDate,
            "hasBatteryStorage" => Self::HasBatteryStorage,
            "storageCapacity" => Self::StorageCapacity,
            "smartDevices.other" | "otherDevices" => Self::OtherDevices,
            "primaryGoal" => Self::PrimaryGoal,
            "notificationMethod" => Self::NotificationMethod,
            "reportFrequency" => Self::ReportFrequency,
            other => {
                let device_key = other.strip_prefix("smartDevices.").unwrap_or(other);
                match SmartDevice::parse(device_key) {
                    Some(device) => Self::Device(device),
                    None => {
                        return Err(OnboardError::Validation(format!(
                            "Unknown profile field: '{}'",
                            s
                        )))
                    }
                }
            }
        };
        Ok(field)
    }
}

/// A new value for a [`ProfileField`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_names() {
        assert_eq!("monthlyBill".parse::<ProfileField>().unwrap(), ProfileField::MonthlyBill);
        assert_eq!(
            "smartDevices.other".parse::<ProfileField>().unwrap(),
            ProfileField::OtherDevices
        );
        assert_eq!(
            "smartDevices.evCharger".parse::<ProfileField>().unwrap(),
            ProfileField::Device(SmartDevice::EvCharger)
        );
        assert!("favouriteColour".parse::<ProfileField>().is_err());
    }

    #[test]
    fn test_name_round_trips_through_parse() {
        let fields = [
            ProfileField::ElectricityProvider,
            ProfileField::InstallationDate,
            ProfileField::Device(SmartDevice::WashingMachine),
            ProfileField::ReportFrequency,
        ];
        for field in fields {
            assert_eq!(field.name().parse::<ProfileField>().unwrap(), field);
        }
    }

    #[test]
    fn test_kinds_and_required() {
        assert_eq!(ProfileField::MonthlyBill.kind(), FieldKind::Number);
        assert_eq!(ProfileField::HasBatteryStorage.kind(), FieldKind::Flag);
        assert_eq!(ProfileField::InstallationDate.kind(), FieldKind::Date);
        assert!(ProfileField::MonthlyBill.is_required());
        assert!(!ProfileField::SolarCapacity.is_required());
    }
}
