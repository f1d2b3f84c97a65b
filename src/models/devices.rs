//! Smart device flags
//!
//! The four fixed device kinds are addressed through [`SmartDevice`], never
//! through a string key.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A smart device the household may own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SmartDevice {
    Thermostat,
    WashingMachine,
    Dishwasher,
    EvCharger,
}

impl SmartDevice {
    /// All devices in display order
    pub const ALL: [SmartDevice; 4] = [
        SmartDevice::Thermostat,
        SmartDevice::WashingMachine,
        SmartDevice::Dishwasher,
        SmartDevice::EvCharger,
    ];

    /// Field key as it appears in the submitted record
    pub fn key(self) -> &'static str {
        match self {
            Self::Thermostat => "thermostat",
            Self::WashingMachine => "washingMachine",
            Self::Dishwasher => "dishwasher",
            Self::EvCharger => "evCharger",
        }
    }

    /// Parse a device from its key (case-insensitive, `_`/`-` tolerated)
    pub fn parse(s: &str) -> Option<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-' && *c != ' ')
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "thermostat" => Some(Self::Thermostat),
            "washingmachine" | "washer" => Some(Self::WashingMachine),
            "dishwasher" => Some(Self::Dishwasher),
            "evcharger" | "ev" => Some(Self::EvCharger),
            _ => None,
        }
    }
}

impl fmt::Display for SmartDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Thermostat => write!(f, "Smart thermostat"),
            Self::WashingMachine => write!(f, "Smart washing machine"),
            Self::Dishwasher => write!(f, "Smart dishwasher"),
            Self::EvCharger => write!(f, "EV charger"),
        }
    }
}

/// Owned smart devices: one flag per [`SmartDevice`] plus free text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartDevices {
    #[serde(default)]
    pub thermostat: bool,
    #[serde(default)]
    pub washing_machine: bool,
    #[serde(default)]
    pub dishwasher: bool,
    #[serde(default)]
    pub ev_charger: bool,
    /// Other devices, as typed by the user
    #[serde(default)]
    pub other: String,
}

impl SmartDevices {
    /// Whether a device is marked as owned
    pub fn has(&self, device: SmartDevice) -> bool {
        match device {
            SmartDevice::Thermostat => self.thermostat,
            SmartDevice::WashingMachine => self.washing_machine,
            SmartDevice::Dishwasher => self.dishwasher,
            SmartDevice::EvCharger => self.ev_charger,
        }
    }

    /// Set a device flag
    pub fn set(&mut self, device: SmartDevice, owned: bool) {
        *self.flag_mut(device) = owned;
    }

    /// Flip a device flag, returning the new value
    pub fn toggle(&mut self, device: SmartDevice) -> bool {
        let flag = self.flag_mut(device);
        *flag = !*flag;
        *flag
    }

    /// Devices currently marked as owned, in display order
    pub fn owned(&self) -> Vec<SmartDevice> {
        SmartDevice::ALL
            .into_iter()
            .filter(|d| self.has(*d))
            .collect()
    }

    fn flag_mut(&mut self, device: SmartDevice) -> &mut bool {
        match device {
            SmartDevice::Thermostat => &mut self.thermostat,
            SmartDevice::WashingMachine => &mut self.washing_machine,
            SmartDevice::Dishwasher => &mut self.dishwasher,
            SmartDevice::EvCharger => &mut self.ev_charger,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores() {
        let mut devices = SmartDevices::default();
        assert!(devices.toggle(SmartDevice::Thermostat));
        assert!(!devices.toggle(SmartDevice::Thermostat));
        assert_eq!(devices, SmartDevices::default());
    }

    #[test]
    fn test_flags_are_independent() {
        let mut devices = SmartDevices::default();
        devices.set(SmartDevice::EvCharger, true);
        devices.toggle(SmartDevice::Dishwasher);

        assert_eq!(
            devices.owned(),
            vec![SmartDevice::Dishwasher, SmartDevice::EvCharger]
        );
        assert!(!devices.has(SmartDevice::Thermostat));
    }

    #[test]
    fn test_parse_device_keys() {
        for device in SmartDevice::ALL {
            assert_eq!(SmartDevice::parse(device.key()), Some(device));
        }
        assert_eq!(SmartDevice::parse("ev_charger"), Some(SmartDevice::EvCharger));
        assert_eq!(SmartDevice::parse("toaster"), None);
    }

    #[test]
    fn test_serializes_with_record_keys() {
        let mut devices = SmartDevices::default();
        devices.washing_machine = true;
        let json = serde_json::to_value(&devices).unwrap();
        assert_eq!(json["washingMachine"], true);
        assert_eq!(json["evCharger"], false);
        assert_eq!(json["other"], "");
    }
}
