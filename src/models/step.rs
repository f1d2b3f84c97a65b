//! Wizard step model
//!
//! The four onboarding screens as a closed enum, so an out-of-range step
//! cannot be represented.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four sequential onboarding screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WizardStep {
    /// Provider, bill, solar and battery details
    EnergyProfile,
    /// Owned smart devices
    SmartHome,
    /// Primary energy goal
    EnergyGoals,
    /// Notification method and report frequency
    Preferences,
}

impl WizardStep {
    /// All steps in order
    pub const ALL: [WizardStep; 4] = [
        WizardStep::EnergyProfile,
        WizardStep::SmartHome,
        WizardStep::EnergyGoals,
        WizardStep::Preferences,
    ];

    /// The step a new wizard starts in
    pub const FIRST: WizardStep = WizardStep::EnergyProfile;

    /// The step that offers "Complete Setup"
    pub const LAST: WizardStep = WizardStep::Preferences;

    /// 1-based step number for display
    pub fn number(self) -> u8 {
        match self {
            Self::EnergyProfile => 1,
            Self::SmartHome => 2,
            Self::EnergyGoals => 3,
            Self::Preferences => 4,
        }
    }

    /// Total number of steps
    pub fn total() -> u8 {
        Self::ALL.len() as u8
    }

    /// The following step, if any
    pub fn next(self) -> Option<Self> {
        match self {
            Self::EnergyProfile => Some(Self::SmartHome),
            Self::SmartHome => Some(Self::EnergyGoals),
            Self::EnergyGoals => Some(Self::Preferences),
            Self::Preferences => None,
        }
    }

    /// The preceding step, if any
    pub fn prev(self) -> Option<Self> {
        match self {
            Self::EnergyProfile => None,
            Self::SmartHome => Some(Self::EnergyProfile),
            Self::EnergyGoals => Some(Self::SmartHome),
            Self::Preferences => Some(Self::EnergyGoals),
        }
    }

    /// Heading shown above the step panel
    pub fn title(self) -> &'static str {
        match self {
            Self::EnergyProfile => "Energy Profile",
            Self::SmartHome => "Smart Home Integration",
            Self::EnergyGoals => "Energy Goals",
            Self::Preferences => "Preferences",
        }
    }

    pub fn is_first(self) -> bool {
        self == Self::FIRST
    }

    pub fn is_last(self) -> bool {
        self == Self::LAST
    }
}

impl Default for WizardStep {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_are_one_based_and_ordered() {
        let numbers: Vec<u8> = WizardStep::ALL.iter().map(|s| s.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
        assert_eq!(WizardStep::total(), 4);
    }

    #[test]
    fn test_next_and_prev_are_inverse() {
        for step in WizardStep::ALL {
            if let Some(next) = step.next() {
                assert_eq!(next.number(), step.number() + 1);
                assert_eq!(next.prev(), Some(step));
            }
        }
        assert_eq!(WizardStep::Preferences.next(), None);
        assert_eq!(WizardStep::EnergyProfile.prev(), None);
    }

    #[test]
    fn test_first_and_last() {
        assert!(WizardStep::default().is_first());
        assert!(WizardStep::Preferences.is_last());
        assert_eq!(WizardStep::SmartHome.to_string(), "Smart Home Integration");
    }
}
