//! Core data models for onboarding
//!
//! This module contains the data structures the wizard works on: the
//! profile record, its addressable fields, the step enum, and the closed
//! option sets for devices, goals and preferences.

pub mod choices;
pub mod devices;
pub mod field;
pub mod profile;
pub mod step;

pub use choices::{Choice, NotificationMethod, PrimaryGoal, ReportFrequency};
pub use devices::{SmartDevice, SmartDevices};
pub use field::{FieldKind, FieldValue, ProfileField};
pub use profile::OnboardingProfile;
pub use step::WizardStep;
