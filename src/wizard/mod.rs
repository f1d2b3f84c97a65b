//! Onboarding wizard state machine
//!
//! [`WizardController`] holds the current [`crate::models::WizardStep`] and
//! the [`crate::models::OnboardingProfile`]. Front-ends (`setup` for line
//! prompts, `tui` for the full-screen UI) drive it and render the fields
//! returned by [`visible_fields`].

pub mod controller;
pub mod visibility;

pub use controller::{CompletedOnboarding, WizardController, DEFAULT_DASHBOARD_PATH};
pub use visibility::{step_fields, visible_fields};
