//! Wizard controller
//!
//! Owns the current step and the profile being collected. Navigation never
//! validates; completion is only possible on the last step and hands the
//! profile to the submitter before opening the dashboard route.

use crate::error::{OnboardError, OnboardResult};
use crate::models::{
    FieldValue, NotificationMethod, OnboardingProfile, PrimaryGoal, ProfileField,
    ReportFrequency, SmartDevice, WizardStep,
};
use crate::submission::{Navigator, ProfileSubmitter, SubmissionReceipt};

use super::visibility::visible_fields;

/// Route opened after completion unless configured otherwise
pub const DEFAULT_DASHBOARD_PATH: &str = "/dashboard";

/// Outcome of a successful completion
#[derive(Debug, Clone)]
pub struct CompletedOnboarding {
    pub receipt: SubmissionReceipt,
    /// The profile as submitted; the controller no longer holds it
    pub profile: OnboardingProfile,
    /// Route the navigator was asked to open
    pub route: String,
}

/// The onboarding state machine
#[derive(Debug, Clone)]
pub struct WizardController {
    step: WizardStep,
    profile: OnboardingProfile,
    dashboard_path: String,
    finished: bool,
}

impl WizardController {
    /// Start a wizard on the first step with an empty profile
    pub fn new(dashboard_path: impl Into<String>) -> Self {
        Self {
            step: WizardStep::FIRST,
            profile: OnboardingProfile::new(),
            dashboard_path: dashboard_path.into(),
            finished: false,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn profile(&self) -> &OnboardingProfile {
        &self.profile
    }

    pub fn dashboard_path(&self) -> &str {
        &self.dashboard_path
    }

    /// Whether the profile has been handed off
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn can_advance(&self) -> bool {
        !self.finished && self.step.next().is_some()
    }

    pub fn can_retreat(&self) -> bool {
        !self.finished && self.step.prev().is_some()
    }

    /// "Complete Setup" is offered
    pub fn can_complete(&self) -> bool {
        !self.finished && self.step.is_last()
    }

    /// Move to the next step. Returns `false` (and stays put) on the last step.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        self.go_to(self.step.next())
    }

    /// Move to the previous step. Returns `false` (and stays put) on the first step.
    pub fn retreat(&mut self) -> bool {
        if !self.can_retreat() {
            return false;
        }
        self.go_to(self.step.prev())
    }

    fn go_to(&mut self, target: Option<WizardStep>) -> bool {
        match target {
            Some(step) => {
                tracing::debug!(from = %self.step, to = %step, "wizard step changed");
                self.step = step;
                true
            }
            None => false,
        }
    }

    /// Fields shown on the current step
    pub fn visible_fields(&self) -> Vec<ProfileField> {
        visible_fields(self.step, &self.profile)
    }

    /// Required fields that are still blank
    pub fn missing_required(&self) -> Vec<ProfileField> {
        self.profile.missing_required()
    }

    /// Fails with `MissingRequired` naming the first blank required field
    pub fn check_required(&self) -> OnboardResult<()> {
        match self.missing_required().first() {
            Some(field) => Err(OnboardError::MissingRequired {
                field: field.name(),
            }),
            None => Ok(()),
        }
    }

    /// Assign a single field
    pub fn update_field(&mut self, field: ProfileField, value: FieldValue) -> OnboardResult<()> {
        self.ensure_active()?;
        self.profile.apply(field, value)?;
        tracing::trace!(field = field.name(), "field updated");
        Ok(())
    }

    /// Flip a smart-device flag, returning its new value
    pub fn toggle_device(&mut self, device: SmartDevice) -> OnboardResult<bool> {
        self.ensure_active()?;
        Ok(self.profile.smart_devices.toggle(device))
    }

    pub fn set_provider(&mut self, provider: impl Into<String>) -> OnboardResult<()> {
        self.ensure_active()?;
        self.profile.electricity_provider = provider.into();
        Ok(())
    }

    pub fn set_primary_goal(&mut self, goal: Option<PrimaryGoal>) -> OnboardResult<()> {
        self.ensure_active()?;
        self.profile.primary_goal = goal;
        Ok(())
    }

    pub fn set_notification_method(
        &mut self,
        method: Option<NotificationMethod>,
    ) -> OnboardResult<()> {
        self.ensure_active()?;
        self.profile.notification_method = method;
        Ok(())
    }

    pub fn set_report_frequency(&mut self, frequency: Option<ReportFrequency>) -> OnboardResult<()> {
        self.ensure_active()?;
        self.profile.report_frequency = frequency;
        Ok(())
    }

    /// Submit the profile and open the dashboard.
    ///
    /// Only allowed on the last step. If the submitter fails nothing changes
    /// and the navigator is not called. Once the submitter succeeds the
    /// controller gives up the profile, even if navigation then fails.
    pub fn complete<S, N>(
        &mut self,
        submitter: &mut S,
        navigator: &mut N,
    ) -> OnboardResult<CompletedOnboarding>
    where
        S: ProfileSubmitter + ?Sized,
        N: Navigator + ?Sized,
    {
        self.ensure_active()?;
        if !self.step.is_last() {
            return Err(OnboardError::InvalidTransition {
                from: self.step.title(),
                action: "complete setup",
            });
        }

        let receipt = submitter.submit(&self.profile)?;
        tracing::info!(id = %receipt.id, "onboarding profile submitted");

        self.finished = true;
        let profile = std::mem::take(&mut self.profile);
        let route = self.dashboard_path.clone();

        navigator.navigate(&route)?;

        Ok(CompletedOnboarding {
            receipt,
            profile,
            route,
        })
    }

    fn ensure_active(&self) -> OnboardResult<()> {
        if self.finished {
            Err(OnboardError::WizardFinished)
        } else {
            Ok(())
        }
    }
}

impl Default for WizardController {
    fn default() -> Self {
        Self::new(DEFAULT_DASHBOARD_PATH)
    }
}
