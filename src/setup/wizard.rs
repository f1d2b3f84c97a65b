//! Setup wizard orchestration
//!
//! Runs the four onboarding steps as line prompts. After each step the user
//! moves on, goes back, or quits; on the last step they complete setup,
//! which saves the profile and announces the dashboard route.

use std::io::{self, BufRead, Write};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::{OnboardPaths, Settings};
use crate::display::format_profile;
use crate::error::{OnboardError, OnboardResult};
use crate::models::WizardStep;
use crate::providers::ProviderCatalog;
use crate::storage::ProfileStore;
use crate::submission::{ConsoleNavigator, ProfileSubmitter};
use crate::wizard::{CompletedOnboarding, WizardController};

use super::prompt::Prompter;
use super::steps::{EnergyGoalsStep, EnergyProfileStep, PreferencesStep, SmartHomeStep};

/// Result of running the setup wizard
#[derive(Debug)]
pub struct SetupResult {
    /// Whether the profile was submitted
    pub completed: bool,
    /// The submission, unless setup was cancelled or navigation failed
    pub onboarding: Option<CompletedOnboarding>,
}

impl SetupResult {
    fn cancelled() -> Self {
        Self {
            completed: false,
            onboarding: None,
        }
    }
}

/// What the user chose at the end of a step
enum StepAction {
    Next,
    Back,
    Complete,
}

/// The line-prompt onboarding wizard
pub struct SetupWizard {
    paths: OnboardPaths,
}

impl SetupWizard {
    pub fn new(paths: OnboardPaths) -> Self {
        Self { paths }
    }

    /// Check if onboarding is still needed
    pub fn needs_setup(&self, settings: &Settings) -> bool {
        settings.needs_onboarding()
    }

    /// Run on stdin/stdout, saving to the standard profile file
    pub fn run(&self, settings: &mut Settings) -> OnboardResult<SetupResult> {
        let catalog = ProviderCatalog::load(settings)?;
        let mut store = ProfileStore::new(&self.paths);
        let stdin = io::stdin();
        let prompter = Prompter::new(stdin.lock(), io::stdout());
        self.run_with(settings, &catalog, &mut store, prompter)
    }

    /// Run against any input, output and submitter
    pub fn run_with<R, W, S>(
        &self,
        settings: &mut Settings,
        catalog: &ProviderCatalog,
        submitter: &mut S,
        mut prompter: Prompter<R, W>,
    ) -> OnboardResult<SetupResult>
    where
        R: BufRead,
        W: Write,
        S: ProfileSubmitter + ?Sized,
    {
        let audit = AuditLogger::new(self.paths.audit_log());
        let mut wizard = WizardController::new(settings.dashboard_path.clone());
        audit.record(&AuditEntry::started("prompt"));

        match self.drive(&mut prompter, &mut wizard, &audit, settings, catalog, submitter) {
            Ok(result) => Ok(result),
            Err(OnboardError::Cancelled) => {
                audit.record(&AuditEntry::abandoned(wizard.step()));
                tracing::info!(step = %wizard.step(), "setup cancelled");
                prompter.say("")?;
                prompter.say("Setup cancelled. Nothing was saved.")?;
                Ok(SetupResult::cancelled())
            }
            Err(e) => Err(e),
        }
    }

    fn drive<R, W, S>(
        &self,
        prompter: &mut Prompter<R, W>,
        wizard: &mut WizardController,
        audit: &AuditLogger,
        settings: &mut Settings,
        catalog: &ProviderCatalog,
        submitter: &mut S,
    ) -> OnboardResult<SetupResult>
    where
        R: BufRead,
        W: Write,
        S: ProfileSubmitter + ?Sized,
    {
        prompter.heading("Welcome to PrabhaWatt")?;
        prompter.say("Let's personalize your energy management experience.")?;
        prompter.say("Answer a few questions in four short steps. Blank keeps the value shown.")?;
        prompter.say("")?;

        if !prompter.ask_yes_no("Ready to begin?", true)? {
            return Err(OnboardError::Cancelled);
        }

        loop {
            let step = wizard.step();
            prompter.heading(&format!(
                "Step {} of {}: {}",
                step.number(),
                WizardStep::total(),
                step.title()
            ))?;

            match step {
                WizardStep::EnergyProfile => EnergyProfileStep::run(prompter, wizard, catalog)?,
                WizardStep::SmartHome => SmartHomeStep::run(prompter, wizard)?,
                WizardStep::EnergyGoals => EnergyGoalsStep::run(prompter, wizard)?,
                WizardStep::Preferences => PreferencesStep::run(prompter, wizard)?,
            }

            if step.is_last() {
                prompter.heading("Summary")?;
                prompter.say(format_profile(wizard.profile(), settings))?;
            }

            match ask_action(prompter, step)? {
                StepAction::Next => {
                    if wizard.advance() {
                        audit.record(&AuditEntry::step_changed(step, wizard.step()));
                    }
                }
                StepAction::Back => {
                    if wizard.retreat() {
                        audit.record(&AuditEntry::step_changed(step, wizard.step()));
                    } else {
                        prompter.say("Already on the first step.")?;
                    }
                }
                StepAction::Complete => {
                    let outcome = self.complete(prompter, wizard, audit, settings, submitter)?;
                    if let Some(result) = outcome {
                        return Ok(result);
                    }
                }
            }
        }
    }

    /// Submit and announce the dashboard. `None` means the submission failed
    /// and the user stays on the last step.
    fn complete<R, W, S>(
        &self,
        prompter: &mut Prompter<R, W>,
        wizard: &mut WizardController,
        audit: &AuditLogger,
        settings: &mut Settings,
        submitter: &mut S,
    ) -> OnboardResult<Option<SetupResult>>
    where
        R: BufRead,
        W: Write,
        S: ProfileSubmitter + ?Sized,
    {
        let outcome = {
            let mut navigator = ConsoleNavigator::new(prompter.output_mut());
            wizard.complete(submitter, &mut navigator)
        };

        let onboarding = match outcome {
            Ok(done) => Some(done),
            Err(e) if wizard.is_finished() => {
                tracing::warn!(error = %e, "profile saved but the dashboard could not be opened");
                prompter.say(format!("Your profile was saved, but: {}", e))?;
                None
            }
            Err(e) => {
                audit.record(&AuditEntry::submission_failed(wizard.step(), &e));
                tracing::error!(error = %e, "profile submission failed");
                prompter.say(format!("Could not save your profile: {}", e))?;
                prompter.say("Your answers are kept; review them and try again.")?;
                return Ok(None);
            }
        };

        settings.mark_onboarded(&self.paths)?;

        prompter.say("")?;
        prompter.say("Setup complete!")?;
        prompter.say("")?;
        prompter.say("Next steps:")?;
        prompter.say("  - Run 'prabhawatt profile show' to review your profile")?;
        prompter.say("  - Run 'prabhawatt profile export' to save a copy")?;
        prompter.say("")?;

        Ok(Some(SetupResult {
            completed: true,
            onboarding,
        }))
    }
}

fn ask_action<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    step: WizardStep,
) -> OnboardResult<StepAction> {
    let prompt = if step.is_last() {
        "Complete setup? ([y]es / [b]ack / [q]uit) [yes]: "
    } else {
        "Continue? ([n]ext / [b]ack / [q]uit) [next]: "
    };

    loop {
        let answer = prompter.ask(prompt)?.to_lowercase();
        match (answer.as_str(), step.is_last()) {
            ("" | "y" | "yes", true) => return Ok(StepAction::Complete),
            ("" | "n" | "next", false) => return Ok(StepAction::Next),
            ("b" | "back", _) => return Ok(StepAction::Back),
            ("q" | "quit", _) => return Err(OnboardError::Cancelled),
            _ => prompter.say("Please choose one of the options shown.")?,
        }
    }
}
