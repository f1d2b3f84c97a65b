//! Step 4: notification and report preferences

use std::io::{BufRead, Write};

use crate::error::OnboardResult;
use crate::models::ProfileField;
use crate::wizard::WizardController;

use super::super::prompt::Prompter;

pub struct PreferencesStep;

impl PreferencesStep {
    pub fn run<R: BufRead, W: Write>(
        prompter: &mut Prompter<R, W>,
        wizard: &mut WizardController,
    ) -> OnboardResult<()> {
        let method = prompter.ask_choice(
            &ProfileField::NotificationMethod.label(),
            wizard.profile().notification_method,
        )?;
        wizard.set_notification_method(method)?;

        let frequency = prompter.ask_choice(
            &ProfileField::ReportFrequency.label(),
            wizard.profile().report_frequency,
        )?;
        wizard.set_report_frequency(frequency)
    }
}
