//! Step 2: smart home integration

use std::io::{BufRead, Write};

use crate::error::OnboardResult;
use crate::models::{FieldValue, ProfileField, SmartDevice};
use crate::wizard::WizardController;

use super::super::prompt::Prompter;

pub struct SmartHomeStep;

impl SmartHomeStep {
    pub fn run<R: BufRead, W: Write>(
        prompter: &mut Prompter<R, W>,
        wizard: &mut WizardController,
    ) -> OnboardResult<()> {
        prompter.say("Which smart devices do you have?")?;
        for device in SmartDevice::ALL {
            let owned = wizard.profile().smart_devices.has(device);
            let answer = prompter.ask_yes_no(&format!("  {}?", device), owned)?;
            wizard.update_field(ProfileField::Device(device), answer.into())?;
        }

        let current = wizard.profile().smart_devices.other.clone();
        let prompt = if current.is_empty() {
            format!("{}: ", ProfileField::OtherDevices.label())
        } else {
            format!("{} [{}]: ", ProfileField::OtherDevices.label(), current)
        };
        let other = prompter.ask(&prompt)?;
        if !other.is_empty() {
            wizard.update_field(ProfileField::OtherDevices, FieldValue::Text(other))?;
        }

        Ok(())
    }
}
