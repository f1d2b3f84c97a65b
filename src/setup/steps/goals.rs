//! Step 3: energy goals

use std::io::{BufRead, Write};

use crate::error::OnboardResult;
use crate::models::ProfileField;
use crate::wizard::WizardController;

use super::super::prompt::Prompter;

pub struct EnergyGoalsStep;

impl EnergyGoalsStep {
    pub fn run<R: BufRead, W: Write>(
        prompter: &mut Prompter<R, W>,
        wizard: &mut WizardController,
    ) -> OnboardResult<()> {
        let goal = prompter.ask_choice(
            &ProfileField::PrimaryGoal.label(),
            wizard.profile().primary_goal,
        )?;
        wizard.set_primary_goal(goal)
    }
}
