//! YAML export

use std::io::Write;

use crate::error::{OnboardError, OnboardResult};
use crate::storage::SubmittedProfile;

/// Write the submission as YAML with a short comment header
pub fn export_yaml<W: Write>(submission: &SubmittedProfile, writer: &mut W) -> OnboardResult<()> {
    let export_err = |e: std::io::Error| OnboardError::Export(e.to_string());

    writeln!(writer, "# PrabhaWatt onboarding profile").map_err(export_err)?;
    writeln!(writer, "# Submitted: {}", submission.submitted_at.to_rfc3339()).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, submission).map_err(|e| OnboardError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OnboardingProfile, PrimaryGoal};
    use crate::submission::SubmissionReceipt;

    #[test]
    fn test_yaml_export_round_trips() {
        let receipt = SubmissionReceipt::new();
        let mut profile = OnboardingProfile::new();
        profile.primary_goal = Some(PrimaryGoal::GridStability);
        profile.smart_devices.thermostat = true;
        let submission = SubmittedProfile {
            id: receipt.id,
            submitted_at: receipt.submitted_at,
            profile,
        };

        let mut buffer = Vec::new();
        export_yaml(&submission, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("# PrabhaWatt onboarding profile"));
        assert!(text.contains("primaryGoal: gridStability"));

        let parsed: SubmittedProfile = serde_yaml::from_str(&text).unwrap();
        assert_eq!(parsed, submission);
    }
}
