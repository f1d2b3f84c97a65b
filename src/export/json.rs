//! JSON export

use std::io::Write;

use crate::error::{OnboardError, OnboardResult};
use crate::storage::SubmittedProfile;

/// Write the submission as pretty-printed JSON followed by a newline
pub fn export_json<W: Write>(submission: &SubmittedProfile, writer: &mut W) -> OnboardResult<()> {
    serde_json::to_writer_pretty(&mut *writer, submission)
        .map_err(|e| OnboardError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| OnboardError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OnboardingProfile, ReportFrequency};
    use crate::submission::SubmissionReceipt;

    #[test]
    fn test_json_export_contains_record_keys() {
        let receipt = SubmissionReceipt::new();
        let mut profile = OnboardingProfile::new();
        profile.report_frequency = Some(ReportFrequency::Monthly);
        let submission = SubmittedProfile {
            id: receipt.id,
            submitted_at: receipt.submitted_at,
            profile,
        };

        let mut buffer = Vec::new();
        export_json(&submission, &mut buffer).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["profile"]["reportFrequency"], "monthly");
        assert_eq!(value["id"], receipt.id.to_string());
    }
}
