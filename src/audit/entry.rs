//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{OnboardingProfile, WizardStep};
use crate::submission::SubmissionReceipt;

/// What happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A front-end opened a new wizard
    Started,
    /// The user moved between steps
    StepChanged,
    /// The profile was accepted by the submitter
    Submitted,
    /// The submitter rejected the profile
    SubmissionFailed,
    /// The user left before completing
    Abandoned,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventKind::Started => write!(f, "STARTED"),
            EventKind::StepChanged => write!(f, "STEP"),
            EventKind::Submitted => write!(f, "SUBMITTED"),
            EventKind::SubmissionFailed => write!(f, "FAILED"),
            EventKind::Abandoned => write!(f, "ABANDONED"),
        }
    }
}

/// A single audit log line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the event occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub event: EventKind,

    /// Step the wizard was on after the event
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<WizardStep>,

    /// Free-form detail (front-end name, previous step, error text)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission_id: Option<Uuid>,

    /// Snapshot of the submitted profile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<serde_json::Value>,
}

impl AuditEntry {
    fn new(event: EventKind, step: Option<WizardStep>) -> Self {
        Self {
            timestamp: Utc::now(),
            event,
            step,
            detail: None,
            submission_id: None,
            profile: None,
        }
    }

    /// A wizard was opened by `front_end` ("tui", "prompt")
    pub fn started(front_end: &str) -> Self {
        let mut entry = Self::new(EventKind::Started, Some(WizardStep::FIRST));
        entry.detail = Some(front_end.to_string());
        entry
    }

    pub fn step_changed(from: WizardStep, to: WizardStep) -> Self {
        let mut entry = Self::new(EventKind::StepChanged, Some(to));
        entry.detail = Some(format!("from {}", from.title()));
        entry
    }

    pub fn submitted(receipt: &SubmissionReceipt, profile: &OnboardingProfile) -> Self {
        let mut entry = Self::new(EventKind::Submitted, Some(WizardStep::LAST));
        entry.timestamp = receipt.submitted_at;
        entry.submission_id = Some(receipt.id);
        entry.profile = serde_json::to_value(profile).ok();
        entry
    }

    pub fn submission_failed(step: WizardStep, error: impl std::fmt::Display) -> Self {
        let mut entry = Self::new(EventKind::SubmissionFailed, Some(step));
        entry.detail = Some(error.to_string());
        entry
    }

    pub fn abandoned(step: WizardStep) -> Self {
        Self::new(EventKind::Abandoned, Some(step))
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.event
        );

        if let Some(step) = self.step {
            output.push_str(&format!(" step {} ({})", step.number(), step.title()));
        }

        if let Some(id) = self.submission_id {
            output.push_str(&format!(" id {}", id));
        }

        if let Some(detail) = &self.detail {
            output.push_str(&format!(" - {}", detail));
        }

        output
    }
}
