//! File-backed profile submitter
//!
//! Stands in for the backend endpoint: the submitted profile is written to
//! `data/profile.json`, replacing any earlier submission.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::OnboardPaths;
use crate::error::{OnboardError, OnboardResult};
use crate::models::OnboardingProfile;
use crate::submission::{ProfileSubmitter, SubmissionReceipt};

use super::file_io::{read_json_optional, write_json_atomic};

/// A profile together with its submission receipt, as stored on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmittedProfile {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub profile: OnboardingProfile,
}

impl SubmittedProfile {
    pub fn receipt(&self) -> SubmissionReceipt {
        SubmissionReceipt {
            id: self.id,
            submitted_at: self.submitted_at,
        }
    }
}

/// Stores the last submitted profile
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
    audit: Option<AuditLogger>,
}

impl ProfileStore {
    /// Store at the standard location, auditing to the standard log
    pub fn new(paths: &OnboardPaths) -> Self {
        Self {
            path: paths.profile_file(),
            audit: Some(AuditLogger::new(paths.audit_log())),
        }
    }

    /// Store at an arbitrary path without auditing
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            audit: None,
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// The last submission, if any
    pub fn load(&self) -> OnboardResult<Option<SubmittedProfile>> {
        read_json_optional(&self.path)
    }

    /// The last submission, or a not-found error
    pub fn load_required(&self) -> OnboardResult<SubmittedProfile> {
        self.load()?
            .ok_or_else(|| OnboardError::profile_not_found(self.path.display().to_string()))
    }
}

impl ProfileSubmitter for ProfileStore {
    fn submit(&mut self, profile: &OnboardingProfile) -> OnboardResult<SubmissionReceipt> {
        let receipt = SubmissionReceipt::new();
        let record = SubmittedProfile {
            id: receipt.id,
            submitted_at: receipt.submitted_at,
            profile: profile.clone(),
        };

        write_json_atomic(&self.path, &record)?;

        if let Some(audit) = &self.audit {
            audit.record(&AuditEntry::submitted(&receipt, profile));
        }

        Ok(receipt)
    }
}
