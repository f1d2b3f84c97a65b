//! Completion collaborators
//!
//! When the wizard completes it hands the profile to a [`ProfileSubmitter`]
//! and then asks a [`Navigator`] to open the dashboard route.
//!
//! - `ProfileSubmitter`: receives the whole profile and returns a receipt.
//!   The file-backed implementation is [`crate::storage::ProfileStore`].
//! - `Navigator`: opens a route. [`RouteRecorder`] remembers routes for the
//!   TUI and tests, [`ConsoleNavigator`] prints them.

pub mod navigator;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::OnboardResult;
use crate::models::OnboardingProfile;

pub use navigator::{ConsoleNavigator, RouteRecorder};

/// Acknowledgement of a successful submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    /// Identifier of this submission
    pub id: Uuid,
    /// When the profile was accepted (UTC)
    pub submitted_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    /// Create a receipt stamped now
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
        }
    }

    /// First 8 characters of the id, for status lines
    pub fn short_id(&self) -> String {
        self.id.to_string().chars().take(8).collect()
    }
}

impl Default for SubmissionReceipt {
    fn default() -> Self {
        Self::new()
    }
}

/// Receives the completed profile
pub trait ProfileSubmitter {
    fn submit(&mut self, profile: &OnboardingProfile) -> OnboardResult<SubmissionReceipt>;
}

/// Opens a post-onboarding route
pub trait Navigator {
    fn navigate(&mut self, route: &str) -> OnboardResult<()>;
}

impl<T: ProfileSubmitter + ?Sized> ProfileSubmitter for &mut T {
    fn submit(&mut self, profile: &OnboardingProfile) -> OnboardResult<SubmissionReceipt> {
        (**self).submit(profile)
    }
}

impl<T: Navigator + ?Sized> Navigator for &mut T {
    fn navigate(&mut self, route: &str) -> OnboardResult<()> {
        (**self).navigate(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipts_are_unique() {
        let a = SubmissionReceipt::new();
        let b = SubmissionReceipt::new();
        assert_ne!(a.id, b.id);
        assert_eq!(a.short_id().len(), 8);
    }

    #[test]
    fn test_receipt_serialization() {
        let receipt = SubmissionReceipt::new();
        let json = serde_json::to_string(&receipt).unwrap();
        let parsed: SubmissionReceipt = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, receipt);
    }
}
