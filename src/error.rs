//! Custom error types for PrabhaWatt onboarding
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for onboarding operations
#[derive(Error, Debug)]
pub enum OnboardError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for field updates
    #[error("Validation error: {0}")]
    Validation(String),

    /// A required field was left blank
    #[error("Required field missing: {field}")]
    MissingRequired { field: &'static str },

    /// A wizard operation was invoked in a step that does not allow it
    #[error("Cannot {action} from step '{from}'")]
    InvalidTransition {
        from: &'static str,
        action: &'static str,
    },

    /// The wizard already handed off its profile
    #[error("Onboarding has already been completed")]
    WizardFinished,

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// The user quit, or input ended, before completing setup
    #[error("Setup cancelled")]
    Cancelled,
}

impl OnboardError {
    /// Create a "not found" error for the submitted profile
    pub fn profile_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Profile",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error (including missing required fields)
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::MissingRequired { .. })
    }
}

impl From<std::io::Error> for OnboardError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for OnboardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for onboarding operations
pub type OnboardResult<T> = Result<T, OnboardError>;
