//! User settings for PrabhaWatt onboarding
//!
//! Manages where the wizard navigates after completion, which provider
//! catalog it offers, and whether onboarding has already run.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::OnboardPaths;
use crate::error::OnboardError;
use crate::storage::file_io::write_json_atomic;

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Route opened once onboarding completes
    #[serde(default = "default_dashboard_path")]
    pub dashboard_path: String,

    /// Provider catalog overriding the built-in DISCOM list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub providers_file: Option<PathBuf>,

    /// Currency symbol shown next to the monthly bill
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for displaying the installation date (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Whether onboarding has been completed
    #[serde(default)]
    pub onboarding_completed: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_dashboard_path() -> String {
    "/dashboard".to_string()
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_date_format() -> String {
    "%d %b %Y".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            dashboard_path: default_dashboard_path(),
            providers_file: None,
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            onboarding_completed: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &OnboardPaths) -> Result<Self, OnboardError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                OnboardError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                OnboardError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &OnboardPaths) -> Result<(), OnboardError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Whether the wizard still has to run
    pub fn needs_onboarding(&self) -> bool {
        !self.onboarding_completed
    }

    /// Record that onboarding finished and persist
    pub fn mark_onboarded(&mut self, paths: &OnboardPaths) -> Result<(), OnboardError> {
        self.onboarding_completed = true;
        self.save(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.dashboard_path, "/dashboard");
        assert_eq!(settings.currency_symbol, "₹");
        assert!(settings.providers_file.is_none());
        assert!(settings.needs_onboarding());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = OnboardPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.dashboard_path = "/home".to_string();
        settings.mark_onboarded(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.dashboard_path, "/home");
        assert!(!loaded.needs_onboarding());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"onboarding_completed": true}"#).unwrap();
        assert_eq!(settings.dashboard_path, "/dashboard");
        assert_eq!(settings.schema_version, 1);
        assert!(settings.onboarding_completed);
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = OnboardPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, OnboardError::Config(_)));
    }
}
