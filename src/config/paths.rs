//! Path management for PrabhaWatt onboarding
//!
//! ## Path Resolution Order
//!
//! 1. `PRABHAWATT_DATA_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/prabhawatt` on Linux,
//!    `~/Library/Application Support/com.PrabhaWatt.prabhawatt` on macOS,
//!    `%APPDATA%\PrabhaWatt\prabhawatt\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::OnboardError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "PRABHAWATT_DATA_DIR";

/// Manages all paths used by the onboarding tool
#[derive(Debug, Clone)]
pub struct OnboardPaths {
    /// Base directory for all onboarding data
    base_dir: PathBuf,
}

impl OnboardPaths {
    /// Create a new OnboardPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, OnboardError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create OnboardPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to the TUI diagnostics log
    pub fn diagnostics_log(&self) -> PathBuf {
        self.base_dir.join("prabhawatt.log")
    }

    /// Get the path to the last submitted profile
    pub fn profile_file(&self) -> PathBuf {
        self.data_dir().join("profile.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), OnboardError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| OnboardError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| OnboardError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, OnboardError> {
    ProjectDirs::from("com", "PrabhaWatt", "prabhawatt")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| OnboardError::Config("Could not determine home directory".into()))
}
