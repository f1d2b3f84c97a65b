//! Provider catalog loading
//!
//! Catalog files use the DISCOM list format:
//!
//! ```json
//! { "DISCOMs": [ { "DISCOM": "BSES Rajdhani Power Limited", "State": "Delhi" } ] }
//! ```
//!
//! Extra keys are ignored. Entries without a `DISCOM` name are skipped.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::config::Settings;
use crate::error::{OnboardError, OnboardResult};

use super::autocomplete::suggest;

const BUILTIN_CATALOG: &str = include_str!("../../data/electricity-providers.json");

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(rename = "DISCOMs", default)]
    discoms: Vec<DiscomEntry>,
}

#[derive(Debug, Deserialize)]
struct DiscomEntry {
    #[serde(rename = "DISCOM", default)]
    discom: Option<String>,
}

/// Supplies provider names in display order
pub trait ProviderSource {
    fn provider_names(&self) -> OnboardResult<Vec<String>>;
}

/// The DISCOM list compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinProviders;

impl ProviderSource for BuiltinProviders {
    fn provider_names(&self) -> OnboardResult<Vec<String>> {
        parse_catalog(BUILTIN_CATALOG)
    }
}

/// A DISCOM list read from disk
#[derive(Debug, Clone)]
pub struct ProviderFile {
    path: PathBuf,
}

impl ProviderFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProviderSource for ProviderFile {
    fn provider_names(&self) -> OnboardResult<Vec<String>> {
        let contents = std::fs::read_to_string(&self.path).map_err(|e| {
            OnboardError::Config(format!(
                "Failed to read provider catalog {}: {}",
                self.path.display(),
                e
            ))
        })?;
        parse_catalog(&contents)
    }
}

/// Parse a catalog document, keeping order and skipping blank names
pub fn parse_catalog(json: &str) -> OnboardResult<Vec<String>> {
    let file: CatalogFile = serde_json::from_str(json)
        .map_err(|e| OnboardError::Config(format!("Invalid provider catalog: {}", e)))?;

    Ok(file
        .discoms
        .into_iter()
        .filter_map(|entry| entry.discom)
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect())
}

/// Ordered list of electricity provider names
#[derive(Debug, Clone, Default)]
pub struct ProviderCatalog {
    names: Vec<String>,
}

impl ProviderCatalog {
    /// Wrap an already-loaded list
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    pub fn from_source<S: ProviderSource + ?Sized>(source: &S) -> OnboardResult<Self> {
        Ok(Self::new(source.provider_names()?))
    }

    /// The built-in DISCOM list
    pub fn builtin() -> OnboardResult<Self> {
        Self::from_source(&BuiltinProviders)
    }

    /// The catalog configured in settings, falling back to the built-in list
    pub fn load(settings: &Settings) -> OnboardResult<Self> {
        let catalog = match &settings.providers_file {
            Some(path) => Self::from_source(&ProviderFile::new(path))?,
            None => Self::builtin()?,
        };
        tracing::debug!(count = catalog.len(), "provider catalog loaded");
        Ok(catalog)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Exact (case-insensitive) catalog entry for `name`
    pub fn find(&self, name: &str) -> Option<&str> {
        let name = name.trim();
        self.names
            .iter()
            .find(|n| n.eq_ignore_ascii_case(name))
            .map(String::as_str)
    }

    /// Autocomplete suggestions for `query`
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<&str> {
        suggest(self.names.as_slice(), query, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = ProviderCatalog::builtin().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.find("bses rajdhani power limited").is_some());
    }

    #[test]
    fn test_parse_skips_missing_and_blank_names() {
        let json = r#"{"DISCOMs": [
            {"DISCOM": "Alpha Power"},
            {"State": "Nowhere"},
            {"DISCOM": "   "},
            {"DISCOM": null},
            {"DISCOM": "Beta Power"},
            {"DISCOM": "Alpha Power"}
        ]}"#;
        let names = parse_catalog(json).unwrap();
        assert_eq!(names, vec!["Alpha Power", "Beta Power", "Alpha Power"]);
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(matches!(
            parse_catalog("[not a catalog"),
            Err(OnboardError::Config(_))
        ));
    }

    #[test]
    fn test_settings_file_overrides_builtin() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("providers.json");
        std::fs::write(&path, r#"{"DISCOMs": [{"DISCOM": "Local Co-op"}]}"#).unwrap();

        let mut settings = Settings::default();
        settings.providers_file = Some(path);

        let catalog = ProviderCatalog::load(&settings).unwrap();
        assert_eq!(catalog.names(), &["Local Co-op".to_string()]);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let source = ProviderFile::new("/nonexistent/providers.json");
        assert!(matches!(
            ProviderCatalog::from_source(&source),
            Err(OnboardError::Config(_))
        ));
    }
}
