//! Export of the submitted profile
//!
//! - `json`: the stored submission as pretty-printed JSON
//! - `yaml`: the same document as YAML with a comment header

pub mod json;
pub mod yaml;

use std::fmt;
use std::io::Write;

use clap::ValueEnum;

use crate::error::OnboardResult;
use crate::storage::SubmittedProfile;

pub use json::export_json;
pub use yaml::export_yaml;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// YAML with a comment header
    #[value(alias = "yml")]
    Yaml,
}

impl ExportFormat {
    /// File extension for this format
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Write `submission` in the requested format
pub fn export_submission<W: Write>(
    submission: &SubmittedProfile,
    format: ExportFormat,
    writer: &mut W,
) -> OnboardResult<()> {
    match format {
        ExportFormat::Json => export_json(submission, writer),
        ExportFormat::Yaml => export_yaml(submission, writer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_cli_value() {
        assert_eq!(
            ExportFormat::from_str("yml", true).unwrap(),
            ExportFormat::Yaml
        );
        assert!(ExportFormat::from_str("csv", true).is_err());
        assert_eq!(ExportFormat::Yaml.to_string(), "yaml");
    }
}
