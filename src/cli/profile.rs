//! CLI commands for the submitted profile
//!
//! `profile show` prints the last submission as a table; `profile export`
//! writes it as JSON or YAML to a file or stdout.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Subcommand;

use crate::config::{OnboardPaths, Settings};
use crate::display::format_submission;
use crate::error::{OnboardError, OnboardResult};
use crate::export::{export_submission, ExportFormat};
use crate::storage::ProfileStore;

/// Profile subcommands
#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// Show the last submitted profile
    Show,

    /// Export the last submitted profile
    Export {
        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle profile commands
pub fn handle_profile_command(
    paths: &OnboardPaths,
    settings: &Settings,
    cmd: ProfileCommands,
) -> OnboardResult<()> {
    let store = ProfileStore::new(paths);

    match cmd {
        ProfileCommands::Show => {
            let submission = store.load_required().map_err(no_profile_hint)?;
            println!("{}", format_submission(&submission, settings));
        }
        ProfileCommands::Export { format, output } => {
            let submission = store.load_required().map_err(no_profile_hint)?;
            match output {
                Some(path) => {
                    let file = File::create(&path).map_err(|e| {
                        OnboardError::Export(format!("Failed to create {}: {}", path.display(), e))
                    })?;
                    let mut writer = BufWriter::new(file);
                    export_submission(&submission, format, &mut writer)?;
                    writer
                        .flush()
                        .map_err(|e| OnboardError::Export(e.to_string()))?;
                    println!("Exported profile to {} ({})", path.display(), format);
                }
                None => {
                    let stdout = io::stdout();
                    let mut handle = stdout.lock();
                    export_submission(&submission, format, &mut handle)?;
                }
            }
        }
    }

    Ok(())
}

fn no_profile_hint(err: OnboardError) -> OnboardError {
    if err.is_not_found() {
        OnboardError::NotFound {
            entity_type: "Profile",
            identifier: "no onboarding submitted yet; run 'prabhawatt onboard' or 'prabhawatt setup'"
                .into(),
        }
    } else {
        err
    }
}
