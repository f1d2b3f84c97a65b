use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use prabhawatt::cli::{
    handle_history_command, handle_profile_command, handle_providers_command, ProfileCommands,
};
use prabhawatt::config::{OnboardPaths, Settings};
use prabhawatt::providers::ProviderCatalog;
use prabhawatt::setup::SetupWizard;
use prabhawatt::storage::ProfileStore;

#[derive(Parser)]
#[command(
    name = "prabhawatt",
    version,
    about = "Household energy onboarding for PrabhaWatt",
    long_about = "PrabhaWatt collects your electricity provider, bill, solar and \
                  battery setup, smart devices and preferences in a short four-step \
                  wizard, then opens your energy dashboard."
)]
struct Cli {
    /// Debug-level diagnostics
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full-screen onboarding wizard
    #[command(alias = "tui")]
    Onboard {
        /// Start a new wizard even if onboarding was completed
        #[arg(long)]
        force: bool,
    },

    /// Run the onboarding wizard as line prompts
    Setup {
        /// Run even if onboarding was completed
        #[arg(long)]
        force: bool,
    },

    /// List electricity providers, or search them
    Providers {
        /// Search text (prefix matches first)
        query: Option<String>,

        /// Maximum number of providers to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Submitted profile commands
    #[command(subcommand)]
    Profile(ProfileCommands),

    /// Show recent onboarding activity
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = OnboardPaths::new()?;
    paths.ensure_directories()?;
    let mut settings = Settings::load_or_create(&paths)?;

    let full_screen = matches!(cli.command, Some(Commands::Onboard { .. }));
    init_tracing(&paths, cli.verbose, full_screen)?;

    match cli.command {
        Some(Commands::Onboard { force }) => {
            let catalog = ProviderCatalog::load(&settings)?;
            let existing = if force || settings.needs_onboarding() {
                None
            } else {
                ProfileStore::new(&paths).load()?
            };
            if let Some(submission) =
                prabhawatt::tui::run_tui(settings, &paths, &catalog, existing)?
            {
                println!(
                    "Submission {} is saved at {}",
                    submission.receipt().short_id(),
                    paths.profile_file().display()
                );
            }
        }
        Some(Commands::Setup { force }) => {
            let wizard = SetupWizard::new(paths.clone());
            if !force && !wizard.needs_setup(&settings) {
                println!("Onboarding is already complete.");
                println!("Run 'prabhawatt setup --force' to start again, or 'prabhawatt profile show' to review it.");
                return Ok(());
            }
            wizard.run(&mut settings)?;
        }
        Some(Commands::Providers { query, limit }) => {
            handle_providers_command(&settings, query, limit)?;
        }
        Some(Commands::Profile(cmd)) => {
            handle_profile_command(&paths, &settings, cmd)?;
        }
        Some(Commands::History { limit }) => {
            handle_history_command(&paths, limit)?;
        }
        Some(Commands::Config) => {
            println!("PrabhaWatt Configuration");
            println!("========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Profile file:     {}", paths.profile_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!("Diagnostics log:  {}", paths.diagnostics_log().display());
            println!();
            println!("Settings:");
            println!("  Dashboard path:       {}", settings.dashboard_path);
            println!(
                "  Providers file:       {}",
                settings
                    .providers_file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(built-in list)".into())
            );
            println!("  Currency symbol:      {}", settings.currency_symbol);
            println!("  Date format:          {}", settings.date_format);
            println!("  Onboarding completed: {}", settings.onboarding_completed);
        }
        None => {
            println!("PrabhaWatt - household energy onboarding");
            println!();
            println!("Run 'prabhawatt --help' for usage information.");
            if settings.needs_onboarding() {
                println!("Run 'prabhawatt onboard' to get started.");
            } else {
                println!("Run 'prabhawatt profile show' to review your profile.");
            }
        }
    }

    Ok(())
}

/// Diagnostics go to stderr, except under the full-screen UI where they
/// would corrupt the alternate screen and go to the diagnostics log instead.
fn init_tracing(paths: &OnboardPaths, verbose: bool, full_screen: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if full_screen {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(paths.diagnostics_log())?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    Ok(())
}
