//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the library.

pub mod history;
pub mod profile;
pub mod providers;

pub use history::handle_history_command;
pub use profile::{handle_profile_command, ProfileCommands};
pub use providers::handle_providers_command;
