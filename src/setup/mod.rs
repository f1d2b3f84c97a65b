//! Line-prompt onboarding
//!
//! Walks through the same four steps as the TUI, one question at a time,
//! for terminals where a full-screen interface is not wanted.

pub mod prompt;
pub mod steps;
pub mod wizard;

pub use prompt::Prompter;
pub use wizard::{SetupResult, SetupWizard};
