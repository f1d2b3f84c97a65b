//! Display formatting for terminal output

pub mod profile;

pub use profile::{format_profile, format_submission, profile_lines};
