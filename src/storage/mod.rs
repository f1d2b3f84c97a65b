//! Storage layer
//!
//! JSON files written atomically. The only stored document is the last
//! submitted onboarding profile.

pub mod file_io;
pub mod profile_store;

pub use profile_store::{ProfileStore, SubmittedProfile};
