//! PrabhaWatt - household energy onboarding
//!
//! This library provides the onboarding wizard for the PrabhaWatt energy
//! management platform: a four-step flow that collects a household's
//! electricity provider and bill, solar and battery setup, smart devices,
//! energy goal and notification preferences, then submits the profile and
//! opens the dashboard.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: The onboarding profile, its fields, steps and choices
//! - `wizard`: The step state machine and field visibility
//! - `providers`: Electricity provider catalog and autocomplete
//! - `submission`: Submitter and navigator collaborators
//! - `storage`: JSON file storage of the submitted profile
//! - `audit`: Audit logging of wizard activity
//! - `display`, `export`: Terminal tables and JSON/YAML export
//! - `setup`, `tui`: Line-prompt and full-screen front-ends
//! - `cli`: Subcommand handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use prabhawatt::submission::RouteRecorder;
//! use prabhawatt::storage::ProfileStore;
//! use prabhawatt::wizard::WizardController;
//!
//! let mut wizard = WizardController::default();
//! wizard.update_field("monthlyBill".parse()?, "2500".into())?;
//! while wizard.advance() {}
//! let done = wizard.complete(&mut ProfileStore::new(&paths), &mut RouteRecorder::new())?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod providers;
pub mod setup;
pub mod storage;
pub mod submission;
pub mod tui;
pub mod wizard;

pub use error::{OnboardError, OnboardResult};
