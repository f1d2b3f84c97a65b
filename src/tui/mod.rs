//! Terminal User Interface module
//!
//! Full-screen onboarding wizard built on ratatui. Each step is rendered as
//! a form of its visible fields; after completion the app switches to a
//! dashboard view of the submitted profile.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
