//! Modal dialogs

pub mod help;
