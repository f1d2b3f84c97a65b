//! Audit log of wizard activity
//!
//! Records when a wizard starts, every step change, the submission (with a
//! snapshot of the profile) and abandonment, as line-delimited JSON.
//!
//! # Example
//!
//! ```rust,ignore
//! use prabhawatt::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.record(&AuditEntry::started("tui"));
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EventKind};
pub use logger::AuditLogger;
