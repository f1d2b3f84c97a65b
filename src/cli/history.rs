//! CLI command for the audit log

use crate::audit::AuditLogger;
use crate::config::OnboardPaths;
use crate::error::OnboardResult;

/// Print the most recent `limit` audit entries, oldest first
pub fn handle_history_command(paths: &OnboardPaths, limit: usize) -> OnboardResult<()> {
    let logger = AuditLogger::new(paths.audit_log());
    let entries = logger.read_recent(limit)?;

    if entries.is_empty() {
        println!("No onboarding activity recorded yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
