//! Interactive review
//!
//! Classify, let the user pick joint items among the unknowns, record the
//! decisions and print the report.

use anyhow::Result;

use crate::audit::{AuditEntry, AuditLogger};
use crate::display::format_report;
use crate::services::{classify, reconcile};
use crate::tui::run_review;

use super::month::{load_month, MonthOptions, Workspace};

/// Handle the review command
pub fn handle_review_command(workspace: &Workspace, options: &MonthOptions) -> Result<()> {
    let (rules, transactions) = load_month(workspace, options)?;
    let classification = classify(transactions, &rules);

    let outcome = run_review(&classification, options.period, &workspace.settings)?;

    if workspace.settings.audit_enabled {
        let entries = AuditEntry::for_review(options.period, &classification.unknown, &outcome);
        let logger = AuditLogger::new(workspace.paths.audit_log());
        if let Err(e) = logger.log_batch(&entries) {
            log::warn!("Could not write audit log: {}", e);
        }
    }

    if !outcome.is_confirmed() {
        println!("Review quit; unknown transactions were not added.");
    }

    let selections = outcome.into_selections();
    let reconciliation = reconcile(&classification.joint, &classification.unknown, &selections)?;

    print!(
        "{}",
        format_report(&reconciliation, workspace.settings.description_width)
    );
    Ok(())
}
