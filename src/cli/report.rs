//! Non-interactive report
//!
//! Prints the report as it stands from the rule table alone, the same result
//! as quitting the review from the main menu.

use anyhow::Result;

use crate::display::format_report;
use crate::review::ReviewOutcome;
use crate::services::{classify, reconcile};

use super::month::{load_month, MonthOptions, Workspace};

/// Handle the report command
pub fn handle_report_command(workspace: &Workspace, options: &MonthOptions) -> Result<()> {
    let (rules, transactions) = load_month(workspace, options)?;
    let classification = classify(transactions, &rules);

    let selections = ReviewOutcome::Cancelled.into_selections();
    let reconciliation = reconcile(&classification.joint, &classification.unknown, &selections)?;

    print!(
        "{}",
        format_report(&reconciliation, workspace.settings.description_width)
    );
    Ok(())
}
