//! Tabular preview of the month's classification

use anyhow::Result;

use crate::display::format_preview;
use crate::services::classify;

use super::month::{load_month, MonthOptions, Workspace};

/// Handle the preview command
pub fn handle_preview_command(workspace: &Workspace, options: &MonthOptions) -> Result<()> {
    let (rules, transactions) = load_month(workspace, options)?;
    let classification = classify(transactions, &rules);

    print!(
        "{}",
        format_preview(
            &classification,
            options.period,
            &workspace.settings.currency_symbol
        )
    );
    Ok(())
}
