//! Reimbursement report formatting
//!
//! One line per joint transaction followed by the total:
//!
//! ```text
//! 2025-01-03, Utility Co                    ,      50.00
//! 2025-01-09, Coffee Shop                   ,       4.50
//! Total, 54.50
//! ```

use crate::models::{Money, Transaction};
use crate::services::Reconciliation;

/// Width of the right-aligned amount column
pub const AMOUNT_WIDTH: usize = 10;

/// Format a transaction as `date, description, amount`
///
/// The description is padded to `description_width`; longer descriptions are
/// kept whole.
pub fn format_transaction_line(txn: &Transaction, description_width: usize) -> String {
    format!(
        "{}, {:<width$}, {:>amount_width$}",
        txn.date.format("%Y-%m-%d"),
        txn.description,
        txn.amount.format_plain(),
        width = description_width,
        amount_width = AMOUNT_WIDTH,
    )
}

/// Format the closing total line
pub fn format_total_line(total: Money) -> String {
    format!("Total, {}", total.format_plain())
}

/// Format the full report for a reconciliation
pub fn format_report(reconciliation: &Reconciliation, description_width: usize) -> String {
    let mut output = String::new();

    for txn in reconciliation.final_joint.iter() {
        output.push_str(&format_transaction_line(txn, description_width));
        output.push('\n');
    }
    output.push_str(&format_total_line(reconciliation.total));
    output.push('\n');

    output
}
