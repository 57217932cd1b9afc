//! Display formatting for terminal output
//!
//! The plain-text reimbursement report and the tabular classification
//! preview.

pub mod preview;
pub mod report;

pub use preview::{format_partition_table, format_preview};
pub use report::{format_report, format_total_line, format_transaction_line, AMOUNT_WIDTH};
