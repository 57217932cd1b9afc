//! Review audit trail
//!
//! After every review the decision for each unknown transaction is appended
//! to a line-delimited JSON log (JSONL).
//!
//! - `AuditEntry`: one transaction, the month, and what the review decided.
//! - `AuditLogger`: appends entries and reads them back.

mod entry;
mod logger;

pub use entry::{AuditEntry, Decision};
pub use logger::AuditLogger;
