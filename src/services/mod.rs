//! Service layer for reimburse-cli
//!
//! Classification, reconciliation and import sit here, between the models
//! and the command line.

pub mod classifier;
pub mod import;
pub mod reconciliation;

pub use classifier::{classify, Classification, Partition};
pub use import::{ColumnMapping, ImportService, RowError};
pub use reconciliation::{reconcile, Reconciliation};
