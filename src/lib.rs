//! reimburse-cli - monthly joint expense reimbursement
//!
//! Classifies one month of transactions against a rule table of known joint
//! and personal descriptions, lets the user decide which unknown
//! transactions are joint in a nested terminal menu, and totals what is
//! owed.
//!
//! # Architecture
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Money, months and transactions
//! - `rules`: Rule table loading and lookup
//! - `services`: Classification, reconciliation and CSV import
//! - `review`: Menu tree, navigation stack and selection state
//! - `storage`: JSON transaction cache
//! - `audit`: Review decision log
//! - `display`: Report and preview formatting
//! - `tui`: Interactive review screen
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use reimburse_cli::review::Selections;
//! use reimburse_cli::rules::load_rules;
//! use reimburse_cli::services::{classify, reconcile};
//!
//! let rules = load_rules("tags.csv")?;
//! let classification = classify(transactions, &rules);
//! let result = reconcile(&classification.joint, &classification.unknown, &Selections::none())?;
//! println!("Total, {}", result.total.format_plain());
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod review;
pub mod rules;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{ReimburseError, ReimburseResult};
