//! Core data models for reimburse-cli
//!
//! Transactions, money amounts, the month under review and the stable ids
//! used to pair review decisions with transactions.

pub mod ids;
pub mod money;
pub mod period;
pub mod transaction;

pub use ids::ItemId;
pub use money::{Money, MoneyParseError};
pub use period::{MonthPeriod, PeriodParseError};
pub use transaction::{Tag, Transaction, TransactionType};
