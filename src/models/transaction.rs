//! Transaction model
//!
//! A transaction is an immutable record of one financial event plus the
//! classification tag assigned during a run.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use crate::error::{ReimburseError, ReimburseResult};

/// Classification of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    /// Shared expense eligible for reimbursement
    Joint,
    /// Solely the reviewing user's expense
    Personal,
    /// No matching rule; requires manual review
    #[default]
    Unknown,
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Joint => write!(f, "Joint"),
            Self::Personal => write!(f, "Personal"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Direction of a transaction as reported by the aggregator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    #[default]
    Debit,
    Credit,
}

impl TransactionType {
    /// Parse the aggregator's type column ("debit"/"credit", any case)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debit" => Some(Self::Debit),
            "credit" => Some(Self::Credit),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debit => write!(f, "debit"),
            Self::Credit => write!(f, "credit"),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction date
    pub date: NaiveDate,

    /// Description as reported by the aggregator; matched exactly against rules
    pub description: String,

    /// Signed amount
    pub amount: Money,

    #[serde(default)]
    pub transaction_type: TransactionType,

    #[serde(default)]
    pub account_name: String,

    /// Current classification
    #[serde(default)]
    tag: Tag,

    /// True iff the tag came from a rule lookup
    #[serde(default)]
    pre_tagged: bool,
}

impl Transaction {
    /// Create an untagged transaction
    pub fn new(date: NaiveDate, description: impl Into<String>, amount: Money) -> Self {
        Self {
            date,
            description: description.into(),
            amount,
            transaction_type: TransactionType::default(),
            account_name: String::new(),
            tag: Tag::Unknown,
            pre_tagged: false,
        }
    }

    /// Create a transaction with all source fields
    pub fn with_details(
        date: NaiveDate,
        description: impl Into<String>,
        amount: Money,
        transaction_type: TransactionType,
        account_name: impl Into<String>,
    ) -> Self {
        let mut txn = Self::new(date, description, amount);
        txn.transaction_type = transaction_type;
        txn.account_name = account_name.into();
        txn
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn is_pre_tagged(&self) -> bool {
        self.pre_tagged
    }

    /// Tag from a rule lookup
    pub(crate) fn apply_rule_tag(&mut self, tag: Tag) {
        self.pre_tagged = tag != Tag::Unknown;
        self.tag = tag;
    }

    /// Move a reviewed unknown transaction into the joint category
    ///
    /// Only the unknown→joint transition is allowed; `pre_tagged` stays false.
    pub(crate) fn promote_to_joint(&mut self) -> ReimburseResult<()> {
        if self.tag != Tag::Unknown {
            return Err(ReimburseError::Integrity(format!(
                "cannot mark '{}' on {} as joint: it is already tagged {}",
                self.description, self.date, self.tag
            )));
        }
        self.tag = Tag::Joint;
        Ok(())
    }

    /// Drop any classification, e.g. before caching a fresh import
    pub fn clear_tag(&mut self) {
        self.tag = Tag::Unknown;
        self.pre_tagged = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
            "Coffee Shop",
            Money::from_cents(450),
        )
    }

    #[test]
    fn test_new_transaction_is_unknown() {
        let txn = sample();
        assert_eq!(txn.tag(), Tag::Unknown);
        assert!(!txn.is_pre_tagged());
    }

    #[test]
    fn test_rule_tag_sets_pre_tagged() {
        let mut txn = sample();
        txn.apply_rule_tag(Tag::Personal);
        assert_eq!(txn.tag(), Tag::Personal);
        assert!(txn.is_pre_tagged());

        txn.apply_rule_tag(Tag::Unknown);
        assert!(!txn.is_pre_tagged());
    }

    #[test]
    fn test_promote_unknown_to_joint() {
        let mut txn = sample();
        txn.promote_to_joint().unwrap();
        assert_eq!(txn.tag(), Tag::Joint);
        assert!(!txn.is_pre_tagged());
    }

    #[test]
    fn test_promote_rejects_classified() {
        let mut txn = sample();
        txn.apply_rule_tag(Tag::Personal);
        let err = txn.promote_to_joint().unwrap_err();
        assert!(err.is_integrity());
        assert_eq!(txn.tag(), Tag::Personal);
    }

    #[test]
    fn test_transaction_type_parse() {
        assert_eq!(TransactionType::parse("Debit"), Some(TransactionType::Debit));
        assert_eq!(TransactionType::parse(" credit "), Some(TransactionType::Credit));
        assert_eq!(TransactionType::parse("transfer"), None);
    }

    #[test]
    fn test_serde_defaults() {
        let json = r#"{"date":"2025-01-05","description":"Coffee Shop","amount":450}"#;
        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(txn, sample());
    }
}
