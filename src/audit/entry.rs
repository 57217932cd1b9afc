//! Audit entry data structures
//!
//! One entry records what happened to one unknown transaction at the end of
//! a review.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{ItemId, Money, MonthPeriod};
use crate::review::ReviewOutcome;
use crate::services::Partition;

/// What the review decided for an unknown transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    /// Selected and confirmed; added to the joint total
    Included,
    /// Left unselected when the review was confirmed
    Excluded,
    /// The review was quit, so any selection was dropped
    Discarded,
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::Included => write!(f, "INCLUDED"),
            Decision::Excluded => write!(f, "EXCLUDED"),
            Decision::Discarded => write!(f, "DISCARDED"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the review ended (UTC)
    pub timestamp: DateTime<Utc>,

    /// Month that was reviewed
    pub period: MonthPeriod,

    pub decision: Decision,

    /// Position of the transaction in the unknown partition
    pub item: ItemId,

    pub date: NaiveDate,
    pub description: String,
    pub amount: Money,
}

impl AuditEntry {
    /// One entry per unknown transaction, in partition order
    pub fn for_review(
        period: MonthPeriod,
        unknown: &Partition,
        outcome: &ReviewOutcome,
    ) -> Vec<AuditEntry> {
        let timestamp = Utc::now();

        unknown
            .items()
            .map(|(id, txn)| {
                let decision = match outcome {
                    ReviewOutcome::Cancelled => Decision::Discarded,
                    ReviewOutcome::Confirmed(selections) if selections.is_selected(id) => {
                        Decision::Included
                    }
                    ReviewOutcome::Confirmed(_) => Decision::Excluded,
                };

                AuditEntry {
                    timestamp,
                    period,
                    decision,
                    item: id,
                    date: txn.date,
                    description: txn.description.clone(),
                    amount: txn.amount,
                }
            })
            .collect()
    }

    /// One-line summary for display
    pub fn format_human_readable(&self) -> String {
        format!(
            "[{}] {} {} {}, {}, {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.period,
            self.decision,
            self.date,
            self.description,
            self.amount
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Transaction;
    use crate::review::Selections;
    use crate::rules::RuleSet;
    use crate::services::classify;

    fn unknown() -> Partition {
        let day = NaiveDate::from_ymd_opt(2025, 1, 9).unwrap();
        classify(
            vec![
                Transaction::new(day, "Coffee Shop", Money::from_cents(450)),
                Transaction::new(day, "Bookstore", Money::from_cents(1299)),
            ],
            &RuleSet::default(),
        )
        .unknown
    }

    fn period() -> MonthPeriod {
        MonthPeriod::new(2025, 1).unwrap()
    }

    #[test]
    fn test_confirmed_review() {
        let selections: Selections = vec![(ItemId::new(1), true)].into_iter().collect();
        let entries =
            AuditEntry::for_review(period(), &unknown(), &ReviewOutcome::Confirmed(selections));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].decision, Decision::Excluded);
        assert_eq!(entries[1].decision, Decision::Included);
        assert_eq!(entries[1].description, "Bookstore");
    }

    #[test]
    fn test_cancelled_review() {
        let entries = AuditEntry::for_review(period(), &unknown(), &ReviewOutcome::Cancelled);
        assert!(entries.iter().all(|e| e.decision == Decision::Discarded));
    }

    #[test]
    fn test_serialization() {
        let entries = AuditEntry::for_review(period(), &unknown(), &ReviewOutcome::Cancelled);
        let json = serde_json::to_string(&entries[0]).unwrap();

        assert!(json.contains("\"decision\":\"discarded\""));
        let back: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entries[0]);
    }

    #[test]
    fn test_human_readable() {
        let entries = AuditEntry::for_review(period(), &unknown(), &ReviewOutcome::Cancelled);
        let line = entries[0].format_human_readable();

        assert!(line.contains("2025-01 DISCARDED"));
        assert!(line.contains("Coffee Shop"));
        assert!(line.contains("$4.50"));
    }
}
