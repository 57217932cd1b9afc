//! Reconciliation of review decisions
//!
//! Merges the unknown transactions the user selected into the joint
//! partition and computes the reimbursement total.

use crate::error::{ReimburseError, ReimburseResult};
use crate::models::{Money, Tag};
use crate::review::Selections;

use super::classifier::Partition;

/// Final joint partition and its total
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// Pre-tagged joint items followed by the promoted unknown items
    pub final_joint: Partition,
    /// Sum of every amount in `final_joint`
    pub total: Money,
    /// Number of unknown items promoted to joint
    pub added: usize,
}

/// Apply the selections to the unknown partition
///
/// Selected items are promoted in unknown-partition order. A selection that
/// names no unknown transaction, or a selected transaction that is no longer
/// unknown, is an integrity error.
pub fn reconcile(
    joint: &Partition,
    unknown: &Partition,
    selections: &Selections,
) -> ReimburseResult<Reconciliation> {
    if let Some((id, _)) = selections.iter().find(|(id, _)| unknown.get(*id).is_none()) {
        return Err(ReimburseError::Integrity(format!(
            "selection {} has no matching unknown transaction ({} known)",
            id,
            unknown.len()
        )));
    }

    let mut final_joint = joint.clone();
    let mut added = 0;

    for (id, txn) in unknown.items() {
        if !selections.is_selected(id) {
            continue;
        }
        if txn.tag() != Tag::Unknown {
            return Err(ReimburseError::Integrity(format!(
                "selected transaction {} '{}' is tagged {}, expected Unknown",
                id,
                txn.description,
                txn.tag()
            )));
        }

        let mut promoted = txn.clone();
        promoted.promote_to_joint()?;
        log::debug!("{} {:?} promoted to joint", id, promoted.description);
        final_joint.push(promoted);
        added += 1;
    }

    let total = final_joint.total();
    log::info!(
        "Reconciled {} joint transactions ({} added), total {}",
        final_joint.len(),
        added,
        total
    );

    Ok(Reconciliation {
        final_joint,
        total,
        added,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ItemId, Transaction};
    use crate::rules::{RuleCategory, RuleRow, RuleSet};
    use crate::services::{classify, Classification};
    use chrono::NaiveDate;

    fn scenario() -> Classification {
        let rules =
            RuleSet::from_rows(vec![RuleRow::new(RuleCategory::Joint, "Utility Co")]).unwrap();
        classify(
            vec![
                Transaction::new(
                    NaiveDate::from_ymd_opt(2025, 1, 3).unwrap(),
                    "Utility Co",
                    Money::from_cents(5000),
                ),
                Transaction::new(
                    NaiveDate::from_ymd_opt(2025, 1, 9).unwrap(),
                    "Coffee Shop",
                    Money::from_cents(450),
                ),
            ],
            &rules,
        )
    }

    fn many_unknowns() -> Classification {
        let day = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
        classify(
            (1..=5).map(|i| Transaction::new(day, format!("Shop {}", i), Money::from_cents(i * 100))),
            &RuleSet::default(),
        )
    }

    #[test]
    fn test_selected_item_is_added() {
        let c = scenario();
        let selections: Selections = vec![(ItemId::new(0), true)].into_iter().collect();

        let result = reconcile(&c.joint, &c.unknown, &selections).unwrap();
        assert_eq!(result.total, Money::from_cents(5450));
        assert_eq!(result.added, 1);

        let descriptions: Vec<&str> = result
            .final_joint
            .iter()
            .map(|t| t.description.as_str())
            .collect();
        assert_eq!(descriptions, vec!["Utility Co", "Coffee Shop"]);

        let promoted = &result.final_joint.as_slice()[1];
        assert_eq!(promoted.tag(), Tag::Joint);
        assert!(!promoted.is_pre_tagged());
    }

    #[test]
    fn test_nothing_selected() {
        let c = scenario();
        let result = reconcile(&c.joint, &c.unknown, &Selections::cleared(1)).unwrap();
        assert_eq!(result.total, Money::from_cents(5000));
        assert_eq!(result.added, 0);

        let result = reconcile(&c.joint, &c.unknown, &Selections::none()).unwrap();
        assert_eq!(result.final_joint, c.joint);
    }

    #[test]
    fn test_total_is_joint_plus_selected() {
        let c = many_unknowns();
        let selections: Selections = vec![
            (ItemId::new(1), true),
            (ItemId::new(3), true),
            (ItemId::new(4), false),
        ]
        .into_iter()
        .collect();

        let result = reconcile(&c.joint, &c.unknown, &selections).unwrap();
        let expected = c.joint.total() + Money::from_cents(200) + Money::from_cents(400);
        assert_eq!(result.total, expected);
        assert_eq!(result.final_joint.len(), c.joint.len() + 2);
    }

    #[test]
    fn test_promotion_follows_unknown_order() {
        let c = many_unknowns();
        let selections: Selections = vec![(ItemId::new(4), true), (ItemId::new(0), true)]
            .into_iter()
            .collect();

        let result = reconcile(&c.joint, &c.unknown, &selections).unwrap();
        let descriptions: Vec<&str> = result
            .final_joint
            .iter()
            .map(|t| t.description.as_str())
            .collect();
        assert_eq!(descriptions, vec!["Shop 1", "Shop 5"]);
    }

    #[test]
    fn test_partitions_untouched() {
        let c = scenario();
        let before = c.clone();
        let selections: Selections = vec![(ItemId::new(0), true)].into_iter().collect();

        reconcile(&c.joint, &c.unknown, &selections).unwrap();
        assert_eq!(c, before);
    }

    #[test]
    fn test_unknown_id_is_integrity_error() {
        let c = scenario();
        let selections: Selections = vec![(ItemId::new(7), true)].into_iter().collect();

        let err = reconcile(&c.joint, &c.unknown, &selections).unwrap_err();
        assert!(err.is_integrity());
        assert!(err.to_string().contains("item-7"));
    }

    #[test]
    fn test_selected_non_unknown_is_integrity_error() {
        let c = scenario();
        // pair the selection with the joint partition by mistake
        let selections: Selections = vec![(ItemId::new(0), true)].into_iter().collect();

        let err = reconcile(&c.unknown, &c.joint, &selections).unwrap_err();
        assert!(err.is_integrity());
    }
}
