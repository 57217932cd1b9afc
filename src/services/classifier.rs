//! Rule-driven classification
//!
//! Splits a month of transactions into joint, personal and unknown
//! partitions in a single pass.

use crate::models::{ItemId, Money, Tag, Transaction};
use crate::rules::RuleSet;

/// Ordered transactions sharing one tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    tag: Tag,
    transactions: Vec<Transaction>,
}

impl Partition {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            transactions: Vec::new(),
        }
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    /// Transactions paired with their position-based ids
    pub fn items(&self) -> impl Iterator<Item = (ItemId, &Transaction)> + '_ {
        self.transactions
            .iter()
            .enumerate()
            .map(|(index, txn)| (ItemId::new(index), txn))
    }

    pub fn get(&self, id: ItemId) -> Option<&Transaction> {
        self.transactions.get(id.index())
    }

    pub fn as_slice(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Sum of all amounts
    pub fn total(&self) -> Money {
        self.transactions.iter().map(|t| t.amount).sum()
    }

    pub(crate) fn push(&mut self, txn: Transaction) {
        self.transactions.push(txn);
    }
}

impl<'a> IntoIterator for &'a Partition {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.transactions.iter()
    }
}

/// The three partitions produced by [`classify`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub joint: Partition,
    pub personal: Partition,
    pub unknown: Partition,
}

impl Classification {
    /// Number of classified transactions across all partitions
    pub fn len(&self) -> usize {
        self.joint.len() + self.personal.len() + self.unknown.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Classify transactions against the rule set
///
/// Each transaction lands in exactly one partition, in input order. Matches
/// are tagged and marked pre-tagged; everything else is unknown.
pub fn classify<I>(transactions: I, rules: &RuleSet) -> Classification
where
    I: IntoIterator<Item = Transaction>,
{
    let mut joint = Partition::new(Tag::Joint);
    let mut personal = Partition::new(Tag::Personal);
    let mut unknown = Partition::new(Tag::Unknown);

    for (index, mut txn) in transactions.into_iter().enumerate() {
        let tag = rules
            .lookup(&txn.description)
            .map(|category| category.tag())
            .unwrap_or(Tag::Unknown);

        log::debug!("index {} description = {:?} -> {}", index, txn.description, tag);

        txn.apply_rule_tag(tag);
        match tag {
            Tag::Joint => joint.push(txn),
            Tag::Personal => personal.push(txn),
            Tag::Unknown => unknown.push(txn),
        }
    }

    log::info!(
        "Classified {} joint, {} personal, {} unknown",
        joint.len(),
        personal.len(),
        unknown.len()
    );

    Classification {
        joint,
        personal,
        unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{RuleCategory, RuleRow};
    use chrono::{Datelike, NaiveDate};

    fn txn(day: u32, description: &str, cents: i64) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
            description,
            Money::from_cents(cents),
        )
    }

    fn rules() -> RuleSet {
        RuleSet::from_rows(vec![
            RuleRow::new(RuleCategory::Joint, "Utility Co"),
            RuleRow::new(RuleCategory::Joint, "Grocer"),
            RuleRow::new(RuleCategory::Personal, "Gym"),
        ])
        .unwrap()
    }

    fn month() -> Vec<Transaction> {
        vec![
            txn(1, "Grocer", 8000),
            txn(2, "Coffee Shop", 450),
            txn(3, "Gym", 3000),
            txn(4, "Utility Co", 5000),
            txn(5, "Hardware Store", 2599),
            txn(2, "Coffee Shop", 450),
        ]
    }

    #[test]
    fn test_scenario_partitions() {
        let result = classify(
            vec![txn(1, "Utility Co", 5000), txn(2, "Coffee Shop", 450)],
            &rules(),
        );

        assert_eq!(result.joint.len(), 1);
        let joint = &result.joint.as_slice()[0];
        assert_eq!(joint.description, "Utility Co");
        assert!(joint.is_pre_tagged());

        assert_eq!(result.unknown.len(), 1);
        let unknown = &result.unknown.as_slice()[0];
        assert_eq!(unknown.description, "Coffee Shop");
        assert!(!unknown.is_pre_tagged());
        assert!(result.personal.is_empty());
    }

    #[test]
    fn test_partitions_are_exhaustive_and_tagged() {
        let input = month();
        let result = classify(input.clone(), &rules());

        assert_eq!(result.len(), input.len());
        for (partition, tag) in [
            (&result.joint, Tag::Joint),
            (&result.personal, Tag::Personal),
            (&result.unknown, Tag::Unknown),
        ] {
            assert_eq!(partition.tag(), tag);
            assert!(partition.iter().all(|t| t.tag() == tag));
            assert!(partition
                .iter()
                .all(|t| t.is_pre_tagged() == (tag != Tag::Unknown)));
        }
    }

    #[test]
    fn test_input_order_preserved() {
        let result = classify(month(), &rules());

        let joint: Vec<_> = result.joint.iter().map(|t| t.date.day0()).collect();
        let unknown: Vec<_> = result.unknown.iter().map(|t| t.date.day0()).collect();
        assert_eq!(joint, vec![0, 3]);
        assert_eq!(unknown, vec![1, 4, 1]);
    }

    #[test]
    fn test_identical_unknowns_get_distinct_ids() {
        let result = classify(month(), &rules());
        let ids: Vec<ItemId> = result
            .unknown
            .items()
            .filter(|(_, t)| t.description == "Coffee Shop")
            .map(|(id, _)| id)
            .collect();

        assert_eq!(ids, vec![ItemId::new(0), ItemId::new(2)]);
        assert_eq!(
            result.unknown.get(ids[0]).unwrap(),
            result.unknown.get(ids[1]).unwrap()
        );
    }

    #[test]
    fn test_classify_is_idempotent() {
        let rules = rules();
        let first = classify(month(), &rules);
        let second = classify(month(), &rules);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_rules_everything_unknown() {
        let result = classify(month(), &RuleSet::default());
        assert_eq!(result.unknown.len(), 6);
        assert!(result.joint.is_empty());
        assert_eq!(result.unknown.total(), Money::from_cents(19499));
    }

    #[test]
    fn test_empty_month() {
        let result = classify(Vec::new(), &rules());
        assert!(result.is_empty());
    }
}
