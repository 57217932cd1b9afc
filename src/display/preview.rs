//! Tabular preview of a classification

use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::models::MonthPeriod;
use crate::services::{Classification, Partition};

#[derive(Debug, Clone, Tabled)]
struct PreviewRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Type")]
    transaction_type: String,
    #[tabled(rename = "Account")]
    account: String,
}

/// Render one partition as a table headed by `title` and its total
pub fn format_partition_table(title: &str, partition: &Partition, currency_symbol: &str) -> String {
    let mut output = format!(
        "{} ({} transactions, total {})\n",
        title,
        partition.len(),
        partition.total().format_with_symbol(currency_symbol)
    );

    if partition.is_empty() {
        output.push_str("  (none)\n");
        return output;
    }

    let rows: Vec<PreviewRow> = partition
        .iter()
        .enumerate()
        .map(|(index, txn)| PreviewRow {
            index: index + 1,
            date: txn.date.format("%Y-%m-%d").to_string(),
            description: txn.description.clone(),
            amount: txn.amount.format_plain(),
            transaction_type: txn.transaction_type.to_string(),
            account: txn.account_name.clone(),
        })
        .collect();

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::single(3)).with(Alignment::right()))
        .to_string();
    output.push_str(&table);
    output.push('\n');
    output
}

/// Render all three partitions for a month
pub fn format_preview(
    classification: &Classification,
    period: MonthPeriod,
    currency_symbol: &str,
) -> String {
    let sections = [
        ("Joint Reimbursable", &classification.joint),
        ("Personal", &classification.personal),
        ("Unknown", &classification.unknown),
    ];

    let mut output = format!("{}\n\n", period.long_name());
    for (title, partition) in sections {
        output.push_str(&format_partition_table(title, partition, currency_symbol));
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Transaction};
    use crate::rules::{RuleCategory, RuleRow, RuleSet};
    use crate::services::classify;
    use chrono::NaiveDate;

    fn classification() -> Classification {
        let day = NaiveDate::from_ymd_opt(2025, 1, 3).unwrap();
        let rules =
            RuleSet::from_rows(vec![RuleRow::new(RuleCategory::Joint, "Utility Co")]).unwrap();
        classify(
            vec![
                Transaction::new(day, "Utility Co", Money::from_cents(5000)),
                Transaction::new(day, "Coffee Shop", Money::from_cents(450)),
            ],
            &rules,
        )
    }

    #[test]
    fn test_partition_table() {
        let c = classification();
        let table = format_partition_table("Joint Reimbursable", &c.joint, "$");

        assert!(table.starts_with("Joint Reimbursable (1 transactions, total $50.00)"));
        assert!(table.contains("Description"));
        assert!(table.contains("Utility Co"));
        assert!(table.contains("50.00"));
    }

    #[test]
    fn test_empty_partition() {
        let c = classification();
        let table = format_partition_table("Personal", &c.personal, "€");
        assert!(table.contains("(none)"));
        assert!(table.contains("total €0.00"));
    }

    #[test]
    fn test_preview_sections() {
        let preview = format_preview(&classification(), MonthPeriod::new(2025, 1).unwrap(), "$");

        assert!(preview.starts_with("January 2025"));
        let joint = preview.find("Joint Reimbursable").unwrap();
        let personal = preview.find("Personal (").unwrap();
        let unknown = preview.find("Unknown (").unwrap();
        assert!(joint < personal && personal < unknown);
        assert!(preview.contains("Coffee Shop"));
    }
}
