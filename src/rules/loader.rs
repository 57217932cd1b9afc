//! Rule table loading
//!
//! The rule table is a header-less CSV file with one `category,description`
//! row per rule. Lines starting with `#` are comments:
//!
//! ```text
//! # utilities are shared
//! joint,Utility Co
//! personal,Gym Membership
//! ```

use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use super::{RuleCategory, RuleRow, RuleSet};
use crate::error::{ReimburseError, ReimburseResult};

/// Load and build the rule set from a file
pub fn load_rules<P: AsRef<Path>>(path: P) -> ReimburseResult<RuleSet> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ReimburseError::Config(format!(
            "Rule table not found: {}",
            path.display()
        )));
    }

    let file = std::fs::File::open(path).map_err(|e| {
        ReimburseError::Io(format!("Failed to open rule table {}: {}", path.display(), e))
    })?;

    let rows = parse_rules(file)?;
    log::info!("Read {} rules from {}", rows.len(), path.display());
    RuleSet::from_rows(rows)
}

/// Parse rule rows from any reader
///
/// Rows with an unrecognised category are skipped with a warning. Rows with
/// fewer than two fields are a configuration error.
pub fn parse_rules<R: Read>(reader: R) -> ReimburseResult<Vec<RuleRow>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut rows = Vec::new();

    for result in csv_reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }

        let (category, description) = match (record.get(0), record.get(1)) {
            (Some(category), Some(description)) => (category, description.trim()),
            _ => {
                return Err(ReimburseError::Config(format!(
                    "Rule table line {}: expected 'category,description'",
                    line
                )))
            }
        };

        if description.is_empty() {
            return Err(ReimburseError::Config(format!(
                "Rule table line {}: empty description",
                line
            )));
        }

        match RuleCategory::parse(category) {
            Some(category) => rows.push(RuleRow::new(category, description)),
            None => log::warn!(
                "Rule table line {}: skipping unknown category '{}'",
                line,
                category.trim()
            ),
        }
    }

    Ok(rows)
}
