//! CSV import of the aggregator transaction export
//!
//! The export carries a header row; columns are located by name so extra or
//! reordered columns don't matter. Every row must parse or the import fails.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};

use crate::error::{ReimburseError, ReimburseResult};
use crate::models::{Money, Transaction, TransactionType};

/// Date format used when the configured one doesn't match
const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";

/// Maximum number of row errors quoted in an import error
const MAX_REPORTED_ERRORS: usize = 5;

/// Column positions within the export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    pub date_column: usize,
    pub description_column: usize,
    pub amount_column: usize,
    pub transaction_type_column: Option<usize>,
    pub account_column: Option<usize>,
}

impl ColumnMapping {
    /// Locate columns by header name, ignoring case and surrounding spaces
    pub fn from_headers(headers: &StringRecord) -> ReimburseResult<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };
        let require = |name: &str| {
            find(name).ok_or_else(|| {
                ReimburseError::Import(format!("Missing '{}' column in header", name))
            })
        };

        Ok(Self {
            date_column: require("Date")?,
            description_column: require("Description")?,
            amount_column: require("Amount")?,
            transaction_type_column: find("Transaction Type"),
            account_column: find("Account Name"),
        })
    }
}

/// A row that could not be turned into a transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    /// Line in the file, counting the header as line 1
    pub line: usize,
    pub message: String,
}

/// Parses aggregator exports into transactions
pub struct ImportService {
    date_format: String,
}

impl ImportService {
    pub fn new(date_format: impl Into<String>) -> Self {
        Self {
            date_format: date_format.into(),
        }
    }

    /// Import every transaction of an export file, in file order
    pub fn import_file(&self, path: &Path) -> ReimburseResult<Vec<Transaction>> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ReimburseError::file_not_found(path.display().to_string())
            } else {
                ReimburseError::Io(format!("Failed to open {}: {}", path.display(), e))
            }
        })?;

        let transactions = self.parse_csv_from_reader(file)?;
        log::info!(
            "Imported {} transactions from {}",
            transactions.len(),
            path.display()
        );
        Ok(transactions)
    }

    /// Parse an export from any reader
    pub fn parse_csv_from_reader<R: Read>(&self, reader: R) -> ReimburseResult<Vec<Transaction>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let mapping = ColumnMapping::from_headers(&headers)?;

        let mut transactions = Vec::new();
        let mut errors = Vec::new();

        // line of the previous record, for errors that carry no position
        let mut last_line = 1;

        for result in reader.records() {
            let position = match &result {
                Ok(record) => record.position(),
                Err(e) => e.position(),
            };
            let line = position.map_or(last_line + 1, |p| p.line() as usize);
            last_line = line;

            let parsed = result
                .map_err(|e| format!("Error reading CSV record: {}", e))
                .and_then(|record| self.parse_record(&record, &mapping));

            match parsed {
                Ok(txn) => transactions.push(txn),
                Err(message) => {
                    log::warn!("Line {}: {}", line, message);
                    errors.push(RowError { line, message });
                }
            }
        }

        if !errors.is_empty() {
            return Err(Self::import_error(&errors));
        }

        Ok(transactions)
    }

    fn import_error(errors: &[RowError]) -> ReimburseError {
        let mut details: Vec<String> = errors
            .iter()
            .take(MAX_REPORTED_ERRORS)
            .map(|e| format!("line {}: {}", e.line, e.message))
            .collect();
        if errors.len() > MAX_REPORTED_ERRORS {
            details.push(format!("and {} more", errors.len() - MAX_REPORTED_ERRORS));
        }
        ReimburseError::Import(format!(
            "{} row(s) could not be parsed ({})",
            errors.len(),
            details.join("; ")
        ))
    }

    fn parse_record(
        &self,
        record: &StringRecord,
        mapping: &ColumnMapping,
    ) -> Result<Transaction, String> {
        let field = |column: usize, name: &str| {
            record
                .get(column)
                .map(str::trim)
                .ok_or_else(|| format!("Missing {} column", name))
        };

        let date = self.parse_date(field(mapping.date_column, "date")?)?;
        let description = field(mapping.description_column, "description")?.to_string();
        let amount = parse_amount(field(mapping.amount_column, "amount")?)?;

        let transaction_type = match mapping.transaction_type_column {
            Some(col) => {
                let raw = record.get(col).map(str::trim).unwrap_or("");
                if raw.is_empty() {
                    TransactionType::default()
                } else {
                    TransactionType::parse(raw)
                        .ok_or_else(|| format!("Unknown transaction type: '{}'", raw))?
                }
            }
            None => TransactionType::default(),
        };

        let account_name = mapping
            .account_column
            .and_then(|col| record.get(col))
            .map(|s| s.trim().to_string())
            .unwrap_or_default();

        Ok(Transaction::with_details(
            date,
            description,
            amount,
            transaction_type,
            account_name,
        ))
    }

    fn parse_date(&self, s: &str) -> Result<NaiveDate, String> {
        NaiveDate::parse_from_str(s, &self.date_format)
            .or_else(|_| NaiveDate::parse_from_str(s, FALLBACK_DATE_FORMAT))
            .map_err(|_| format!("Could not parse date: '{}'", s))
    }
}

/// Parse an export amount; parentheses mark a negative value
fn parse_amount(s: &str) -> Result<Money, String> {
    let (negative, value) = match s.strip_prefix('(').and_then(|v| v.strip_suffix(')')) {
        Some(inner) => (true, inner),
        None => (false, s),
    };

    Money::parse(value)
        .map(|m| if negative { -m } else { m })
        .map_err(|e| format!("Could not parse amount '{}': {}", s, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPORT: &str = "\
\"Date\",\"Description\",\"Original Description\",\"Amount\",\"Transaction Type\",\"Category\",\"Account Name\",\"Labels\",\"Notes\"
\"1/03/2025\",\"Utility Co\",\"UTILITY CO 123\",\"50.00\",\"debit\",\"Utilities\",\"Checking\",\"\",\"\"
\"1/09/2025\",\"Coffee Shop\",\"COFFEE #9\",\"4.50\",\"debit\",\"Coffee\",\"Visa\",\"\",\"\"
\"2/01/2025\",\"Paycheck\",\"ACME PAYROLL\",\"1,200.00\",\"credit\",\"Income\",\"Checking\",\"\",\"\"
";

    fn service() -> ImportService {
        ImportService::new("%m/%d/%Y")
    }

    #[test]
    fn test_parse_export() {
        let txns = service().parse_csv_from_reader(EXPORT.as_bytes()).unwrap();
        assert_eq!(txns.len(), 3);

        assert_eq!(txns[0].date, NaiveDate::from_ymd_opt(2025, 1, 3).unwrap());
        assert_eq!(txns[0].description, "Utility Co");
        assert_eq!(txns[0].amount, Money::from_cents(5000));
        assert_eq!(txns[0].account_name, "Checking");

        assert_eq!(txns[2].transaction_type, TransactionType::Credit);
        assert_eq!(txns[2].amount, Money::from_cents(120000));
    }

    #[test]
    fn test_headers_located_by_name() {
        let csv = "amount,DESCRIPTION,date\n-12.34,Refund,2025-03-04\n";
        let txns = service().parse_csv_from_reader(csv.as_bytes()).unwrap();

        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].amount, Money::from_cents(-1234));
        assert_eq!(txns[0].date, NaiveDate::from_ymd_opt(2025, 3, 4).unwrap());
        assert_eq!(txns[0].transaction_type, TransactionType::Debit);
        assert!(txns[0].account_name.is_empty());
    }

    #[test]
    fn test_missing_column() {
        let csv = "Date,Amount\n01/02/2025,1.00\n";
        let err = service().parse_csv_from_reader(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Description"));
    }

    #[test]
    fn test_bad_row_fails_import() {
        let csv = "Date,Description,Amount\n01/02/2025,Ok,1.00\nnot-a-date,Bad,2.00\n01/03/2025,Worse,abc\n";
        let err = service().parse_csv_from_reader(csv.as_bytes()).unwrap_err();
        let message = err.to_string();

        assert!(matches!(err, ReimburseError::Import(_)));
        assert!(message.contains("2 row(s)"));
        assert!(message.contains("line 3"));
        assert!(message.contains("line 4"));
    }

    #[test]
    fn test_oversized_amount_is_row_error() {
        let csv = "Date,Description,Amount\n01/02/2025,Big,99999999999999999\n";
        let err = service().parse_csv_from_reader(csv.as_bytes()).unwrap_err();

        assert!(matches!(err, ReimburseError::Import(_)));
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_row_lines_follow_multiline_fields() {
        let csv = "Date,Description,Amount\n01/02/2025,\"Two\nLines\",1.00\n01/03/2025,Bad,abc\n";
        let err = service().parse_csv_from_reader(csv.as_bytes()).unwrap_err();

        assert!(err.to_string().contains("line 4"));
    }

    #[test]
    fn test_header_only_is_empty() {
        let csv = "Date,Description,Amount\n";
        let txns = service().parse_csv_from_reader(csv.as_bytes()).unwrap();
        assert!(txns.is_empty());
    }

    #[test]
    fn test_parenthesised_amount() {
        assert_eq!(parse_amount("(4.50)").unwrap(), Money::from_cents(-450));
        assert_eq!(parse_amount("$1,000.00").unwrap(), Money::from_cents(100000));
        assert!(parse_amount("").is_err());
    }

    #[test]
    fn test_import_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = service()
            .import_file(&dir.path().join("missing.csv"))
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
