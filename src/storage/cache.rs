//! Local cache of imported transactions
//!
//! Holds the last import as a JSON snapshot so that runs without `--new`
//! don't need the export file.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ReimburseError, ReimburseResult};
use crate::models::{MonthPeriod, Transaction};

use super::file_io::{read_json_required, write_json_atomic};

/// On-disk layout of the cache file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheData {
    /// When the export was imported
    pub imported_at: DateTime<Utc>,
    /// Export file the transactions came from
    #[serde(default)]
    pub source: Option<PathBuf>,
    pub transactions: Vec<Transaction>,
}

/// Transaction cache backed by a single JSON file
pub struct TransactionCache {
    path: PathBuf,
}

impl TransactionCache {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Replace the cache contents
    pub fn store(&self, transactions: Vec<Transaction>, source: Option<&Path>) -> ReimburseResult<()> {
        let data = CacheData {
            imported_at: Utc::now(),
            source: source.map(Path::to_path_buf),
            transactions,
        };
        write_json_atomic(&self.path, &data)?;
        log::info!(
            "Cached {} transactions in {}",
            data.transactions.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Read the whole cache
    pub fn load(&self) -> ReimburseResult<CacheData> {
        read_json_required(&self.path).map_err(|e| {
            if e.is_not_found() {
                ReimburseError::NotFound {
                    entity_type: "Transaction cache",
                    identifier: format!("{} (run with --new to import)", self.path.display()),
                }
            } else {
                e
            }
        })
    }

    /// Transactions dated within `period`, in stored order
    pub fn transactions_for(&self, period: MonthPeriod) -> ReimburseResult<Vec<Transaction>> {
        let data = self.load()?;
        let transactions: Vec<Transaction> = data
            .transactions
            .into_iter()
            .filter(|t| period.contains(t.date))
            .map(|mut t| {
                t.clear_tag();
                t
            })
            .collect();

        log::debug!("{} transactions cached for {}", transactions.len(), period);
        Ok(transactions)
    }
}
