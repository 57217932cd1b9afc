//! Loading the month to process
//!
//! Rules are loaded before anything else so a broken rule table stops the
//! run before the cache is touched or a review starts.

use std::path::PathBuf;

use crate::config::{ReimbursePaths, Settings};
use crate::error::ReimburseResult;
use crate::models::{MonthPeriod, Transaction};
use crate::rules::{load_rules, RuleSet};
use crate::services::ImportService;
use crate::storage::TransactionCache;

/// Resolved paths and settings for one run
pub struct Workspace {
    pub paths: ReimbursePaths,
    pub settings: Settings,
}

impl Workspace {
    pub fn load(paths: ReimbursePaths) -> ReimburseResult<Self> {
        let settings = Settings::load_or_create(&paths)?;
        Ok(Self { paths, settings })
    }

    pub fn cache(&self) -> TransactionCache {
        TransactionCache::new(self.paths.cache_file())
    }
}

/// Which month to process and where its inputs come from
#[derive(Debug, Clone)]
pub struct MonthOptions {
    pub period: MonthPeriod,
    /// Re-import the export into the cache first
    pub refresh: bool,
    pub rules: Option<PathBuf>,
    pub source: Option<PathBuf>,
}

impl MonthOptions {
    pub fn new(period: MonthPeriod) -> Self {
        Self {
            period,
            refresh: false,
            rules: None,
            source: None,
        }
    }
}

/// Load the rule set and the month's transactions
pub fn load_month(
    workspace: &Workspace,
    options: &MonthOptions,
) -> ReimburseResult<(RuleSet, Vec<Transaction>)> {
    let rules_path = options
        .rules
        .clone()
        .unwrap_or_else(|| workspace.settings.rules_path(&workspace.paths));
    let rules = load_rules(&rules_path)?;
    if rules.is_empty() {
        log::warn!(
            "Rule table {} has no rules; every transaction will be unknown",
            rules_path.display()
        );
    } else {
        log::info!(
            "{} joint and {} personal descriptions",
            rules.joint_count(),
            rules.personal_count()
        );
    }

    let cache = workspace.cache();
    if options.refresh {
        let source = options
            .source
            .clone()
            .unwrap_or_else(|| workspace.settings.source_path(&workspace.paths));
        let imported =
            ImportService::new(workspace.settings.source_date_format.clone()).import_file(&source)?;
        cache.store(imported, Some(&source))?;
    }

    let transactions = cache.transactions_for(options.period)?;
    log::info!(
        "Processing {} transactions for {} ({} to {})",
        transactions.len(),
        options.period.long_name(),
        options.period.start_date(),
        options.period.end_date()
    );
    Ok((rules, transactions))
}
