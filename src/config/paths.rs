//! Path management for reimburse-cli
//!
//! ## Path Resolution Order
//!
//! 1. `REIMBURSE_CLI_DATA_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/reimburse-cli` on Linux,
//!    `~/Library/Application Support/reimburse-cli` on macOS,
//!    `%APPDATA%\reimburse-cli` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::ReimburseError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "REIMBURSE_CLI_DATA_DIR";

/// Manages all paths used by reimburse-cli
#[derive(Debug, Clone)]
pub struct ReimbursePaths {
    base_dir: PathBuf,
}

impl ReimbursePaths {
    /// Create a new ReimbursePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no platform config directory can be determined.
    pub fn new() -> Result<Self, ReimburseError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create ReimbursePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory holding the transaction cache
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the review audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to the cached transactions
    pub fn cache_file(&self) -> PathBuf {
        self.data_dir().join("transactions.json")
    }

    /// Default location of the rule table
    pub fn default_rules_file(&self) -> PathBuf {
        self.base_dir.join("tags.csv")
    }

    /// Default location of the aggregator CSV export
    pub fn default_source_file(&self) -> PathBuf {
        self.base_dir.join("transactions.csv")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), ReimburseError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ReimburseError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| ReimburseError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if settings have been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, ReimburseError> {
    ProjectDirs::from("", "", "reimburse-cli")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| ReimburseError::Config("Could not determine a config directory".into()))
}
