//! User settings for reimburse-cli
//!
//! Holds where the rule table and the aggregator export live, how the export
//! formats its dates, and review presentation preferences.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::ReimbursePaths;
use crate::error::ReimburseError;

/// Smallest menu depth that can still reach the category submenus
pub const MIN_MENU_DEPTH: usize = 2;

/// User settings for reimburse-cli
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Rule table location (defaults to `tags.csv` in the base directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules_file: Option<PathBuf>,

    /// Aggregator CSV export location (defaults to `transactions.csv`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_file: Option<PathBuf>,

    /// strftime format of the Date column in the export
    #[serde(default = "default_source_date_format")]
    pub source_date_format: String,

    /// Maximum number of stacked menu frames during review
    #[serde(default = "default_max_menu_depth")]
    pub max_menu_depth: usize,

    /// Column width of the description in report lines
    #[serde(default = "default_description_width")]
    pub description_width: usize,

    /// Currency symbol shown in the review status line
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Whether review outcomes are appended to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_source_date_format() -> String {
    "%m/%d/%Y".to_string()
}

fn default_max_menu_depth() -> usize {
    crate::review::DEFAULT_MAX_DEPTH
}

fn default_description_width() -> usize {
    30
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            rules_file: None,
            source_file: None,
            source_date_format: default_source_date_format(),
            max_menu_depth: default_max_menu_depth(),
            description_width: default_description_width(),
            currency_symbol: default_currency(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &ReimbursePaths) -> Result<Self, ReimburseError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| ReimburseError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            ReimburseError::Config(format!("Failed to parse settings file: {}", e))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ReimbursePaths) -> Result<(), ReimburseError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            ReimburseError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ReimburseError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Reject values the review cannot work with
    pub fn validate(&self) -> Result<(), ReimburseError> {
        if self.max_menu_depth < MIN_MENU_DEPTH {
            return Err(ReimburseError::Config(format!(
                "max_menu_depth must be at least {}, got {}",
                MIN_MENU_DEPTH, self.max_menu_depth
            )));
        }
        if self.source_date_format.trim().is_empty() {
            return Err(ReimburseError::Config(
                "source_date_format must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Resolved rule table path
    pub fn rules_path(&self, paths: &ReimbursePaths) -> PathBuf {
        self.rules_file
            .clone()
            .unwrap_or_else(|| paths.default_rules_file())
    }

    /// Resolved aggregator export path
    pub fn source_path(&self, paths: &ReimbursePaths) -> PathBuf {
        self.source_file
            .clone()
            .unwrap_or_else(|| paths.default_source_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.max_menu_depth, 4);
        assert_eq!(settings.description_width, 30);
        assert_eq!(settings.source_date_format, "%m/%d/%Y");
        assert!(settings.audit_enabled);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReimbursePaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.max_menu_depth = 6;
        settings.rules_file = Some(PathBuf::from("/tmp/rules.csv"));
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
        assert_eq!(loaded.rules_path(&paths), PathBuf::from("/tmp/rules.csv"));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"max_menu_depth": 3}"#).unwrap();
        assert_eq!(settings.max_menu_depth, 3);
        assert_eq!(settings.currency_symbol, "$");
        assert!(settings.rules_file.is_none());
    }

    #[test]
    fn test_shallow_depth_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReimbursePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"max_menu_depth": 1}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_default_paths_resolve_under_base() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReimbursePaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();

        assert_eq!(settings.rules_path(&paths), paths.default_rules_file());
        assert_eq!(settings.source_path(&paths), paths.default_source_file());
    }
}
