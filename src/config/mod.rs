//! Configuration module for reimburse-cli
//!
//! - Platform-aware path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::ReimbursePaths;
pub use settings::Settings;
