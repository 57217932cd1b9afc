//! CLI command handlers
//!
//! Bridges the clap argument parsing in `main` with the rule loader, the
//! transaction cache and the review.

pub mod month;
pub mod preview;
pub mod report;
pub mod review;
pub mod setup;

pub use month::{load_month, MonthOptions, Workspace};
pub use preview::handle_preview_command;
pub use report::handle_report_command;
pub use review::handle_review_command;
pub use setup::{handle_config_command, handle_init_command};
