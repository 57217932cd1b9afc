use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use reimburse_cli::cli::{
    handle_config_command, handle_init_command, handle_preview_command, handle_report_command,
    handle_review_command, MonthOptions, Workspace,
};
use reimburse_cli::config::ReimbursePaths;
use reimburse_cli::models::MonthPeriod;

#[derive(Parser)]
#[command(
    name = "reimburse",
    version,
    about = "Sort a month of transactions into joint and personal spending",
    long_about = "reimburse-cli classifies one month of transactions with a rule table \
                  of known joint and personal descriptions, lets you pick which unknown \
                  transactions are joint reimbursable, and prints the reimbursement total."
)]
struct Cli {
    /// Import the transaction export into the local cache before processing
    #[arg(long = "new", global = true)]
    refresh: bool,

    /// Process the current month instead of the previous one
    #[arg(long, global = true, conflicts_with = "month")]
    current_month: bool,

    /// Process a specific month (YYYY-MM)
    #[arg(long, global = true, value_parser = MonthPeriod::parse)]
    month: Option<MonthPeriod>,

    /// Rule table to use instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    rules: Option<PathBuf>,

    /// Transaction export to import with --new
    #[arg(long, global = true, value_name = "PATH")]
    source: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Review unknown transactions interactively, then print the report
    Review,

    /// Print the report using the rule table only
    Report,

    /// Show the joint, personal and unknown transactions as tables
    Preview,

    /// Write default settings and an empty rule table
    Init,

    /// Show current configuration and paths
    Config,
}

impl Cli {
    fn month_options(&self) -> MonthOptions {
        let period = match self.month {
            Some(period) => period,
            None if self.current_month => MonthPeriod::current(),
            None => MonthPeriod::previous(),
        };

        MonthOptions {
            period,
            refresh: self.refresh,
            rules: self.rules.clone(),
            source: self.source.clone(),
        }
    }
}

fn init_logging() {
    let _ = pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .try_init();
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    let paths = ReimbursePaths::new()?;
    let workspace = Workspace::load(paths)?;
    let options = cli.month_options();

    match cli.command.unwrap_or(Commands::Review) {
        Commands::Review => handle_review_command(&workspace, &options)?,
        Commands::Report => handle_report_command(&workspace, &options)?,
        Commands::Preview => handle_preview_command(&workspace, &options)?,
        Commands::Init => handle_init_command(&workspace)?,
        Commands::Config => handle_config_command(&workspace)?,
    }

    Ok(())
}
