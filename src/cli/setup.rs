//! `init` and `config` commands

use std::fs;

use anyhow::Result;

use crate::audit::AuditLogger;

use super::month::Workspace;

const RULES_TEMPLATE: &str = "\
# category,description
# joint,Utility Co
# personal,Gym Membership
";

/// Write default settings and an empty rule table, keeping existing files
pub fn handle_init_command(workspace: &Workspace) -> Result<()> {
    let paths = &workspace.paths;
    println!("Initializing reimburse-cli at: {}", paths.base_dir().display());

    paths.ensure_directories()?;

    if paths.is_initialized() {
        println!("  Settings already exist: {}", paths.settings_file().display());
    } else {
        workspace.settings.save(paths)?;
        println!("  Wrote settings: {}", paths.settings_file().display());
    }

    let rules = workspace.settings.rules_path(paths);
    if rules.exists() {
        println!("  Rule table already exists: {}", rules.display());
    } else {
        fs::write(&rules, RULES_TEMPLATE)?;
        println!("  Wrote rule table: {}", rules.display());
    }

    println!();
    println!(
        "Export your transactions to {} and run 'reimburse --new' to import them.",
        workspace.settings.source_path(paths).display()
    );
    Ok(())
}

/// Show resolved paths and settings
pub fn handle_config_command(workspace: &Workspace) -> Result<()> {
    let paths = &workspace.paths;
    let settings = &workspace.settings;
    let cache = workspace.cache();

    println!("reimburse-cli Configuration");
    println!("===========================");
    println!("Base directory:   {}", paths.base_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!("Rule table:       {}", settings.rules_path(paths).display());
    println!("Source export:    {}", settings.source_path(paths).display());
    println!("Transaction cache: {}", cache.path().display());
    println!("Audit log:        {}", paths.audit_log().display());
    println!();
    println!("Settings:");
    println!("  Source date format: {}", settings.source_date_format);
    println!("  Max menu depth:     {}", settings.max_menu_depth);
    println!("  Description width:  {}", settings.description_width);
    println!("  Currency symbol:    {}", settings.currency_symbol);
    println!("  Audit enabled:      {}", settings.audit_enabled);

    let audit = AuditLogger::new(paths.audit_log());
    if audit.exists() {
        let recent = audit.read_recent(5)?;
        if !recent.is_empty() {
            println!();
            println!("Recent review decisions:");
            for entry in recent {
                println!("  {}", entry.format_human_readable());
            }
        }
    }
    Ok(())
}
