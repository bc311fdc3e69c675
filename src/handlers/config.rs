//! Config command handlers

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use sync_history::config::{ConfigManager, HistoryConfig};
use sync_history::history::history_dir;

/// Handle config --show
pub fn handle_config_show() -> Result<()> {
    let config = HistoryConfig::load().context("Failed to load history config")?;
    let temp_root = config.effective_temp_root();

    println!("{}", "History Configuration".cyan().bold());
    println!("{}", "=".repeat(40).cyan());
    println!(
        "  {} {}",
        "Config file:".dimmed(),
        ConfigManager::config_file_path()?.display()
    );
    println!(
        "  {} {}",
        "Enabled:".dimmed(),
        if config.enabled {
            "yes".green()
        } else {
            "no".red()
        }
    );
    println!("  {} {}", "Temp root:".dimmed(), temp_root.display());
    println!(
        "  {} {}",
        "History folder:".dimmed(),
        history_dir(&temp_root).display()
    );

    Ok(())
}

/// Handle config updates
pub fn handle_config_update(enabled: Option<bool>, temp_root: Option<PathBuf>) -> Result<()> {
    let mut config = HistoryConfig::load().context("Failed to load history config")?;

    if let Some(enabled) = enabled {
        config.enabled = enabled;
        println!("{}", format!("Set enabled to {enabled}").green());
    }

    if let Some(root) = temp_root {
        println!("{}", format!("Set temp_root to {}", root.display()).green());
        config.temp_root = Some(root);
    }

    config.save().context("Failed to save history config")?;
    Ok(())
}
