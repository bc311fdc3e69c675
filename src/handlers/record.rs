//! Record command handler
//!
//! Replays an action list exported by the sync engine through the history
//! recorder, exactly as a completion notification would.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use sync_history::config::HistoryConfig;
use sync_history::history::{
    Action, CompletedOperation, FixedIdentity, HistoryRecorder, IdentityProvider,
    LocalFileService, NoIdentity, OperationKind,
};

/// Read a JSON array of actions as produced by the engine
pub fn load_actions(path: &Path) -> Result<Vec<Action>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read actions file: {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse actions JSON from: {}", path.display()))
}

/// Handle record command
pub fn handle_record(
    operation: OperationKind,
    actions_file: &Path,
    total: Option<usize>,
    user: Option<String>,
    temp_root: Option<PathBuf>,
) -> Result<()> {
    let config = HistoryConfig::load().context("Failed to load history config")?;
    let actions = load_actions(actions_file)?;

    let mut completed = CompletedOperation::new(actions);
    if let Some(total) = total {
        completed = completed.with_total(total);
    }

    let temp_root = temp_root.unwrap_or_else(|| config.effective_temp_root());
    let files = LocalFileService::new(&temp_root);

    let written = match user {
        Some(name) => record_with(FixedIdentity(name), files, &config, operation, &completed),
        None => record_with(NoIdentity, files, &config, operation, &completed),
    };

    match written {
        Some(path) => {
            println!(
                "{} {} history saved to {}",
                "✓".green(),
                operation,
                path.display().to_string().cyan()
            );
        }
        None if !config.enabled => {
            println!("{}", "History recording is disabled in config.".yellow());
        }
        None => {
            println!(
                "{} ({} of {} actions were changes; see log for failures)",
                "Nothing recorded.".yellow(),
                sync_history::history::recordable(&completed.actions).len(),
                completed.total
            );
        }
    }

    Ok(())
}

fn record_with<I: IdentityProvider>(
    identity: I,
    files: LocalFileService,
    config: &HistoryConfig,
    operation: OperationKind,
    completed: &CompletedOperation,
) -> Option<PathBuf> {
    let recorder = HistoryRecorder::new(identity, files).with_enabled(config.enabled);
    match operation {
        OperationKind::Import => recorder.on_import_completed(completed),
        OperationKind::Export => recorder.on_export_completed(completed),
    }
}
