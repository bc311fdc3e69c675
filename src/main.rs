mod handlers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use sync_history::history::OperationKind;

#[derive(Parser)]
#[command(name = "sync-history")]
#[command(about = "Record history for completed content import and export operations", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a completed operation from an engine action list
    Record {
        /// Operation that completed: import or export
        #[arg(short, long)]
        operation: OperationKind,

        /// JSON file holding the array of reported actions
        #[arg(short, long)]
        actions: PathBuf,

        /// Total items the engine considered (defaults to the action count)
        #[arg(long)]
        total: Option<usize>,

        /// Acting user; omitted for background runs
        #[arg(short, long)]
        user: Option<String>,

        /// Override the temp storage root for this run
        #[arg(long)]
        temp_root: Option<PathBuf>,
    },

    /// Show or change recorder settings
    Config {
        /// Enable or disable history recording
        #[arg(long)]
        enabled: Option<bool>,

        /// Temp storage root history is written under
        #[arg(long)]
        temp_root: Option<PathBuf>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

fn main() -> Result<()> {
    sync_history::logger::init_logger();

    let cli = Cli::parse();

    match cli.command {
        Commands::Record {
            operation,
            actions,
            total,
            user,
            temp_root,
        } => {
            handlers::handle_record(operation, &actions, total, user, temp_root)?;
        }
        Commands::Config {
            enabled,
            temp_root,
            show,
        } => {
            if show || (enabled.is_none() && temp_root.is_none()) {
                handlers::handle_config_show()?;
            } else {
                handlers::handle_config_update(enabled, temp_root)?;
            }
        }
    }

    Ok(())
}
