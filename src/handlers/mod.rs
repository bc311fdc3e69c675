//! Command handler modules
//!
//! Handler functions for the `sync-history` host binary, one module per
//! subcommand.

pub mod config;
pub mod record;

pub use config::{handle_config_show, handle_config_update};
pub use record::handle_record;
