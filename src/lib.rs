//! # sync-history
//!
//! Append-only audit trail for a content synchronization tool.
//!
//! ## Overview
//!
//! Whenever an import or export completes, the sync engine reports one action
//! per item it looked at. `sync-history` keeps the actions that are real
//! changes, aggregates them with the acting user and per-kind counts, and
//! writes the result as an indented JSON file named after the completion
//! time:
//!
//! ```text
//! <temp root>/uSync/history/dd_MM_yyyy_HH_mm_ss.json
//! ```
//!
//! Recording is best effort. A failure while saving history is logged as a
//! warning and never reaches the sync operation.
//!
//! ## Example
//!
//! ```no_run
//! use sync_history::history::{
//!     Action, ChangeKind, CompletedOperation, HistoryRecorder, LocalFileService, NoIdentity,
//! };
//!
//! let recorder = HistoryRecorder::new(NoIdentity, LocalFileService::new("/srv/site/temp"));
//! let done = CompletedOperation::new(vec![Action::new("1050", "Home", ChangeKind::Update)]);
//! recorder.on_import_completed(&done);
//! ```

/// Platform-agnostic configuration for the history recorder.
///
/// Locates `config.toml` following platform conventions and loads the
/// recorder settings (enabled flag, temp storage root).
pub mod config;

/// History capture: change filtering, snapshot aggregation, actor
/// resolution and failure-isolated persistence.
pub mod history;

/// Console logging setup, configurable via `RUST_LOG`.
pub mod logger;
