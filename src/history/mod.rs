//! History capture for completed import and export operations.
//!
//! Filters the actions a finished operation reported down to real changes,
//! aggregates them into a [`Snapshot`] and appends it as a timestamped JSON
//! file under `<temp root>/uSync/history/`. Nothing in here can fail the
//! operation that triggered it.

mod action;
mod actor;
mod error;
mod record;
mod recorder;
mod types;
mod writer;

// Re-export public types and functions
pub use action::Action;
pub use actor::{resolve_actor, FixedIdentity, IdentityProvider, NoIdentity, BACKGROUND_ACTOR};
pub use error::{HistoryError, HistoryResult};
pub use record::Snapshot;
pub use recorder::{CompletedOperation, HistoryRecorder, SyncEvent};
pub use types::{has_recordable, is_recordable, recordable, ChangeKind, OperationKind};
pub use writer::{
    history_dir, history_file_path, FileService, LocalFileService, SnapshotWriter,
    HISTORY_FOLDER, MAX_NAME_ATTEMPTS,
};
