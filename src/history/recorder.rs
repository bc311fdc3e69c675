use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;

use super::action::Action;
use super::actor::{resolve_actor, IdentityProvider};
use super::error::HistoryResult;
use super::record::Snapshot;
use super::types::{self, OperationKind};
use super::writer::{FileService, SnapshotWriter};

/// What the sync engine hands over once an import or export has finished
#[derive(Debug, Clone, Default)]
pub struct CompletedOperation {
    pub actions: Vec<Action>,

    /// Number of items the engine considered. Can exceed `actions.len()`
    /// when the engine summarized part of its report.
    pub total: usize,
}

impl CompletedOperation {
    pub fn new(actions: Vec<Action>) -> Self {
        let total = actions.len();
        Self { actions, total }
    }

    pub fn with_total(mut self, total: usize) -> Self {
        self.total = total.max(self.actions.len());
        self
    }
}

/// Completion notifications raised by the sync engine
#[derive(Debug, Clone)]
pub enum SyncEvent {
    ImportCompleted(CompletedOperation),
    ExportCompleted(CompletedOperation),
}

/// Turns completion notifications into history files.
///
/// Recording is a side channel: nothing that goes wrong in here is ever
/// returned to, or allowed to unwind into, the operation that raised the
/// notification. Failures end up as a warning in the log.
pub struct HistoryRecorder<I, F> {
    identity: I,
    writer: SnapshotWriter<F>,
    enabled: bool,
}

impl<I, F> HistoryRecorder<I, F>
where
    I: IdentityProvider,
    F: FileService,
{
    pub fn new(identity: I, files: F) -> Self {
        Self {
            identity,
            writer: SnapshotWriter::new(files),
            enabled: true,
        }
    }

    /// Turn recording on or off without unhooking the recorder
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn on_import_completed(&self, operation: &CompletedOperation) -> Option<PathBuf> {
        self.record(OperationKind::Import, operation)
    }

    pub fn on_export_completed(&self, operation: &CompletedOperation) -> Option<PathBuf> {
        self.record(OperationKind::Export, operation)
    }

    /// Dispatch a notification to the matching entry point
    pub fn handle(&self, event: &SyncEvent) -> Option<PathBuf> {
        match event {
            SyncEvent::ImportCompleted(operation) => self.on_import_completed(operation),
            SyncEvent::ExportCompleted(operation) => self.on_export_completed(operation),
        }
    }

    /// Record one completed operation, returning the file written, if any
    fn record(&self, kind: OperationKind, operation: &CompletedOperation) -> Option<PathBuf> {
        if !self.enabled {
            return None;
        }

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.save_actions(kind, operation)));

        match outcome {
            Ok(Ok(path)) => path,
            Ok(Err(e)) => {
                log::warn!("Failed to save {kind} history: {e}");
                None
            }
            Err(payload) => {
                log::warn!(
                    "Failed to save {kind} history: unexpected fault: {}",
                    panic_message(payload.as_ref())
                );
                None
            }
        }
    }

    fn save_actions(
        &self,
        kind: OperationKind,
        operation: &CompletedOperation,
    ) -> HistoryResult<Option<PathBuf>> {
        if !types::has_recordable(&operation.actions) {
            return Ok(None);
        }

        let actor = resolve_actor(&self.identity);
        let total = operation.total.max(operation.actions.len());
        let Some(snapshot) = Snapshot::build(&operation.actions, total, kind, actor)
        else {
            return Ok(None);
        };

        let base_dir = self.writer.files().temp_root()?;
        let path = self.writer.persist(&snapshot, &base_dir)?;

        log::info!("Saved history: {} -> {}", snapshot.summary(), path.display());
        Ok(Some(path))
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
