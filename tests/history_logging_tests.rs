//! Log output of the history recorder.
//!
//! Installs a capturing logger for this test binary. Tests run serially so
//! each one sees only its own records.

use log::{Level, LevelFilter, Log, Metadata, Record};
use serial_test::serial;
use std::fs;
use std::sync::{Mutex, Once};
use sync_history::history::{
    Action, ChangeKind, CompletedOperation, HistoryRecorder, LocalFileService, NoIdentity,
};
use tempfile::TempDir;

struct CaptureLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.records
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};
static INIT: Once = Once::new();

/// Install the capturing logger once and start from an empty buffer
fn captured() -> &'static CaptureLogger {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
    LOGGER.records.lock().unwrap().clear();
    &LOGGER
}

fn take_records() -> Vec<(Level, String)> {
    std::mem::take(&mut *LOGGER.records.lock().unwrap())
}

#[test]
#[serial]
fn test_blocked_directory_logs_one_warning() {
    captured();
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("uSync"), "blocking file").unwrap();

    let recorder = HistoryRecorder::new(NoIdentity, LocalFileService::new(temp.path()));
    let completed = CompletedOperation::new(vec![Action::new("1", "Home", ChangeKind::Update)]);

    assert!(recorder.on_import_completed(&completed).is_none());

    let records = take_records();
    assert_eq!(records.len(), 1, "unexpected records: {records:?}");

    let (level, message) = &records[0];
    assert_eq!(*level, Level::Warn);
    assert!(message.contains("Import"), "missing operation kind: {message}");
    assert!(message.contains("I/O error"), "missing cause: {message}");
    assert!(message.contains("uSync"), "missing path: {message}");
}

#[test]
#[serial]
fn test_no_changes_logs_nothing() {
    captured();
    let temp = TempDir::new().unwrap();
    let recorder = HistoryRecorder::new(NoIdentity, LocalFileService::new(temp.path()));

    let completed = CompletedOperation::new(vec![
        Action::new("1", "Home", ChangeKind::NoChange),
        Action::new("2", "About", ChangeKind::NoChange),
    ]);

    assert!(recorder.on_export_completed(&completed).is_none());
    assert!(take_records().is_empty());
}

#[test]
#[serial]
fn test_saved_history_logs_info() {
    captured();
    let temp = TempDir::new().unwrap();
    let recorder = HistoryRecorder::new(NoIdentity, LocalFileService::new(temp.path()));

    let completed = CompletedOperation::new(vec![Action::new("1", "Home", ChangeKind::Create)]);
    assert!(recorder.on_export_completed(&completed).is_some());

    let records = take_records();
    assert_eq!(records.len(), 1, "unexpected records: {records:?}");
    assert_eq!(records[0].0, Level::Info);
    assert!(records[0].1.contains("Export"));
}
