use chrono::{DateTime, Local};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};

use super::error::{HistoryError, HistoryResult};
use super::record::Snapshot;

/// Folder under the temp root holding history files
pub const HISTORY_FOLDER: [&str; 2] = ["uSync", "history"];

/// Upper bound on `_N` suffixes tried when a file name is taken
pub const MAX_NAME_ATTEMPTS: usize = 100;

const FILE_STAMP_FORMAT: &str = "%d_%m_%Y_%H_%M_%S";

const STAGING_PREFIX: &str = ".history-";
const STAGING_SUFFIX: &str = ".partial";

/// Staging file in `dir`, named so a leftover after a crash is recognisable
fn staging_file(dir: &Path) -> std::io::Result<NamedTempFile> {
    Builder::new()
        .prefix(STAGING_PREFIX)
        .suffix(STAGING_SUFFIX)
        .tempfile_in(dir)
}

/// File operations the history writer needs from its host
pub trait FileService {
    /// Base temporary storage path
    fn temp_root(&self) -> HistoryResult<PathBuf>;

    /// Create every missing directory above `file`
    fn create_folders_for_file(&self, file: &Path) -> HistoryResult<()>;

    /// Write `contents` to `file` in one piece.
    ///
    /// Must fail with [`HistoryError::Exists`] rather than replace an
    /// existing file.
    fn save_new_file(&self, file: &Path, contents: &str) -> HistoryResult<()>;
}

/// [`FileService`] backed by the local disk
#[derive(Debug, Clone)]
pub struct LocalFileService {
    temp_root: PathBuf,
}

impl LocalFileService {
    pub fn new(temp_root: impl Into<PathBuf>) -> Self {
        Self {
            temp_root: temp_root.into(),
        }
    }
}

impl FileService for LocalFileService {
    fn temp_root(&self) -> HistoryResult<PathBuf> {
        if self.temp_root.as_os_str().is_empty() {
            return Err(HistoryError::TempRoot("temp root is empty".to_string()));
        }
        Ok(self.temp_root.clone())
    }

    fn create_folders_for_file(&self, file: &Path) -> HistoryResult<()> {
        if let Some(parent) = file.parent() {
            fs::create_dir_all(parent).map_err(|e| HistoryError::io(parent, e))?;
        }
        Ok(())
    }

    fn save_new_file(&self, file: &Path, contents: &str) -> HistoryResult<()> {
        let dir = file.parent().unwrap_or_else(|| Path::new("."));

        // Stage next to the target so the final move is a same-volume link
        let mut staged = staging_file(dir).map_err(|e| HistoryError::io(dir, e))?;
        staged
            .write_all(contents.as_bytes())
            .and_then(|_| staged.as_file().sync_all())
            .map_err(|e| HistoryError::io(staged.path(), e))?;

        staged.persist_noclobber(file).map_err(|e| {
            if e.error.kind() == std::io::ErrorKind::AlreadyExists {
                HistoryError::Exists(file.to_path_buf())
            } else {
                HistoryError::io(file, e.error)
            }
        })?;

        Ok(())
    }
}

/// Directory history files are written to for a given temp root
pub fn history_dir(base_dir: &Path) -> PathBuf {
    HISTORY_FOLDER
        .iter()
        .fold(base_dir.to_path_buf(), |path, part| path.join(part))
}

/// Path of the history file for a snapshot taken at `timestamp`
pub fn history_file_path(base_dir: &Path, timestamp: &DateTime<Local>) -> PathBuf {
    history_dir(base_dir).join(format!("{}.json", timestamp.format(FILE_STAMP_FORMAT)))
}

fn with_suffix(path: &Path, attempt: usize) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!("{stem}_{attempt}.json"))
}

/// Serializes snapshots and appends them to the history folder
#[derive(Debug, Clone)]
pub struct SnapshotWriter<F> {
    files: F,
}

impl<F: FileService> SnapshotWriter<F> {
    pub fn new(files: F) -> Self {
        Self { files }
    }

    pub fn files(&self) -> &F {
        &self.files
    }

    /// Persist `snapshot` under `base_dir` and return the file written.
    ///
    /// Files are never overwritten: when the timestamp name is taken the
    /// next free `_N` suffix is used instead.
    pub fn persist(&self, snapshot: &Snapshot, base_dir: &Path) -> HistoryResult<PathBuf> {
        let content = serde_json::to_string_pretty(snapshot)?;
        let target = history_file_path(base_dir, &snapshot.timestamp);

        self.files.create_folders_for_file(&target)?;

        for attempt in 0..MAX_NAME_ATTEMPTS {
            let candidate = if attempt == 0 {
                target.clone()
            } else {
                with_suffix(&target, attempt)
            };

            match self.files.save_new_file(&candidate, &content) {
                Ok(()) => return Ok(candidate),
                Err(HistoryError::Exists(taken)) => {
                    log::debug!("History file {} exists, trying next name", taken.display());
                }
                Err(e) => return Err(e),
            }
        }

        Err(HistoryError::NameExhausted(target))
    }
}
