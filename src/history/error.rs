use std::path::PathBuf;
use thiserror::Error;

pub type HistoryResult<T> = Result<T, HistoryError>;

/// Reasons a history entry could not be persisted
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("failed to serialize history entry: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("history file already exists: {}", .0.display())]
    Exists(PathBuf),

    #[error("no free history file name near {}", .0.display())]
    NameExhausted(PathBuf),

    #[error("could not resolve temp storage root: {0}")]
    TempRoot(String),
}

impl HistoryError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        HistoryError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_message_includes_path() {
        let err = HistoryError::io(
            "/var/tmp/uSync/history",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let message = err.to_string();
        assert!(message.contains("/var/tmp/uSync/history"));
        assert!(message.contains("denied"));
    }
}
