//! Append-only failure log adapter

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::application::ports::{AppendError, FailureLog};
use crate::domain::LogRecord;

/// Name of the failure log file colocated with the executable
pub const LOG_FILE_NAME: &str = "errors.log";

/// File-backed failure log.
///
/// Each record is written with a single `write_all` on a file opened in
/// append mode, so records from concurrent invocations do not interleave.
pub struct FileErrorLog {
    path: PathBuf,
}

impl FileErrorLog {
    /// Create a log at `errors.log` next to the running executable.
    ///
    /// Falls back to the current directory when the executable path
    /// cannot be resolved.
    pub fn next_to_executable() -> Self {
        let dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));

        Self {
            path: dir.join(LOG_FILE_NAME),
        }
    }

    /// Create with a custom log file path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Target log file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl FailureLog for FileErrorLog {
    async fn append(&self, record: &LogRecord) -> Result<(), AppendError> {
        let path = self.path.clone();
        let entry = record.to_entry();

        // File IO blocks, so run it off the async runtime
        tokio::task::spawn_blocking(move || {
            let mut file = OpenOptions::new()
                .append(true)
                .create(true)
                .open(&path)
                .map_err(|e| AppendError(e.to_string()))?;

            file.write_all(entry.as_bytes())
                .map_err(|e| AppendError(e.to_string()))
        })
        .await
        .map_err(|e| AppendError(format!("Task join error: {}", e)))?
    }
}
