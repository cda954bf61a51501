//! Failure log port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::LogRecord;

/// Error when appending to the failure log
#[derive(Debug, Clone, Error)]
#[error("Failed to append log record: {0}")]
pub struct AppendError(pub String);

/// Port for best-effort persistence of failure diagnostics.
///
/// Callers at the dispatch boundary must discard an `AppendError` rather
/// than propagate it, so a broken log never masks the original failure.
#[async_trait]
pub trait FailureLog: Send + Sync {
    /// Append a single record, creating the log if absent.
    async fn append(&self, record: &LogRecord) -> Result<(), AppendError>;
}
