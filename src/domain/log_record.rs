//! Failure log record value object

use chrono::{DateTime, Local};

/// A single failure record destined for the error log.
///
/// Records are append-only: nothing in the program ever reads them back,
/// rotates them, or bounds their size.
#[derive(Debug, Clone)]
pub struct LogRecord {
    /// Local time the failure was captured
    pub timestamp: DateTime<Local>,
    /// Short description of the failure
    pub message: String,
    /// Debug representation of the underlying error
    pub trace: String,
}

impl LogRecord {
    /// Capture a failure at the current local time
    pub fn capture(message: impl Into<String>, trace: impl Into<String>) -> Self {
        Self::at(Local::now(), message, trace)
    }

    /// Create a record with an explicit timestamp
    pub fn at(
        timestamp: DateTime<Local>,
        message: impl Into<String>,
        trace: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            message: message.into(),
            trace: trace.into(),
        }
    }

    /// Render the record as a log entry.
    ///
    /// Format: `[YYYY-MM-DD HH:MM:SS] <message>` followed by the trace
    /// line and a blank line terminating the record.
    pub fn to_entry(&self) -> String {
        format!(
            "[{}] {}\n{}\n\n",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.message,
            self.trace
        )
    }
}
