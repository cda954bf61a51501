//! Show notification use case

use crate::domain::{LogRecord, NotificationRequest};

use super::ports::{FailureLog, Notifier};

/// Outcome of a dispatch attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyOutcome {
    /// The notification was handed to the OS notification service
    Shown,
    /// Dispatch failed and a record was routed to the failure log
    FailureLogged,
}

/// One-shot notification dispatch use case
pub struct ShowNotificationUseCase<N, L>
where
    N: Notifier,
    L: FailureLog,
{
    notifier: N,
    failure_log: L,
}

impl<N, L> ShowNotificationUseCase<N, L>
where
    N: Notifier,
    L: FailureLog,
{
    /// Create a new use case instance
    pub fn new(notifier: N, failure_log: L) -> Self {
        Self {
            notifier,
            failure_log,
        }
    }

    /// Execute the dispatch workflow.
    ///
    /// Any dispatch failure is captured as a [`LogRecord`] and appended
    /// to the failure log. The append's own result is discarded: a
    /// second failure must not surface past this boundary.
    pub async fn execute(&self, request: NotificationRequest) -> NotifyOutcome {
        match self
            .notifier
            .notify(&request.title, &request.message)
            .await
        {
            Ok(()) => NotifyOutcome::Shown,
            Err(e) => {
                let record = LogRecord::capture(e.to_string(), format!("{:?}", e));
                let _ = self.failure_log.append(&record).await;
                NotifyOutcome::FailureLogged
            }
        }
    }
}
