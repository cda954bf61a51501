//! Notification port interface

use async_trait::async_trait;
use thiserror::Error;

/// Notification errors
#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    #[error("Notification backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("Failed to show notification: {0}")]
    SendFailed(String),
}

/// Port for desktop notifications
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Show a desktop notification.
    ///
    /// # Arguments
    /// * `title` - The notification title (first line of the toast)
    /// * `message` - The notification body (second line of the toast)
    ///
    /// # Returns
    /// Ok(()) once the notification has been handed to the OS
    /// notification service, error otherwise. Single attempt, no retries.
    async fn notify(&self, title: &str, message: &str) -> Result<(), NotificationError>;
}

/// Blanket implementation for boxed notifier types
#[async_trait]
impl Notifier for Box<dyn Notifier> {
    async fn notify(&self, title: &str, message: &str) -> Result<(), NotificationError> {
        self.as_ref().notify(title, message).await
    }
}
