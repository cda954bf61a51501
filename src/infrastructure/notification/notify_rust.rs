//! Cross-platform notification adapter using notify-rust
//!
//! Works on Windows, macOS, and Linux. The summary carries the title
//! line and the body carries the message line of the toast.

use async_trait::async_trait;

use crate::application::ports::{NotificationError, Notifier};

/// Default application identity notifications are attributed to
pub const DEFAULT_APP_NAME: &str = "GoogleCalendarSync";

/// Cross-platform notifier using notify-rust
pub struct NotifyRustNotifier {
    /// Application identity used by the OS notification service
    app_name: String,
}

impl NotifyRustNotifier {
    /// Create a notifier under the default application identity
    pub fn new() -> Self {
        Self::with_app_name(DEFAULT_APP_NAME)
    }

    /// Create with a custom application identity
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }
}

impl Default for NotifyRustNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for NotifyRustNotifier {
    async fn notify(&self, title: &str, message: &str) -> Result<(), NotificationError> {
        let title = title.to_owned();
        let message = message.to_owned();
        let app_name = self.app_name.clone();

        // notify-rust operations can block, so run in spawn_blocking
        tokio::task::spawn_blocking(move || {
            notify_rust::Notification::new()
                .appname(&app_name)
                .summary(&title)
                .body(&message)
                .show()
                .map_err(|e| NotificationError::SendFailed(e.to_string()))?;

            Ok(())
        })
        .await
        .map_err(|e| NotificationError::BackendUnavailable(format!("Task join error: {}", e)))?
    }
}
