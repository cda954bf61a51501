//! Notification request value object

/// A single notification to display: a title line and a body line.
///
/// No length or encoding constraints are enforced; whatever the caller
/// supplies is handed to the notification backend as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    /// First line of the toast
    pub title: String,
    /// Second line of the toast
    pub message: String,
}

impl NotificationRequest {
    /// Create a new notification request
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}
