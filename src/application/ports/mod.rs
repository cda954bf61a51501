//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod failure_log;
pub mod notifier;

// Re-export common types
pub use failure_log::{AppendError, FailureLog};
pub use notifier::{NotificationError, Notifier};
