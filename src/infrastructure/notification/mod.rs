//! Notification infrastructure module
//!
//! Cross-platform notification support using notify-rust.

mod notify_rust;

pub use notify_rust::{NotifyRustNotifier, DEFAULT_APP_NAME};
