//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the OS notification service and the filesystem.

pub mod logging;
pub mod notification;

// Re-export adapters
pub use logging::FileErrorLog;
pub use notification::NotifyRustNotifier;
