//! Application layer - Use cases and port interfaces
//!
//! Contains the dispatch operation and trait definitions
//! for external system interactions.

pub mod notify;
pub mod ports;

// Re-export use cases
pub use notify::{NotifyOutcome, ShowNotificationUseCase};
