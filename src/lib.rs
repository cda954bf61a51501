//! ToastNotify - desktop toast notification CLI
//!
//! This crate provides the core functionality for displaying a single
//! desktop toast notification with a caller-supplied title and message,
//! so other processes can trigger a system notification without embedding
//! notification APIs themselves.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Value objects for the notification request and failure log records
//! - **Application**: The dispatch use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (notify-rust, failure log file)
//! - **CLI**: Command-line interface and argument parsing

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
