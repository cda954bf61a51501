//! Failure log infrastructure module

mod error_file;

pub use error_file::{FileErrorLog, LOG_FILE_NAME};
