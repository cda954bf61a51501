//! Main app runner for one-shot dispatch

use std::process::ExitCode;

use crate::application::ShowNotificationUseCase;
use crate::domain::NotificationRequest;
use crate::infrastructure::{FileErrorLog, NotifyRustNotifier};

use super::args::NotifyOptions;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Run the one-shot notification dispatch.
///
/// A handled dispatch failure still exits zero: the failure is recorded
/// in the log and never surfaced to the calling process.
pub async fn run_notify(options: NotifyOptions) -> ExitCode {
    let notifier = NotifyRustNotifier::with_app_name(options.app_name);
    let failure_log = match options.log_file {
        Some(path) => FileErrorLog::with_path(path),
        None => FileErrorLog::next_to_executable(),
    };

    let use_case = ShowNotificationUseCase::new(notifier, failure_log);
    let request = NotificationRequest::new(options.title, options.message);

    use_case.execute(request).await;
    ExitCode::from(EXIT_SUCCESS)
}
