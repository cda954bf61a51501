//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::Parser;

use crate::infrastructure::notification::DEFAULT_APP_NAME;

/// ToastNotify - display a single desktop toast notification
#[derive(Parser, Debug)]
#[command(name = "notify")]
#[command(version = "1.0.0")]
#[command(about = "Display a desktop toast notification with a title and message")]
#[command(long_about = None)]
pub struct Cli {
    /// Notification title (first line of the toast)
    pub title: String,

    /// Notification body (second line of the toast)
    pub message: String,

    /// Extra arguments are accepted and ignored
    #[arg(hide = true)]
    pub extra: Vec<String>,

    /// Application identity the notification is attributed to
    #[arg(long, value_name = "NAME", default_value = DEFAULT_APP_NAME)]
    pub app_name: String,

    /// Failure log path (defaults to errors.log next to the executable)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Parsed notify options
#[derive(Debug, Clone)]
pub struct NotifyOptions {
    pub title: String,
    pub message: String,
    pub app_name: String,
    pub log_file: Option<PathBuf>,
}

impl From<Cli> for NotifyOptions {
    fn from(cli: Cli) -> Self {
        Self {
            title: cli.title,
            message: cli.message,
            app_name: cli.app_name,
            log_file: cli.log_file,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_title_and_message() {
        let cli = Cli::parse_from(["notify", "Meeting", "Standup in 5 minutes"]);
        assert_eq!(cli.title, "Meeting");
        assert_eq!(cli.message, "Standup in 5 minutes");
        assert!(cli.extra.is_empty());
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn cli_ignores_extra_arguments() {
        let cli = Cli::parse_from(["notify", "Title", "Body", "ignored", "also-ignored"]);
        assert_eq!(cli.title, "Title");
        assert_eq!(cli.message, "Body");
        assert_eq!(cli.extra, vec!["ignored", "also-ignored"]);
    }

    #[test]
    fn cli_defaults_the_app_name() {
        let cli = Cli::parse_from(["notify", "Title", "Body"]);
        assert_eq!(cli.app_name, DEFAULT_APP_NAME);
    }

    #[test]
    fn cli_parses_app_name_override() {
        let cli = Cli::parse_from(["notify", "Title", "Body", "--app-name", "BuildBot"]);
        assert_eq!(cli.app_name, "BuildBot");
    }

    #[test]
    fn cli_parses_log_file() {
        let cli = Cli::parse_from(["notify", "Title", "Body", "--log-file", "/tmp/errors.log"]);
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/errors.log")));
    }

    #[test]
    fn cli_rejects_missing_message() {
        let result = Cli::try_parse_from(["notify", "OnlyTitle"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_rejects_no_arguments() {
        let result = Cli::try_parse_from(["notify"]);
        assert!(result.is_err());
    }

    #[test]
    fn options_carry_over_from_cli() {
        let cli = Cli::parse_from(["notify", "Title", "Body", "--app-name", "BuildBot"]);
        let options = NotifyOptions::from(cli);
        assert_eq!(options.title, "Title");
        assert_eq!(options.message, "Body");
        assert_eq!(options.app_name, "BuildBot");
        assert!(options.log_file.is_none());
    }

    #[test]
    fn verify_cli() {
        // Verify the CLI definition is valid
        Cli::command().debug_assert();
    }
}
