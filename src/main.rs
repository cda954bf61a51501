//! ToastNotify CLI entry point

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;

use toast_notify::cli::{
    app::{run_notify, EXIT_SUCCESS, EXIT_USAGE_ERROR},
    args::{Cli, NotifyOptions},
};

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Clap renders its own usage/help/version output. Missing
            // arguments are an expected path: nothing is shown, nothing
            // is logged.
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    ExitCode::from(EXIT_SUCCESS)
                }
                _ => ExitCode::from(EXIT_USAGE_ERROR),
            };
        }
    };

    run_notify(NotifyOptions::from(cli)).await
}
