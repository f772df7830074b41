//! rsetup: named render-setup presets shared between processes.
//!
//! This is the main entry point for the `rsetup` CLI. It parses arguments,
//! dispatches to the appropriate command handler, and turns the outcome into
//! a report and an exit code.

mod cli;
mod commands;

use cli::Cli;
use rsetup::Report;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse_args();

    let report = match commands::dispatch(cli.dir.as_deref(), cli.command) {
        Ok(report) => report,
        Err(err) => Report::from_error(&err),
    };

    if report.is_error() {
        // Print user-actionable error message to stderr
        eprintln!("{}", report);
    } else {
        println!("{}", report);
    }

    ExitCode::from(report.exit_code() as u8)
}
