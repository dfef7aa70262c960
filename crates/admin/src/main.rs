#![forbid(unsafe_code)]

mod cli;
mod commands;
mod logging;

use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    if let Err(err) = logging::init(&cli.log_level, cli.log_format) {
        eprintln!("ic-admin: {err}");
        return ExitCode::FAILURE;
    }

    let stdout = std::io::stdout();
    match commands::run(&cli.storage_dir, cli.command, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            eprintln!("ic-admin: {err}");
            ExitCode::FAILURE
        }
    }
}
