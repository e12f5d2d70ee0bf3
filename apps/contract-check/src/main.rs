//! # Contract Check
//!
//! Command-line entry point for inspecting the auth and chat contracts.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use petchat_core::JsonStyle;

mod cli;
mod commands;
mod config;
mod error;
mod telemetry;

use cli::Cli;
use config::AppConfig;

fn main() -> ExitCode {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(err.exit_code());
        }
    };

    telemetry::init_telemetry(&config, cli.verbose);

    let style = if cli.compact {
        JsonStyle::Compact
    } else {
        config.output
    };

    let stdout = io::stdout();
    match commands::execute(&cli.command, style, io::stdin().lock(), &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "Command failed");
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
