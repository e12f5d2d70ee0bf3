//! CLI error types and exit code mapping.

use std::io;

use petchat_core::ContractError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Contract(#[from] ContractError),

    #[error("Failed to read {path}: {source}")]
    Input { path: String, source: io::Error },

    #[error("Failed to write output: {0}")]
    Output(#[source] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to an exit code from `sysexits.h`.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Contract(ContractError::UnknownContract(_)) => 64, // EX_USAGE
            CliError::Contract(ContractError::Decode { .. }) => 65,      // EX_DATAERR
            CliError::Contract(ContractError::Encode { .. }) => 70,      // EX_SOFTWARE
            CliError::Input { source, .. } if source.kind() == io::ErrorKind::NotFound => {
                66 // EX_NOINPUT
            }
            CliError::Input { .. } | CliError::Output(_) => 74, // EX_IOERR
            CliError::Config(_) => 78,                          // EX_CONFIG
        }
    }
}
