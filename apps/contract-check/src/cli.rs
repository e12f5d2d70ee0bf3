//! Command-line definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
/// Inspect and normalize the auth and chat service contracts.
#[derive(Debug, Parser)]
#[command(name = "contract-check")]
#[command(about = "Inspect and normalize petchat service contracts")]
#[command(version)]
pub struct Cli {
    /// Print single-line JSON regardless of CONTRACT_OUTPUT
    #[arg(long, global = true)]
    pub compact: bool,

    /// Enable verbose/debug logging on stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List every known contract and the service that owns it
    List,

    /// Print an illustrative payload for a contract
    Sample {
        /// Contract name or alias, e.g. ChatResponseDto or chat-response
        contract: String,
    },

    /// Decode a payload as a contract and print its canonical form
    Check {
        /// Contract name or alias, e.g. RegisterUserDTO or register-user
        contract: String,

        /// JSON file to read; stdin when omitted
        file: Option<PathBuf>,
    },
}
