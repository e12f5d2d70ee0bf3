//! Command execution.

use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use petchat_core::JsonStyle;
use petchat_shared::ContractKind;

use crate::cli::Commands;
use crate::error::CliError;

/// Run a command, reading stdin from `input` and writing results to `out`.
pub fn execute<R, W>(
    command: &Commands,
    style: JsonStyle,
    input: R,
    out: &mut W,
) -> Result<(), CliError>
where
    R: Read,
    W: Write,
{
    match command {
        Commands::List => {
            for kind in ContractKind::all() {
                writeln!(out, "{:<16} {:<5} {}", kind.name(), kind.service(), kind.alias())
                    .map_err(CliError::Output)?;
            }
        }
        Commands::Sample { contract } => {
            let contract: ContractKind = contract.parse()?;
            let payload = contract.sample(style)?;
            writeln!(out, "{payload}").map_err(CliError::Output)?;
        }
        Commands::Check { contract, file } => {
            let contract: ContractKind = contract.parse()?;
            let raw = read_payload(file.as_deref(), input)?;
            let payload = contract.normalize(&raw, style)?;
            tracing::info!(
                contract = %contract,
                service = %contract.service(),
                "Payload is valid"
            );
            writeln!(out, "{payload}").map_err(CliError::Output)?;
        }
    }

    Ok(())
}

fn read_payload<R: Read>(file: Option<&Path>, mut input: R) -> Result<String, CliError> {
    match file {
        Some(path) => fs::read_to_string(path).map_err(|source| CliError::Input {
            path: path.display().to_string(),
            source,
        }),
        None => {
            let mut raw = String::new();
            input
                .read_to_string(&mut raw)
                .map_err(|source| CliError::Input {
                    path: "<stdin>".to_string(),
                    source,
                })?;
            Ok(raw)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petchat_core::ContractError;
    use std::io;
    use std::path::PathBuf;

    fn run(command: Commands, style: JsonStyle, stdin: &str) -> Result<String, CliError> {
        let mut out = Vec::new();
        execute(&command, style, stdin.as_bytes(), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_list_shows_every_contract() {
        let out = run(Commands::List, JsonStyle::Pretty, "").unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("RegisterUserDTO"));
        assert!(lines[0].contains("auth"));
        assert!(lines[3].contains("chat-response"));
    }

    #[test]
    fn test_sample_compact() {
        let out = run(
            Commands::Sample {
                contract: "chat-response".to_string(),
            },
            JsonStyle::Compact,
            "",
        )
        .unwrap();

        assert_eq!(
            out,
            "{\"messageId\":42,\"petResponse\":\"Woof!\",\"timestamp\":\"2024-01-01T10:00:00\"}\n"
        );
    }

    #[test]
    fn test_check_from_stdin() {
        let out = run(
            Commands::Check {
                contract: "RegisterUserDTO".to_string(),
                file: None,
            },
            JsonStyle::Compact,
            r#"{"rolId":1,"password":"","phone":"1","email":"a@b.c","username":"kit"}"#,
        )
        .unwrap();

        assert_eq!(
            out.trim_end(),
            r#"{"username":"kit","email":"a@b.c","phone":"1","password":"","rolId":1}"#
        );
    }

    #[test]
    fn test_check_invalid_payload() {
        let err = run(
            Commands::Check {
                contract: "chat-history".to_string(),
                file: None,
            },
            JsonStyle::Pretty,
            r#"{"id":1}"#,
        )
        .unwrap_err();

        assert_eq!(err.exit_code(), 65);
    }

    #[test]
    fn test_unknown_contract_is_a_usage_error() {
        let err = run(
            Commands::Sample {
                contract: "LoginRequest".to_string(),
            },
            JsonStyle::Pretty,
            "",
        )
        .unwrap_err();

        assert!(matches!(
            err,
            CliError::Contract(ContractError::UnknownContract(ref name)) if name == "LoginRequest"
        ));
        assert_eq!(err.exit_code(), 64);

        let err = run(
            Commands::Check {
                contract: "ChatRequestDto".to_string(),
                file: None,
            },
            JsonStyle::Compact,
            r#"{"messageId":1}"#,
        )
        .unwrap_err();
        assert_eq!(err.exit_code(), 64);
    }

    #[test]
    fn test_check_missing_file() {
        let err = run(
            Commands::Check {
                contract: "user-response".to_string(),
                file: Some(PathBuf::from("/nonexistent/petchat/user.json")),
            },
            JsonStyle::Pretty,
            "",
        )
        .unwrap_err();

        assert!(matches!(err, CliError::Input { .. }));
        assert_eq!(err.exit_code(), 66);
    }

    #[test]
    fn test_output_failure_is_reported() {
        struct Closed;

        impl Write for Closed {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err =
            execute(&Commands::List, JsonStyle::Pretty, io::empty(), &mut Closed).unwrap_err();
        assert!(matches!(err, CliError::Output(_)));
        assert_eq!(err.exit_code(), 74);
    }
}
