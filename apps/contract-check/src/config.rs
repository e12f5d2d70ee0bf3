//! Application configuration loaded from environment variables.

use std::env;

use petchat_core::JsonStyle;

use crate::error::CliError;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Name reported in log events.
    pub service_name: String,
    /// Emit logs as JSON lines instead of the pretty formatter.
    pub json_logs: bool,
    /// Layout of payloads written to stdout.
    pub output: JsonStyle,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service_name: "contract-check".to_string(),
            json_logs: false,
            output: JsonStyle::Pretty,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let output = match lookup("CONTRACT_OUTPUT") {
            None => defaults.output,
            Some(value) => match value.to_lowercase().as_str() {
                "pretty" => JsonStyle::Pretty,
                "compact" => JsonStyle::Compact,
                _ => {
                    return Err(CliError::Config(format!(
                        "CONTRACT_OUTPUT must be 'pretty' or 'compact', got '{value}'"
                    )));
                }
            },
        };

        Ok(Self {
            service_name: lookup("SERVICE_NAME").unwrap_or(defaults.service_name),
            json_logs: lookup("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(defaults.json_logs),
            output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, CliError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.service_name, "contract-check");
        assert!(!config.json_logs);
        assert_eq!(config.output, JsonStyle::Pretty);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("SERVICE_NAME", "chat-gateway"),
            ("LOG_FORMAT", "JSON"),
            ("CONTRACT_OUTPUT", "compact"),
        ])
        .unwrap();

        assert_eq!(config.service_name, "chat-gateway");
        assert!(config.json_logs);
        assert_eq!(config.output, JsonStyle::Compact);
    }

    #[test]
    fn test_invalid_output_style() {
        let err = load(&[("CONTRACT_OUTPUT", "yaml")]).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
        assert_eq!(err.exit_code(), 78);
    }
}
