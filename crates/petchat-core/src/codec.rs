//! JSON codec shared by every service contract.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ContractError;

/// Output layout for encoded contracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    #[default]
    Pretty,
    Compact,
}

/// A payload that crosses a service boundary as JSON.
///
/// Implementors only name themselves; encoding and decoding come for free
/// and report failures as [`ContractError`] tagged with that name. Payload
/// bodies are never logged since some contracts carry credentials.
pub trait Contract: Serialize + DeserializeOwned {
    /// Stable contract name, as the services refer to it.
    const NAME: &'static str;

    fn to_json(&self) -> Result<String, ContractError> {
        serde_json::to_string(self).map_err(|source| encode_error(Self::NAME, source))
    }

    fn to_json_pretty(&self) -> Result<String, ContractError> {
        serde_json::to_string_pretty(self).map_err(|source| encode_error(Self::NAME, source))
    }

    fn encode(&self, style: JsonStyle) -> Result<String, ContractError> {
        match style {
            JsonStyle::Pretty => self.to_json_pretty(),
            JsonStyle::Compact => self.to_json(),
        }
    }

    fn to_value(&self) -> Result<serde_json::Value, ContractError> {
        serde_json::to_value(self).map_err(|source| encode_error(Self::NAME, source))
    }

    fn from_json(json: &str) -> Result<Self, ContractError> {
        let decoded =
            serde_json::from_str(json).map_err(|source| decode_error(Self::NAME, source))?;
        tracing::debug!(contract = Self::NAME, bytes = json.len(), "Decoded contract");
        Ok(decoded)
    }

    fn from_slice(bytes: &[u8]) -> Result<Self, ContractError> {
        let decoded =
            serde_json::from_slice(bytes).map_err(|source| decode_error(Self::NAME, source))?;
        tracing::debug!(contract = Self::NAME, bytes = bytes.len(), "Decoded contract");
        Ok(decoded)
    }

    fn from_value(value: serde_json::Value) -> Result<Self, ContractError> {
        let decoded =
            serde_json::from_value(value).map_err(|source| decode_error(Self::NAME, source))?;
        tracing::debug!(contract = Self::NAME, "Decoded contract");
        Ok(decoded)
    }
}

fn decode_error(contract: &'static str, source: serde_json::Error) -> ContractError {
    tracing::debug!(
        contract,
        category = ?source.classify(),
        line = source.line(),
        column = source.column(),
        "Rejected contract payload"
    );
    ContractError::Decode { contract, source }
}

fn encode_error(contract: &'static str, source: serde_json::Error) -> ContractError {
    tracing::error!(contract, error = %source, "Failed to encode contract");
    ContractError::Encode { contract, source }
}
