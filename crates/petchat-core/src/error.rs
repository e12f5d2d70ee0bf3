//! Contract-level error types.

use thiserror::Error;

/// Errors raised while moving a contract across the JSON boundary.
#[derive(Debug, Error)]
pub enum ContractError {
    #[error("Failed to decode {contract}: {source}")]
    Decode {
        contract: &'static str,
        source: serde_json::Error,
    },

    #[error("Failed to encode {contract}: {source}")]
    Encode {
        contract: &'static str,
        source: serde_json::Error,
    },

    #[error("Unknown contract: {0}")]
    UnknownContract(String),
}

impl ContractError {
    /// Name of the contract involved, if the error concerns a known one.
    pub fn contract(&self) -> Option<&'static str> {
        match self {
            ContractError::Decode { contract, .. } | ContractError::Encode { contract, .. } => {
                Some(*contract)
            }
            ContractError::UnknownContract(_) => None,
        }
    }
}
