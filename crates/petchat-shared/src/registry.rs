//! Catalogue of the contracts, addressable by name at runtime.

use std::fmt;
use std::str::FromStr;

use petchat_core::{Contract, ContractError, JsonStyle};

use crate::dto::auth::{RegisterUserDto, UserResponseDto};
use crate::dto::chat::{ChatHistoryDto, ChatResponseDto};

/// The service that owns a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    Auth,
    Chat,
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Service::Auth => f.pad("auth"),
            Service::Chat => f.pad("chat"),
        }
    }
}

/// Every contract known to this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractKind {
    RegisterUser,
    UserResponse,
    ChatHistory,
    ChatResponse,
}

impl ContractKind {
    pub const fn all() -> [ContractKind; 4] {
        [
            ContractKind::RegisterUser,
            ContractKind::UserResponse,
            ContractKind::ChatHistory,
            ContractKind::ChatResponse,
        ]
    }

    /// Contract name, e.g. `RegisterUserDTO`.
    pub const fn name(self) -> &'static str {
        match self {
            ContractKind::RegisterUser => RegisterUserDto::NAME,
            ContractKind::UserResponse => UserResponseDto::NAME,
            ContractKind::ChatHistory => ChatHistoryDto::NAME,
            ContractKind::ChatResponse => ChatResponseDto::NAME,
        }
    }

    /// Short kebab-case alias accepted on the command line.
    pub const fn alias(self) -> &'static str {
        match self {
            ContractKind::RegisterUser => "register-user",
            ContractKind::UserResponse => "user-response",
            ContractKind::ChatHistory => "chat-history",
            ContractKind::ChatResponse => "chat-response",
        }
    }

    pub const fn service(self) -> Service {
        match self {
            ContractKind::RegisterUser | ContractKind::UserResponse => Service::Auth,
            ContractKind::ChatHistory | ContractKind::ChatResponse => Service::Chat,
        }
    }

    /// Decode `json` as this contract and re-encode it canonically.
    ///
    /// Unknown keys are dropped and timestamps are rewritten in wire format,
    /// so the output is what the owning service would itself emit.
    pub fn normalize(self, json: &str, style: JsonStyle) -> Result<String, ContractError> {
        match self {
            ContractKind::RegisterUser => RegisterUserDto::from_json(json)?.encode(style),
            ContractKind::UserResponse => UserResponseDto::from_json(json)?.encode(style),
            ContractKind::ChatHistory => ChatHistoryDto::from_json(json)?.encode(style),
            ContractKind::ChatResponse => ChatResponseDto::from_json(json)?.encode(style),
        }
    }

    /// An illustrative payload of this contract.
    pub fn sample(self, style: JsonStyle) -> Result<String, ContractError> {
        self.normalize(self.sample_json(), style)
    }

    const fn sample_json(self) -> &'static str {
        match self {
            ContractKind::RegisterUser => {
                r#"{"username":"luna","email":"luna@example.com","phone":"+34 600 000 000","password":"changeme","rolId":2}"#
            }
            ContractKind::UserResponse => {
                r#"{"id":1,"username":"luna","email":"luna@example.com","phone":"+34 600 000 000","rol":"USER"}"#
            }
            ContractKind::ChatHistory => {
                r#"{"id":1,"userMessage":"Hi there!","petResponse":"Woof! Hi!","timestamp":"2024-01-01T10:00:00"}"#
            }
            ContractKind::ChatResponse => {
                r#"{"messageId":42,"petResponse":"Woof!","timestamp":"2024-01-01T10:00:00"}"#
            }
        }
    }
}

impl fmt::Display for ContractKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for ContractKind {
    type Err = ContractError;

    /// Accepts the contract name or its alias, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ContractKind::all()
            .into_iter()
            .find(|kind| {
                kind.name().eq_ignore_ascii_case(s) || kind.alias().eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| ContractError::UnknownContract(s.to_string()))
    }
}
