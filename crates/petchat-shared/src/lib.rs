//! # Petchat Shared
//!
//! Wire contracts exchanged with the auth and chat services.
//! The two groups are independent of each other; neither carries behavior
//! beyond construction, equality and JSON encoding.

pub mod dto;
pub mod registry;

pub use dto::auth::{RegisterUserDto, UserResponseDto};
pub use dto::chat::{ChatHistoryDto, ChatResponseDto};
pub use petchat_core::{Contract, ContractError, JsonStyle};
pub use registry::{ContractKind, Service};
