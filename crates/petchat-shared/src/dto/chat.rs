//! Chat service contracts.

use chrono::NaiveDateTime;
use petchat_core::Contract;
use serde::{Deserialize, Serialize};

/// One persisted conversation turn: what the user said and how the pet replied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatHistoryDto {
    pub id: i64,
    pub user_message: String,
    pub pet_response: String,
    #[serde(with = "petchat_core::local_datetime")]
    pub timestamp: NaiveDateTime,
}

impl ChatHistoryDto {
    pub fn new(
        id: i64,
        user_message: impl Into<String>,
        pet_response: impl Into<String>,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            user_message: user_message.into(),
            pet_response: pet_response.into(),
            timestamp,
        }
    }
}

impl Contract for ChatHistoryDto {
    const NAME: &'static str = "ChatHistoryDto";
}

/// A single generated reply, correlated to its message by `message_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponseDto {
    pub message_id: i64,
    pub pet_response: String,
    #[serde(with = "petchat_core::local_datetime")]
    pub timestamp: NaiveDateTime,
}

impl ChatResponseDto {
    pub fn new(message_id: i64, pet_response: impl Into<String>, timestamp: NaiveDateTime) -> Self {
        Self {
            message_id,
            pet_response: pet_response.into(),
            timestamp,
        }
    }
}

impl Contract for ChatResponseDto {
    const NAME: &'static str = "ChatResponseDto";
}
