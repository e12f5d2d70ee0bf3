//! Data Transfer Objects - request/response types for the service APIs.

pub mod auth;
pub mod chat;

#[cfg(test)]
mod tests {
    use super::auth::{RegisterUserDto, UserResponseDto};
    use super::chat::{ChatHistoryDto, ChatResponseDto};

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_contracts_are_send_and_sync() {
        assert_send_sync::<RegisterUserDto>();
        assert_send_sync::<UserResponseDto>();
        assert_send_sync::<ChatHistoryDto>();
        assert_send_sync::<ChatResponseDto>();
    }
}
