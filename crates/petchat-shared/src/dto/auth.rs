//! Auth service contracts.

use std::fmt;

use petchat_core::Contract;
use serde::{Deserialize, Serialize};

/// Request to register a new user.
///
/// The password is plaintext at this boundary. Nothing here validates it or
/// any other field; an empty string is a legal value.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserDto {
    pub username: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub rol_id: i64,
}

impl RegisterUserDto {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        password: impl Into<String>,
        rol_id: i64,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            phone: phone.into(),
            password: password.into(),
            rol_id,
        }
    }
}

// Keep credentials out of logs.
impl fmt::Debug for RegisterUserDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterUserDto")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("password", &"***")
            .field("rol_id", &self.rol_id)
            .finish()
    }
}

impl Contract for RegisterUserDto {
    const NAME: &'static str = "RegisterUserDTO";
}

/// Response containing a user's public information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponseDto {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub phone: String,
    /// Role display name, not an identifier.
    pub rol: String,
}

impl UserResponseDto {
    pub fn new(
        id: i64,
        username: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        rol: impl Into<String>,
    ) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
            phone: phone.into(),
            rol: rol.into(),
        }
    }
}

impl Contract for UserResponseDto {
    const NAME: &'static str = "UserResponseDTO";
}
